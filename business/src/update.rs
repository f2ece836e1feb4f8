//! Writing committed edits back to the backend.
//!
//! Commits are queued in [`PendingUpdates`], then [`UpdateRowCommand`] takes the
//! queue from its snapshot and sends one `PUT` per row. Results are only logged
//! and counted; nothing is rolled back.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use griddle_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, State, StateCtx, Time,
    Updater,
};
use log::{error, info, warn};

use crate::{BusinessConfig, CommitOutcome, GridRow, GridState, api};

/// Rows waiting for the next [`UpdateRowCommand`] dispatch.
#[derive(Debug, Clone)]
pub struct PendingUpdates<R> {
    rows: Vec<R>,
}

impl<R> Default for PendingUpdates<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R> PendingUpdates<R> {
    pub fn push(&mut self, row: R) {
        self.rows.push(row);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R: Clone + Send + 'static> State for PendingUpdates<R> {
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Running totals of the writes of resource `R`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateStats {
    pub in_flight: usize,
    pub saved: usize,
    pub failed: usize,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateStatusCompute<R> {
    pub stats: UpdateStats,
    _row: PhantomData<fn() -> R>,
}

impl<R> Default for UpdateStatusCompute<R> {
    fn default() -> Self {
        Self {
            stats: UpdateStats::default(),
            _row: PhantomData,
        }
    }
}

impl<R> UpdateStatusCompute<R> {
    fn new(stats: UpdateStats) -> Self {
        Self {
            stats,
            _row: PhantomData,
        }
    }
}

impl<R: 'static> State for UpdateStatusCompute<R> {}

impl<R: 'static> Compute for UpdateStatusCompute<R> {}

pub struct UpdateRowCommand<R> {
    stats: Arc<Mutex<UpdateStats>>,
    _row: PhantomData<fn() -> R>,
}

impl<R> Default for UpdateRowCommand<R> {
    fn default() -> Self {
        Self {
            stats: Arc::new(Mutex::new(UpdateStats::default())),
            _row: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for UpdateRowCommand<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateRowCommand").finish_non_exhaustive()
    }
}

/// Apply `f` to the shared totals and publish the result.
fn record<R: GridRow>(
    stats: &Mutex<UpdateStats>,
    updater: &Updater,
    f: impl FnOnce(&mut UpdateStats),
) {
    let snapshot = match stats.lock() {
        Ok(mut guard) => {
            f(&mut guard);
            guard.clone()
        }
        Err(poisoned) => {
            let mut guard = poisoned.into_inner();
            f(&mut guard);
            guard.clone()
        }
    };
    updater.set(UpdateStatusCompute::<R>::new(snapshot));
}

impl<R: GridRow> Command for UpdateRowCommand<R> {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let api_url = snap.try_state::<BusinessConfig>().map(BusinessConfig::api_url);
        let rows = snap
            .try_state::<PendingUpdates<R>>()
            .map(|pending| pending.rows().to_vec())
            .unwrap_or_default();
        let stats = Arc::clone(&self.stats);

        Box::pin(async move {
            let Some(api_url) = api_url else {
                error!("UpdateRowCommand: BusinessConfig is not registered");
                return;
            };
            if rows.is_empty() {
                warn!("UpdateRowCommand: Nothing to update for {}", R::RESOURCE);
                return;
            }

            record::<R>(&stats, &updater, |s| s.in_flight += rows.len());

            for (i, row) in rows.iter().enumerate() {
                if cancel.is_cancelled() {
                    warn!("UpdateRowCommand: Cancelled, {} rows not sent", rows.len() - i);
                    record::<R>(&stats, &updater, |s| s.in_flight -= rows.len() - i);
                    return;
                }

                let result = api::update_row(&api_url, row).await;
                record::<R>(&stats, &updater, |s| {
                    s.in_flight -= 1;
                    match &result {
                        Ok(()) => s.saved += 1,
                        Err(err) => {
                            s.failed += 1;
                            s.last_error = Some(err.to_string());
                        }
                    }
                });

                match result {
                    Ok(()) => info!("UpdateRowCommand: Updated {} row {}", R::RESOURCE, row.id()),
                    Err(err) => error!(
                        "UpdateRowCommand: Updating {} row {} failed, status {:?}: {err}",
                        R::RESOURCE,
                        row.id(),
                        err.status()
                    ),
                }
            }
        })
    }
}

/// Queue `row` and dispatch the write.
pub fn enqueue_update<R: GridRow>(ctx: &mut StateCtx, row: R) {
    ctx.update::<PendingUpdates<R>>(|pending| pending.push(row));
    ctx.dispatch::<UpdateRowCommand<R>>();
    ctx.update::<PendingUpdates<R>>(PendingUpdates::clear);
}

/// Commit the open edit at the current frame time and write back whatever the
/// dispatch policy allows.
pub fn commit_and_dispatch<R: GridRow>(ctx: &mut StateCtx) -> CommitOutcome<R> {
    let now = ctx.state::<Time>().now();
    let outcome = ctx.state_mut::<GridState<R>>().commit_edit(now);
    if let Some(row) = outcome.row_to_dispatch() {
        enqueue_update(ctx, row.clone());
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Car, RowId};

    fn car() -> Car {
        Car {
            id: RowId(2),
            make: "Ford".to_owned(),
            model: "Mustang Mach-E".to_owned(),
            price: Some(39995.0),
            electric: true,
        }
    }

    #[test]
    fn pending_updates_snapshot_carries_rows() {
        let mut pending = PendingUpdates::default();
        pending.push(car());

        let boxed = State::snapshot(&pending).unwrap();
        let snap = boxed.downcast::<PendingUpdates<Car>>().unwrap();
        assert_eq!(snap.rows(), &[car()]);
    }

    #[test]
    fn enqueue_clears_queue_after_dispatch() {
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::new("http://127.0.0.1:9"));
        ctx.add_state(PendingUpdates::<Car>::default());
        ctx.record_compute(UpdateStatusCompute::<Car>::default());

        // No command recorded: the dispatch is logged and skipped.
        enqueue_update(&mut ctx, car());

        assert!(ctx.state::<PendingUpdates<Car>>().is_empty());
        assert!(ctx.in_flight().is_empty());
    }

    #[test]
    fn record_publishes_totals() {
        let mut ctx = StateCtx::new();
        ctx.record_compute(UpdateStatusCompute::<Car>::default());
        let stats = Mutex::new(UpdateStats::default());

        record::<Car>(&stats, &ctx.updater(), |s| s.failed += 1);
        ctx.sync_computes();

        let compute = ctx.cached::<UpdateStatusCompute<Car>>().unwrap();
        assert_eq!(compute.stats.failed, 1);
        assert_eq!(compute.stats.saved, 0);
    }
}
