//! Row loading: a manual-only command plus the compute-shaped cache it fills.
//!
//! The command is dispatched once per grid, on the first frame the grid is shown
//! ([`load_on_ready`]). Every finished load carries a fresh generation; the grid
//! installs a load at most once ([`install_loaded_rows`]).

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use griddle_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, State, StateCtx, Updater,
};
use log::{error, info, warn};

use crate::{BusinessConfig, GridRow, GridState, api};

#[derive(Debug, Clone, Default)]
pub enum RowsResult<R> {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<R>),
    Error {
        status: Option<u16>,
        message: String,
    },
}

/// Latest load result of resource `R`. Written only by [`LoadRowsCommand`].
#[derive(Debug, Clone)]
pub struct RowsCompute<R> {
    pub result: RowsResult<R>,
    pub generation: u64,
}

impl<R> Default for RowsCompute<R> {
    fn default() -> Self {
        Self {
            result: RowsResult::Idle,
            generation: 0,
        }
    }
}

impl<R> RowsCompute<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, RowsResult::Loading)
    }

    pub fn rows(&self) -> Option<&[R]> {
        match &self.result {
            RowsResult::Loaded(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            RowsResult::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl<R: 'static> State for RowsCompute<R> {}

impl<R: 'static> Compute for RowsCompute<R> {}

/// `GET {api}/{resource}`, once. Failures are logged with status and message and
/// not retried.
pub struct LoadRowsCommand<R> {
    generation: Arc<AtomicU64>,
    _row: PhantomData<fn() -> R>,
}

impl<R> Default for LoadRowsCommand<R> {
    fn default() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            _row: PhantomData,
        }
    }
}

impl<R> std::fmt::Debug for LoadRowsCommand<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadRowsCommand")
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .finish()
    }
}

impl<R: GridRow> Command for LoadRowsCommand<R> {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let api_url = snap.try_state::<BusinessConfig>().map(BusinessConfig::api_url);

        Box::pin(async move {
            let Some(api_url) = api_url else {
                error!("LoadRowsCommand: BusinessConfig is not registered");
                return;
            };

            updater.set(RowsCompute::<R> {
                result: RowsResult::Loading,
                generation,
            });
            info!("LoadRowsCommand: Fetching {}", R::RESOURCE);

            let result = tokio::select! {
                () = cancel.cancelled() => {
                    warn!("LoadRowsCommand: Fetching {} cancelled", R::RESOURCE);
                    return;
                }
                result = api::list_rows::<R>(&api_url) => result,
            };

            let result = match result {
                Ok(rows) => {
                    info!("LoadRowsCommand: Fetched {} {}", rows.len(), R::RESOURCE);
                    RowsResult::Loaded(rows)
                }
                Err(err) => {
                    error!(
                        "LoadRowsCommand: Fetching {} failed, status {:?}: {err}",
                        R::RESOURCE,
                        err.status()
                    );
                    RowsResult::Error {
                        status: err.status(),
                        message: err.to_string(),
                    }
                }
            };
            updater.set(RowsCompute::<R> { result, generation });
        })
    }
}

/// Dispatch the load the first time the grid is shown. Returns whether it did.
pub fn load_on_ready<R: GridRow>(ctx: &mut StateCtx) -> bool {
    if ctx.state::<GridState<R>>().is_ready() {
        return false;
    }
    ctx.state_mut::<GridState<R>>().mark_ready();
    ctx.dispatch::<LoadRowsCommand<R>>();
    true
}

/// Move a newly loaded collection into the grid.
pub fn install_loaded_rows<R: GridRow>(ctx: &mut StateCtx) -> bool {
    let Some(compute) = ctx.cached::<RowsCompute<R>>() else {
        return false;
    };
    let Some(rows) = compute.rows() else {
        return false;
    };
    let generation = compute.generation;
    if generation <= ctx.state::<GridState<R>>().generation() {
        return false;
    }

    let rows = rows.to_vec();
    ctx.state_mut::<GridState<R>>().install(generation, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Car, RowId};

    fn car() -> Car {
        Car {
            id: RowId(1),
            make: "Tesla".to_owned(),
            model: "Model 3".to_owned(),
            price: Some(42990.0),
            electric: true,
        }
    }

    fn ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::default());
        ctx.add_state(GridState::cars(&BusinessConfig::default()));
        ctx.record_compute(RowsCompute::<Car>::default());
        ctx
    }

    #[test]
    fn loaded_rows_installed_once() {
        let mut ctx = ctx();
        ctx.updater().set(RowsCompute::<Car> {
            result: RowsResult::Loaded(vec![car()]),
            generation: 1,
        });
        ctx.sync_computes();

        assert!(install_loaded_rows::<Car>(&mut ctx));
        assert!(!install_loaded_rows::<Car>(&mut ctx));
        assert_eq!(ctx.state::<GridState<Car>>().rows().len(), 1);
    }

    #[test]
    fn error_result_leaves_grid_untouched() {
        let mut ctx = ctx();
        ctx.updater().set(RowsCompute::<Car> {
            result: RowsResult::Error {
                status: Some(500),
                message: "status 500: boom".to_owned(),
            },
            generation: 1,
        });
        ctx.sync_computes();

        assert!(!install_loaded_rows::<Car>(&mut ctx));
        let compute = ctx.cached::<RowsCompute<Car>>().unwrap();
        assert_eq!(compute.error_message(), Some("status 500: boom"));
        assert!(ctx.state::<GridState<Car>>().rows().is_empty());
    }
}
