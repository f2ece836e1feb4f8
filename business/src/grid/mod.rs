//! Grid model.
//!
//! [`GridState`] owns everything one grid shows: the row collection, the column
//! set, the inline edit session, per-cell hover renderers, the notification
//! queue, paging and selection. The UI only draws it and feeds input back.

mod edit;
mod pager;
mod summary;

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use griddle_states::State;
use log::{debug, info, warn};

pub use edit::{CellRef, CommitOutcome, EditEvent, EditSession};
pub use pager::Pager;
pub use summary::GridSummary;

use crate::capabilities::{Capabilities, RenderContext};
use crate::notification::{NotificationClass, NotificationQueue};
use crate::renderer::{ActionOutcome, HoverIconRenderer};
use crate::{
    BusinessConfig, Car, CellValue, ColumnSet, DispatchPolicy, EditorKind, Employee, GridRow,
    RejectPolicy, RowId, ValidationError, validate,
};

pub const CAR_PAGE_SIZES: &[usize] = &[10, 20];
pub const EMPLOYEE_PAGE_SIZES: &[usize] = &[10, 20, 50];

pub struct GridState<R: GridRow> {
    columns: ColumnSet,
    rows: Vec<R>,
    capabilities: Capabilities<R>,
    session: Option<EditSession>,
    renderers: HashMap<CellRef, HoverIconRenderer>,
    notifications: NotificationQueue,
    pager: Pager,
    selected: BTreeSet<RowId>,
    details: Option<RowId>,
    reject_policy: RejectPolicy,
    dispatch_policy: DispatchPolicy,
    ready: bool,
    generation: u64,
}

impl<R: GridRow> std::fmt::Debug for GridState<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridState")
            .field("resource", &R::RESOURCE)
            .field("rows", &self.rows.len())
            .field("session", &self.session)
            .field("notifications", &self.notifications.len())
            .field("pager", &self.pager)
            .field("selected", &self.selected)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<R: GridRow> State for GridState<R> {}

impl GridState<Car> {
    pub fn cars(config: &BusinessConfig) -> Self {
        Self::new(ColumnSet::cars(), CAR_PAGE_SIZES).configure(config)
    }
}

impl GridState<Employee> {
    pub fn employees(config: &BusinessConfig) -> Self {
        Self::new(ColumnSet::employees(), EMPLOYEE_PAGE_SIZES).configure(config)
    }
}

impl<R: GridRow> GridState<R> {
    pub fn new(columns: ColumnSet, page_sizes: &'static [usize]) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            capabilities: Capabilities::standard(false),
            session: None,
            renderers: HashMap::new(),
            notifications: NotificationQueue::default(),
            pager: Pager::new(page_sizes),
            selected: BTreeSet::new(),
            details: None,
            reject_policy: RejectPolicy::default(),
            dispatch_policy: DispatchPolicy::default(),
            ready: false,
            generation: 0,
        }
    }

    /// Apply policies, notification timing and the standard capabilities.
    pub fn configure(mut self, config: &BusinessConfig) -> Self {
        self.reject_policy = config.reject_policy;
        self.dispatch_policy = config.dispatch_policy;
        self.notifications = NotificationQueue::new(config.notification_timing());
        self.capabilities = Capabilities::standard(config.read_only);
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities<R>) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_policies(mut self, reject: RejectPolicy, dispatch: DispatchPolicy) -> Self {
        self.reject_policy = reject;
        self.dispatch_policy = dispatch;
        self
    }

    /// Returns `true` exactly once, the first time the grid is shown.
    pub fn mark_ready(&mut self) -> bool {
        !std::mem::replace(&mut self.ready, true)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn capabilities(&self) -> &Capabilities<R> {
        &self.capabilities
    }

    pub fn dispatch_policy(&self) -> DispatchPolicy {
        self.dispatch_policy
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn for_each_row(&self, mut f: impl FnMut(&R)) {
        for row in &self.rows {
            f(row);
        }
    }

    pub fn value(&self, cell: CellRef) -> Option<CellValue> {
        self.row(cell.row_id)?.get(&cell.field)
    }

    /// Generation of the last installed load, `0` before any load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the row collection.
    ///
    /// Drops the edit session. Selection, details and hover renderers of rows
    /// that still exist are kept; renderers take the new values.
    pub fn set_row_data(&mut self, rows: Vec<R>) {
        if self.session.take().is_some() {
            debug!("Row data replaced while editing, edit dropped");
        }
        self.rows = rows;

        let ids: BTreeSet<RowId> = self.rows.iter().map(GridRow::id).collect();
        self.selected.retain(|id| ids.contains(id));
        if self.details.is_some_and(|id| !ids.contains(&id)) {
            self.details = None;
        }

        let rows = &self.rows;
        self.renderers.retain(|cell, renderer| {
            match rows
                .iter()
                .find(|row| row.id() == cell.row_id)
                .and_then(|row| row.get(&cell.field))
            {
                Some(value) => {
                    renderer.refresh(value);
                    true
                }
                None => false,
            }
        });

        self.pager.clamp(self.rows.len());
    }

    /// Install rows of load `generation`; older or repeated loads are ignored.
    pub fn install(&mut self, generation: u64, rows: Vec<R>) -> bool {
        if generation <= self.generation {
            return false;
        }
        self.generation = generation;
        self.set_row_data(rows);
        info!("Installed {} {} rows", self.rows.len(), R::RESOURCE);
        true
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    pub fn is_editing(&self, cell: CellRef) -> bool {
        self.session.as_ref().is_some_and(|s| s.cell == cell)
    }

    pub fn can_edit(&self, cell: CellRef) -> bool {
        let Some(column) = self.columns.get(&cell.field) else {
            return false;
        };
        let Some(row) = self.row(cell.row_id) else {
            return false;
        };
        let Some(value) = row.get(&cell.field) else {
            return false;
        };

        let ctx = RenderContext {
            row,
            row_id: cell.row_id,
            field: cell.field,
            value: &value,
        };
        column.editable && self.capabilities.permits(column.permission, &ctx)
    }

    /// Programmatic edit start. Replaces any open session.
    pub fn start_editing_cell(&mut self, cell: CellRef) -> bool {
        if !self.can_edit(cell) {
            debug!("Cell {}/{} is not editable", cell.row_id, cell.field);
            return false;
        }
        let Some(original) = self.value(cell) else {
            return false;
        };
        self.session = Some(EditSession::new(cell, original));
        true
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Validate and apply the open edit.
    pub fn commit_edit(&mut self, now: DateTime<Utc>) -> CommitOutcome<R> {
        let Some(session) = self.session.take() else {
            return CommitOutcome::NoSession;
        };
        let cell = session.cell;
        let Some(column) = self.columns.get(&cell.field) else {
            warn!("Commit on unknown column {}", cell.field);
            return CommitOutcome::NoSession;
        };
        let kind = column.editor.value_kind();

        // Blank text is never a valid edit, whatever the column's rule.
        let blank =
            !matches!(column.editor, EditorKind::Checkbox) && session.buffer.trim().is_empty();
        let parsed = if blank {
            Err(ValidationError::Empty)
        } else {
            validate(
                column.validation,
                &session.buffer,
                &self.rows,
                cell.row_id,
                &cell.field,
            )
            .and_then(|()| CellValue::parse(kind, &session.buffer).map_err(ValidationError::from))
        };

        let new_value = match parsed {
            Ok(value) => value,
            Err(error) => return self.reject(session, error, now),
        };
        if new_value == session.original {
            return CommitOutcome::Unchanged;
        }

        let Some(row) = self.rows.iter_mut().find(|row| row.id() == cell.row_id) else {
            warn!("Row {} disappeared while editing", cell.row_id);
            return CommitOutcome::NoSession;
        };
        if let Err(err) = row.set(&cell.field, new_value.clone()) {
            return self.reject(session, err.into(), now);
        }
        let row = row.clone();

        if let Some(renderer) = self.renderers.get_mut(&cell) {
            renderer.refresh(new_value.clone());
        }

        debug!("Committed {}/{} = {new_value}", cell.row_id, cell.field);
        CommitOutcome::Accepted {
            event: EditEvent {
                row_id: cell.row_id,
                field: cell.field,
                old_value: session.original,
                new_value,
            },
            row,
        }
    }

    fn reject(
        &mut self,
        session: EditSession,
        error: ValidationError,
        now: DateTime<Utc>,
    ) -> CommitOutcome<R> {
        let cell = session.cell;
        warn!("Rejected edit of {}/{}: {error}", cell.row_id, cell.field);

        let notification = self.notifications.push(
            NotificationClass::CellValidation,
            cell,
            session.anchor,
            error.to_string(),
            now,
        );

        let bypass_row = match self.dispatch_policy {
            DispatchPolicy::AcceptedOnly => None,
            DispatchPolicy::EveryCommit => self.bypass_row(&session),
        };

        if self.reject_policy == RejectPolicy::Block {
            self.session = Some(EditSession {
                rejected: true,
                ..session
            });
        }

        CommitOutcome::Rejected {
            error,
            notification,
            bypass_row,
        }
    }

    /// A copy of the edited row carrying the rejected value, when it can hold it.
    fn bypass_row(&self, session: &EditSession) -> Option<R> {
        let column = self.columns.get(&session.cell.field)?;
        let value = CellValue::parse(column.editor.value_kind(), &session.buffer).ok()?;
        let mut row = self.row(session.cell.row_id)?.clone();
        row.set(&session.cell.field, value).ok()?;
        Some(row)
    }

    /// Hover renderer of `cell`, created on first use and refreshed with the
    /// current value.
    pub fn renderer_mut(&mut self, cell: CellRef) -> &mut HoverIconRenderer {
        let value = self.value(cell).unwrap_or_default();
        let renderer = self.renderers.entry(cell).or_default();
        renderer.refresh(value);
        renderer
    }

    pub fn renderer(&self, cell: CellRef) -> Option<&HoverIconRenderer> {
        self.renderers.get(&cell)
    }

    /// Activate the hover icon of `cell`.
    ///
    /// `StartEditing` and `ShowInfo` are applied here; the other outcomes are
    /// left to the caller. `None` when the column has no icon or the row is gone.
    pub fn activate_icon(&mut self, cell: CellRef) -> Option<ActionOutcome> {
        let config = self.columns.get(&cell.field)?.hover_icon()?;
        let row = self.row(cell.row_id)?;
        let value = row.get(&cell.field)?;
        let ctx = RenderContext {
            row,
            row_id: cell.row_id,
            field: cell.field,
            value: &value,
        };
        let outcome = config.activate(&ctx, &self.capabilities);

        match &outcome {
            ActionOutcome::StartEditing(target) => {
                self.start_editing_cell(*target);
            }
            ActionOutcome::ShowInfo(row_id) => self.details = Some(*row_id),
            _ => {}
        }
        Some(outcome)
    }

    pub fn icon_tint(&self, cell: CellRef) -> Option<[u8; 3]> {
        let config = self.columns.get(&cell.field)?.hover_icon()?;
        let row = self.row(cell.row_id)?;
        let value = row.get(&cell.field)?;
        let ctx = RenderContext {
            row,
            row_id: cell.row_id,
            field: cell.field,
            value: &value,
        };
        Some(config.icon_tint(&ctx, &self.capabilities))
    }

    pub fn details(&self) -> Option<&R> {
        self.details.and_then(|id| self.row(id))
    }

    pub fn show_details(&mut self, id: RowId) {
        self.details = Some(id);
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    /// Unmount expired notifications.
    pub fn tick(&mut self, now: DateTime<Utc>) -> usize {
        self.notifications.prune(now)
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn page_rows(&self) -> &[R] {
        &self.rows[self.pager.range(self.rows.len())]
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.rows.len())
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page, self.rows.len());
    }

    pub fn set_page_size(&mut self, size: usize) -> bool {
        self.pager.set_page_size(size)
    }

    pub fn next_page(&mut self) {
        self.pager.next(self.rows.len());
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    /// Returns whether the row is selected afterwards.
    pub fn toggle_selected(&mut self, id: RowId) -> bool {
        if self.selected.remove(&id) {
            false
        } else if self.row(id).is_some() {
            self.selected.insert(id)
        } else {
            false
        }
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> impl Iterator<Item = RowId> + '_ {
        self.selected.iter().copied()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn all_on_page_selected(&self) -> bool {
        let page = self.page_rows();
        !page.is_empty() && page.iter().all(|row| self.selected.contains(&row.id()))
    }

    /// Select every row of the current page, or clear them if all were selected.
    pub fn select_all_on_page(&mut self) {
        let select = !self.all_on_page_selected();
        let ids: Vec<RowId> = self.page_rows().iter().map(GridRow::id).collect();
        for id in ids {
            if select {
                self.selected.insert(id);
            } else {
                self.selected.remove(&id);
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};
    use ustr::Ustr;

    use super::*;
    use crate::notification::ScreenAnchor;

    fn employee(id: u64, name: &str) -> Employee {
        Employee {
            id: RowId(id),
            name: name.to_owned(),
            position: "Engineer".to_owned(),
            department: "Engineering".to_owned(),
            salary: 120_000.0,
            start_date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn grid() -> GridState<Employee> {
        let mut grid = GridState::employees(&BusinessConfig::default());
        grid.set_row_data(vec![employee(1, "Alice"), employee(2, "Bob")]);
        grid
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn name(id: u64) -> CellRef {
        CellRef::new(RowId(id), "name")
    }

    fn edit(grid: &mut GridState<Employee>, cell: CellRef, text: &str) -> CommitOutcome<Employee> {
        assert!(grid.start_editing_cell(cell), "cell should be editable");
        grid.editing_mut().unwrap().buffer = text.to_owned();
        grid.commit_edit(now())
    }

    #[test]
    fn duplicate_name_is_rejected_and_reverted() {
        let mut grid = grid();
        grid.start_editing_cell(name(2));
        let session = grid.editing_mut().unwrap();
        session.buffer = " alice ".to_owned();
        session.anchor = ScreenAnchor::new(120.0, 48.0);

        let outcome = grid.commit_edit(now());
        let CommitOutcome::Rejected {
            error,
            notification,
            bypass_row,
        } = outcome
        else {
            panic!("expected rejection");
        };

        assert_eq!(error, ValidationError::Duplicate);
        assert_eq!(bypass_row, None);
        assert_eq!(grid.row(RowId(2)).unwrap().name, "Bob");
        assert!(grid.editing().is_none());

        let shown = grid.notifications().get(notification).unwrap();
        assert_eq!(shown.message, "duplicate: already exists");
        assert_eq!(shown.cell, name(2));
        assert_eq!(shown.anchor, ScreenAnchor::new(120.0, 48.0));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut grid = grid();
        let outcome = edit(&mut grid, name(1), "");
        assert!(matches!(
            outcome,
            CommitOutcome::Rejected {
                error: ValidationError::Empty,
                ..
            }
        ));
        assert_eq!(grid.row(RowId(1)).unwrap().name, "Alice");
    }

    fn car_grid() -> GridState<Car> {
        let mut grid = GridState::cars(&BusinessConfig::default());
        grid.set_row_data(vec![Car {
            id: RowId(1),
            make: "Tesla".to_owned(),
            model: "Model Y".to_owned(),
            price: Some(44_990.0),
            electric: true,
        }]);
        grid
    }

    #[test]
    fn whitespace_price_is_rejected() {
        let mut grid = car_grid();
        let price = CellRef::new(RowId(1), "price");
        assert!(grid.start_editing_cell(price));
        grid.editing_mut().unwrap().buffer = "   ".to_owned();

        let outcome = grid.commit_edit(now());

        assert!(matches!(
            outcome,
            CommitOutcome::Rejected {
                error: ValidationError::Empty,
                ..
            }
        ));
        assert!(outcome.row_to_dispatch().is_none());
        assert_eq!(grid.row(RowId(1)).unwrap().price, Some(44_990.0));
        assert_eq!(grid.notifications().len(), 1);
    }

    fn assert_blank_rejected<R: GridRow>(grid: &mut GridState<R>, id: RowId) {
        let fields: Vec<Ustr> = grid
            .columns()
            .iter()
            .filter(|column| column.editable && !matches!(column.editor, EditorKind::Checkbox))
            .map(|column| column.field)
            .collect();
        assert!(!fields.is_empty(), "preset should have editable columns");

        for field in fields {
            for blank in ["", "  "] {
                let cell = CellRef::new(id, field);
                let before = grid.value(cell);
                assert!(grid.start_editing_cell(cell), "{field} should be editable");
                grid.editing_mut().unwrap().buffer = blank.to_owned();

                let outcome = grid.commit_edit(now());

                assert!(
                    matches!(
                        outcome,
                        CommitOutcome::Rejected {
                            error: ValidationError::Empty,
                            ..
                        }
                    ),
                    "{field} accepted {blank:?}: {outcome:?}"
                );
                assert_eq!(grid.value(cell), before, "{field} changed");
            }
        }
    }

    #[test]
    fn blank_edit_rejected_on_every_editable_column() {
        assert_blank_rejected(&mut car_grid(), RowId(1));
        assert_blank_rejected(&mut grid(), RowId(1));
    }

    #[test]
    fn accepted_edit_yields_one_event_and_updated_row() {
        let mut grid = grid();
        let outcome = edit(&mut grid, name(1), "Alicia");

        let CommitOutcome::Accepted { event, row } = outcome else {
            panic!("expected acceptance");
        };
        assert_eq!(event.row_id, RowId(1));
        assert_eq!(event.field, Ustr::from("name"));
        assert_eq!(event.old_value, CellValue::Text("Alice".to_owned()));
        assert_eq!(event.new_value, CellValue::Text("Alicia".to_owned()));
        assert_eq!(row.name, "Alicia");
        assert_eq!(grid.row(RowId(1)).unwrap().name, "Alicia");
        assert!(grid.notifications().is_empty());
    }

    #[test]
    fn unchanged_commit_writes_nothing() {
        let mut grid = grid();
        let outcome = edit(&mut grid, name(1), "Alice");
        assert_eq!(outcome, CommitOutcome::Unchanged);
        assert!(outcome.row_to_dispatch().is_none());
    }

    #[test]
    fn block_policy_keeps_editor_open() {
        let mut grid = grid().with_policies(RejectPolicy::Block, DispatchPolicy::AcceptedOnly);
        edit(&mut grid, name(2), "ALICE");

        let session = grid.editing().unwrap();
        assert!(session.rejected);
        assert_eq!(session.buffer, "ALICE");
        assert_eq!(grid.row(RowId(2)).unwrap().name, "Bob");
    }

    #[test]
    fn every_commit_policy_hands_out_bypass_row() {
        let mut grid = grid().with_policies(RejectPolicy::Revert, DispatchPolicy::EveryCommit);
        let outcome = edit(&mut grid, name(2), "alice");

        let bypass = outcome.row_to_dispatch().unwrap();
        assert_eq!(bypass.id, RowId(2));
        assert_eq!(bypass.name, "alice");
        assert_eq!(grid.row(RowId(2)).unwrap().name, "Bob");
    }

    #[test]
    fn second_rejection_replaces_notification() {
        let mut grid = grid();
        edit(&mut grid, name(1), "");
        edit(&mut grid, name(2), "alice");

        assert_eq!(grid.notifications().len(), 1);
        let (shown, _) = grid.notifications().visible(now()).next().unwrap();
        assert_eq!(shown.cell, name(2));

        assert_eq!(grid.tick(now() + TimeDelta::seconds(11)), 1);
        assert!(grid.notifications().is_empty());
    }

    #[test]
    fn non_editable_columns_cannot_start_editing() {
        let mut grid = grid();
        assert!(!grid.start_editing_cell(CellRef::new(RowId(1), "salary")));
        assert!(!grid.start_editing_cell(CellRef::new(RowId(1), "missing")));
        assert!(!grid.start_editing_cell(CellRef::new(RowId(9), "name")));
        assert!(grid.editing().is_none());
    }

    #[test]
    fn read_only_config_blocks_editing_and_icons() {
        let config = BusinessConfig {
            read_only: true,
            ..BusinessConfig::default()
        };
        let mut grid = GridState::employees(&config);
        grid.set_row_data(vec![employee(1, "Alice")]);

        assert!(!grid.start_editing_cell(name(1)));
        assert_eq!(grid.activate_icon(name(1)), Some(ActionOutcome::Denied));
        assert!(grid.editing().is_none());
    }

    #[test]
    fn edit_icon_starts_editing_that_cell() {
        let mut grid = grid();
        let email = CellRef::new(RowId(2), "email");

        assert_eq!(
            grid.activate_icon(email),
            Some(ActionOutcome::StartEditing(email))
        );
        assert!(grid.is_editing(email));
        assert_eq!(grid.editing().unwrap().buffer, "bob@example.com");
        assert_eq!(grid.activate_icon(CellRef::new(RowId(2), "salary")), None);
    }

    #[test]
    fn set_row_data_keeps_hover_and_refreshes_value() {
        let mut grid = grid();
        grid.renderer_mut(name(1)).set_hovered(true);
        grid.start_editing_cell(name(1));

        grid.set_row_data(vec![employee(1, "Alicia"), employee(3, "Carol")]);

        let renderer = grid.renderer(name(1)).unwrap();
        assert!(renderer.is_hovering());
        assert_eq!(renderer.value(), &CellValue::Text("Alicia".to_owned()));
        assert!(grid.editing().is_none());
    }

    #[test]
    fn install_ignores_stale_generations() {
        let mut grid = grid();
        assert!(grid.install(2, vec![employee(5, "Eve")]));
        assert!(!grid.install(1, vec![employee(6, "Mallory")]));
        assert_eq!(grid.rows().len(), 1);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn mark_ready_fires_once() {
        let mut grid = grid();
        assert!(grid.mark_ready());
        assert!(!grid.mark_ready());
        assert!(grid.is_ready());
    }

    #[test]
    fn selection_follows_rows() {
        let mut grid = grid();
        assert!(grid.toggle_selected(RowId(1)));
        assert!(!grid.toggle_selected(RowId(42)));

        grid.select_all_on_page();
        assert!(grid.all_on_page_selected());
        grid.select_all_on_page();
        assert_eq!(grid.selected_count(), 0);

        grid.toggle_selected(RowId(2));
        grid.set_row_data(vec![employee(1, "Alice")]);
        assert_eq!(grid.selected_count(), 0);
    }

    #[test]
    fn paging_over_rows() {
        let mut grid = GridState::employees(&BusinessConfig::default());
        grid.set_row_data((1..=25).map(|id| employee(id, &format!("E{id}"))).collect());

        assert_eq!(grid.page_count(), 3);
        grid.next_page();
        assert_eq!(grid.page_rows().first().unwrap().id, RowId(11));
        assert!(grid.set_page_size(50));
        assert_eq!(grid.page_count(), 1);
        assert_eq!(grid.page_rows().len(), 25);
        assert!(!grid.set_page_size(15));
    }
}
