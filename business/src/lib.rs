//! Business layer of the griddle data grid app.
//!
//! Row types of each REST resource, column descriptors, validation and the grid
//! model live here, together with the commands that load and write rows. Nothing
//! in this crate depends on egui.

pub mod api;
pub mod capabilities;
mod car;
mod column;
mod config;
mod employee;
mod format;
mod grid;
pub mod http;
mod load;
pub mod notification;
pub mod renderer;
mod route;
mod row;
mod update;
mod validation;

use griddle_states::{StateCtx, Time};

pub use capabilities::{Capabilities, EDIT_ALLOWED, RenderContext, StrategyId};
pub use car::Car;
pub use column::{
    CAR_MAKES, ColumnDescriptor, ColumnError, ColumnSet, DEPARTMENTS, EditorKind, RendererKind,
};
pub use config::{BusinessConfig, DispatchPolicy, RawConfig, RejectPolicy};
pub use employee::Employee;
pub use format::FormatKind;
pub use grid::{
    CAR_PAGE_SIZES, CellRef, CommitOutcome, EMPLOYEE_PAGE_SIZES, EditEvent, EditSession,
    GridState, GridSummary, Pager,
};
pub use load::{LoadRowsCommand, RowsCompute, RowsResult, install_loaded_rows, load_on_ready};
pub use notification::{
    Notification, NotificationClass, NotificationId, NotificationPhase, NotificationQueue,
    NotificationTiming, ScreenAnchor,
};
pub use renderer::{
    ActionOutcome, CellAction, HoverIconConfig, HoverIconRenderer, IconKind, IconPosition,
};
pub use route::Route;
pub use row::{CellValue, DATE_FORMAT, GridRow, RowError, RowId, ValueKind};
pub use update::{
    PendingUpdates, UpdateRowCommand, UpdateStats, UpdateStatusCompute, commit_and_dispatch,
    enqueue_update,
};
pub use validation::{ValidationError, ValidationKind, validate};

/// Register everything one resource grid needs.
fn register_grid<R: GridRow>(ctx: &mut StateCtx, grid: GridState<R>) {
    ctx.add_state(grid);
    ctx.add_state(PendingUpdates::<R>::default());
    ctx.record_compute(RowsCompute::<R>::default());
    ctx.record_compute(UpdateStatusCompute::<R>::default());
    ctx.record_command(LoadRowsCommand::<R>::default());
    ctx.record_command(UpdateRowCommand::<R>::default());
}

/// Build a context with both grids, their commands and `config`.
pub fn build_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = StateCtx::new();

    register_grid(&mut ctx, GridState::cars(&config));
    register_grid(&mut ctx, GridState::employees(&config));
    ctx.record_compute(GridSummary::<Car>::default());
    ctx.record_compute(GridSummary::<Employee>::default());

    ctx.add_state(Time::default());
    ctx.add_state(Route::default());
    ctx.add_state(config);
    ctx
}
