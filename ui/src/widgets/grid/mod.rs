//! The editable data grid.
//!
//! Drawing only reads and touches [`GridState`] cosmetics (hover state, editor
//! buffer, anchors). Everything that changes rows or dispatches a command is
//! collected as a [`GridAction`] and applied after the frame's draw by
//! [`apply_actions`], where the whole [`StateCtx`] is available again.

mod cells;
mod columns;
mod editors;
mod header;
mod pager;
mod row;

use egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};
use griddle_business::{
    ActionOutcome, CellRef, GridRow, GridState, GridSummary, RowId, ScreenAnchor,
    commit_and_dispatch,
};
use griddle_states::{Compute, StateCtx};
use log::info;

use super::{row_details, sync_status};

const HEADER_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 26.0;

#[derive(Debug, Clone, PartialEq)]
pub enum GridAction {
    StartEdit(CellRef),
    Commit,
    Cancel,
    /// One-shot edit for checkbox and select cells: open, fill, commit.
    SetValue {
        cell: CellRef,
        raw: String,
        anchor: ScreenAnchor,
    },
    ActivateIcon(CellRef),
    ToggleSelected(RowId),
    SelectAllOnPage,
    PrevPage,
    NextPage,
    SetPageSize(usize),
    CloseDetails,
}

/// Status line, table, pager and details window of resource `R`.
pub fn data_grid<R: GridRow>(ctx: &mut StateCtx, ui: &mut Ui)
where
    GridSummary<R>: Compute,
{
    sync_status::<R>(ctx, ui);

    let summary = ctx.cached::<GridSummary<R>>().cloned();
    let mut actions = Vec::new();
    {
        let grid = ctx.state_mut::<GridState<R>>();
        let summary = summary.unwrap_or_else(|| GridSummary::of(grid));

        table(grid, ui, &mut actions);
        ui.separator();
        pager::pager(grid, &summary, ui, &mut actions);
        row_details(grid, ui, &mut actions);
    }

    apply_actions::<R>(ctx, actions);
}

fn table<R: GridRow>(grid: &mut GridState<R>, ui: &mut Ui, actions: &mut Vec<GridAction>) {
    let descriptors: Vec<_> = grid.columns().iter().cloned().collect();
    let page_ids: Vec<RowId> = grid.page_rows().iter().map(GridRow::id).collect();
    let all_selected = grid.all_on_page_selected();
    let widths = columns::initial_widths(&descriptors, ui.available_width());

    let mut builder = TableBuilder::new(ui)
        .id_salt(("data-grid", R::RESOURCE))
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);
    for width in widths {
        builder = builder.column(
            Column::initial(width)
                .at_least(columns::MIN_COLUMN_WIDTH)
                .clip(true),
        );
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            header::header_row(&mut header, &descriptors, all_selected, actions);
        })
        .body(|mut body| {
            for id in page_ids {
                body.row(ROW_HEIGHT, |mut table_row| {
                    row::grid_row(&mut table_row, grid, &descriptors, id, actions);
                });
            }
        });
}

/// Apply what the user did during the draw.
pub fn apply_actions<R: GridRow>(ctx: &mut StateCtx, actions: Vec<GridAction>) {
    for action in actions {
        match action {
            GridAction::StartEdit(cell) => {
                ctx.state_mut::<GridState<R>>().start_editing_cell(cell);
            }
            GridAction::Commit => {
                commit_and_dispatch::<R>(ctx);
            }
            GridAction::Cancel => {
                ctx.state_mut::<GridState<R>>().cancel_edit();
            }
            GridAction::SetValue { cell, raw, anchor } => {
                let grid = ctx.state_mut::<GridState<R>>();
                if !grid.start_editing_cell(cell) {
                    continue;
                }
                if let Some(session) = grid.editing_mut() {
                    session.buffer = raw;
                    session.anchor = anchor;
                }
                commit_and_dispatch::<R>(ctx);
            }
            GridAction::ActivateIcon(cell) => {
                match ctx.state_mut::<GridState<R>>().activate_icon(cell) {
                    Some(ActionOutcome::RequestDelete(row_id)) => {
                        info!("Delete requested for {} row {row_id}", R::RESOURCE);
                    }
                    Some(ActionOutcome::Custom { row_id, action }) => {
                        info!("Action {action} on {} row {row_id}", R::RESOURCE);
                    }
                    Some(ActionOutcome::Denied) => {
                        info!("Action on {} denied", cell.field);
                    }
                    _ => {}
                }
            }
            GridAction::ToggleSelected(id) => {
                ctx.state_mut::<GridState<R>>().toggle_selected(id);
            }
            GridAction::SelectAllOnPage => ctx.state_mut::<GridState<R>>().select_all_on_page(),
            GridAction::PrevPage => ctx.state_mut::<GridState<R>>().prev_page(),
            GridAction::NextPage => ctx.state_mut::<GridState<R>>().next_page(),
            GridAction::SetPageSize(size) => {
                ctx.state_mut::<GridState<R>>().set_page_size(size);
            }
            GridAction::CloseDetails => ctx.state_mut::<GridState<R>>().close_details(),
        }
    }
}
