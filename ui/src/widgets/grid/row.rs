use egui_extras::TableRow;
use griddle_business::{CellRef, ColumnDescriptor, GridRow, GridState, RowId};

use super::{GridAction, cells, editors};

pub fn grid_row<R: GridRow>(
    table_row: &mut TableRow<'_, '_>,
    grid: &mut GridState<R>,
    columns: &[ColumnDescriptor],
    id: RowId,
    actions: &mut Vec<GridAction>,
) {
    let selected = grid.is_selected(id);
    table_row.set_selected(selected);

    for column in columns {
        let cell = CellRef::new(id, column.field);
        table_row.col(|ui| {
            if column.checkbox_selection {
                let mut checked = selected;
                if ui.checkbox(&mut checked, "").changed() {
                    actions.push(GridAction::ToggleSelected(id));
                }
            }

            if grid.is_editing(cell) {
                editors::editor(ui, grid, column, cell, actions);
            } else {
                cells::cell(ui, grid, column, cell, actions);
            }
        });
    }
}
