use egui::{Id, Ui};
use griddle_business::{GridRow, GridState};

use super::GridAction;

/// Read-only window listing every column of the row picked by an info icon.
pub fn row_details<R: GridRow>(grid: &GridState<R>, ui: &Ui, actions: &mut Vec<GridAction>) {
    let Some(row) = grid.details() else {
        return;
    };

    let mut open = true;
    egui::Window::new(format!("Row {}", row.id()))
        .id(Id::new(("row-details", R::RESOURCE)))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ui.ctx(), |ui| {
            egui::Grid::new(("row-details-grid", R::RESOURCE))
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for column in grid.columns() {
                        let value = row.get(&column.field).unwrap_or_default();
                        ui.strong(&column.display_name);
                        ui.label(column.format_value(&value));
                        ui.end_row();
                    }
                });
        });

    if !open {
        actions.push(GridAction::CloseDetails);
    }
}
