use egui_extras::TableRow;
use griddle_business::ColumnDescriptor;

use super::GridAction;

pub fn header_row(
    header: &mut TableRow<'_, '_>,
    columns: &[ColumnDescriptor],
    all_selected: bool,
    actions: &mut Vec<GridAction>,
) {
    for column in columns {
        header.col(|ui| {
            if column.checkbox_selection {
                let mut checked = all_selected;
                if ui
                    .checkbox(&mut checked, "")
                    .on_hover_text("Select all rows on this page")
                    .changed()
                {
                    actions.push(GridAction::SelectAllOnPage);
                }
            }
            ui.strong(&column.display_name);
        });
    }
}
