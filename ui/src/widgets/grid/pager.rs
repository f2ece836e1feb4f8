use egui::{Align, Layout, Ui};
use griddle_business::{GridRow, GridState, GridSummary};

use super::GridAction;

/// Row totals on the left, page navigation and size on the right.
pub fn pager<R: GridRow>(
    grid: &GridState<R>,
    summary: &GridSummary<R>,
    ui: &mut Ui,
    actions: &mut Vec<GridAction>,
) {
    let pager = grid.pager();

    ui.horizontal(|ui| {
        ui.label(format!("{} rows", summary.total));
        if summary.selected > 0 {
            ui.label(format!("{} selected", summary.selected));
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .add_enabled(summary.page + 1 < summary.page_count, egui::Button::new("›"))
                .on_hover_text("Next page")
                .clicked()
            {
                actions.push(GridAction::NextPage);
            }
            ui.label(format!("Page {} of {}", summary.page + 1, summary.page_count));
            if ui
                .add_enabled(summary.page > 0, egui::Button::new("‹"))
                .on_hover_text("Previous page")
                .clicked()
            {
                actions.push(GridAction::PrevPage);
            }

            ui.separator();
            let mut size = pager.page_size();
            egui::ComboBox::from_id_salt(("page-size", R::RESOURCE))
                .selected_text(size.to_string())
                .show_ui(ui, |ui| {
                    for option in pager.page_sizes() {
                        ui.selectable_value(&mut size, *option, option.to_string());
                    }
                });
            if size != pager.page_size() {
                actions.push(GridAction::SetPageSize(size));
            }
            ui.label("Page size");
        });
    });
}
