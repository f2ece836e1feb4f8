use egui::Ui;
use griddle_business::{Employee, load_on_ready};
use griddle_states::StateCtx;

use crate::widgets;

/// Employee directory with hover icons on name and email.
pub fn employees_page(ctx: &mut StateCtx, ui: &mut Ui) {
    load_on_ready::<Employee>(ctx);

    ui.heading("Employee directory");
    ui.label("Hover a name or email for its action. Position edits with a single click.");
    ui.add_space(8.0);

    widgets::data_grid::<Employee>(ctx, ui);
}
