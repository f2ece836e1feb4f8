use egui::Ui;
use griddle_business::{Car, load_on_ready};
use griddle_states::StateCtx;

use crate::widgets;

/// Car inventory: make, model, price and drivetrain.
pub fn cars_page(ctx: &mut StateCtx, ui: &mut Ui) {
    load_on_ready::<Car>(ctx);

    ui.heading("Car inventory");
    ui.label("Double-click a cell to edit it. Enter commits, Escape cancels.");
    ui.add_space(8.0);

    widgets::data_grid::<Car>(ctx, ui);
}

#[cfg(test)]
mod cars_page_test {
    use egui_kittest::Harness;
    use griddle_business::{BusinessConfig, Car, GridState, build_ctx};
    use kittest::Queryable;

    #[test]
    fn test_cars_page_marks_grid_ready_and_shows_headers() {
        // Port 9 is discard: the load fails in the background and is ignored here.
        let ctx = build_ctx(BusinessConfig::new("http://127.0.0.1:9"));

        let harness = Harness::new_ui_state(|ui, ctx| super::cars_page(ctx, ui), ctx);

        assert!(harness.state().state::<GridState<Car>>().is_ready());
        assert!(harness.query_by_label("Car inventory").is_some());
        assert!(harness.query_by_label_contains("Company Make").is_some());
        assert!(harness.query_by_label_contains("Price").is_some());
    }
}
