use egui::Ui;
use griddle_business::Route;
use griddle_states::StateCtx;

/// Brand plus one link per grid page.
pub fn nav_bar(ctx: &mut StateCtx, ui: &mut Ui) {
    let current = *ctx.state::<Route>();

    ui.strong("Griddle");
    ui.separator();

    for route in Route::ALL {
        if ui
            .selectable_label(current == route, route.title())
            .clicked()
            && current != route
        {
            log::info!("Navigate to {}", route.title());
            *ctx.state_mut::<Route>() = route;
        }
    }
}
