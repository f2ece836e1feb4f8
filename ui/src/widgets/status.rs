//! Load and write-back status line above a grid.

use egui::Ui;
use griddle_business::{GridRow, RowsCompute, RowsResult, UpdateStatusCompute};
use griddle_states::StateCtx;

use crate::utils::colors::{COLOR_AMBER, COLOR_RED};

pub fn sync_status<R: GridRow>(ctx: &StateCtx, ui: &mut Ui) {
    match ctx.cached::<RowsCompute<R>>().map(|rows| &rows.result) {
        Some(RowsResult::Loading) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Loading {}…", R::RESOURCE));
            });
        }
        Some(RowsResult::Error { message, .. }) => {
            ui.colored_label(COLOR_RED, format!("Failed to load {}: {message}", R::RESOURCE));
        }
        Some(RowsResult::Idle | RowsResult::Loaded(_)) | None => {}
    }

    let Some(status) = ctx.cached::<UpdateStatusCompute<R>>() else {
        return;
    };
    let stats = &status.stats;
    if stats.in_flight > 0 {
        ui.colored_label(COLOR_AMBER, format!("Saving {} change(s)…", stats.in_flight));
    } else if let Some(err) = &stats.last_error {
        ui.colored_label(COLOR_RED, format!("Last save failed: {err}"))
            .on_hover_text(format!("{} saved, {} failed", stats.saved, stats.failed));
    }
}
