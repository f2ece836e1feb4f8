//! Floating validation messages, drawn at the cell that caused them.

use egui::{Frame, Id, Order, RichText};
use griddle_business::{GridRow, GridState};
use griddle_states::{StateCtx, Time};

use crate::utils::colors::COLOR_TOAST;

/// Offset below the anchor so the toast does not cover the editor.
const TOAST_OFFSET: egui::Vec2 = egui::vec2(0.0, 4.0);

pub fn toasts<R: GridRow>(ctx: &StateCtx, ui_ctx: &egui::Context) {
    let now = ctx.state::<Time>().now();
    let grid = ctx.state::<GridState<R>>();

    for (notification, phase) in grid.notifications().visible(now) {
        let anchor = egui::pos2(notification.anchor.x, notification.anchor.y) + TOAST_OFFSET;

        egui::Area::new(Id::new(("toast", R::RESOURCE, notification.id)))
            .order(Order::Foreground)
            .fixed_pos(anchor)
            .interactable(false)
            .show(ui_ctx, |ui| {
                ui.set_opacity(phase.alpha());
                Frame::popup(ui.style()).fill(COLOR_TOAST).show(ui, |ui| {
                    ui.label(RichText::new(&notification.message).color(egui::Color32::WHITE));
                });
            });
    }
}
