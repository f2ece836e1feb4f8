use std::time::Duration;

use chrono::Utc;
use griddle_business::{Car, Employee, GridRow, GridState, Route, install_loaded_rows};
use griddle_states::{StateCtx, Time};

use crate::{pages, state::State, widgets};

/// How often to repaint while requests are in flight or toasts are fading.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

pub struct GriddleApp {
    state: State,
}

impl GriddleApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

fn has_notifications<R: GridRow>(ctx: &StateCtx) -> bool {
    !ctx.state::<GridState<R>>().notifications().is_empty()
}

/// Unmount toasts whose fade-out finished.
fn prune_notifications<R: GridRow>(ctx: &mut StateCtx) {
    if has_notifications::<R>(ctx) {
        let now = ctx.state::<Time>().now();
        ctx.state_mut::<GridState<R>>().tick(now);
    }
}

impl eframe::App for GriddleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ui_ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let ctx = &mut self.state.ctx;
        *ctx.state_mut::<Time>().as_mut() = Utc::now();

        // Sync Compute for render
        ctx.sync_computes();
        install_loaded_rows::<Car>(ctx);
        install_loaded_rows::<Employee>(ctx);
        prune_notifications::<Car>(ctx);
        prune_notifications::<Employee>(ctx);

        egui::TopBottomPanel::top("top_panel").show(ui_ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::nav_bar(ctx, ui);
            });
        });

        let route = *ctx.state::<Route>();
        egui::CentralPanel::default().show(ui_ctx, |ui| match route {
            Route::Cars => pages::cars_page(ctx, ui),
            Route::Employees => pages::employees_page(ctx, ui),
        });

        match route {
            Route::Cars => widgets::toasts::<Car>(ctx, ui_ctx),
            Route::Employees => widgets::toasts::<Employee>(ctx, ui_ctx),
        }

        if !ctx.in_flight().is_empty()
            || has_notifications::<Car>(ctx)
            || has_notifications::<Employee>(ctx)
        {
            ui_ctx.request_repaint_after(BUSY_REPAINT);
        }

        // Run background jobs
        ctx.run_computed();
    }
}

impl Drop for GriddleApp {
    fn drop(&mut self) {
        self.state.ctx.cancel_all();
    }
}
