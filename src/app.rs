use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StatescopeApp {
    pub state: AppState,
}

impl Default for StatescopeApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl StatescopeApp {
    /// Start with the given survey file loaded.  A failed load leaves the
    /// app running with an empty chart and the error in the status bar.
    pub fn with_data_file(path: &Path) -> Self {
        let mut app = Self::default();
        panels::load_into(&mut app.state, path);
        app
    }
}

impl eframe::App for StatescopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: axis controls ----
        egui::SidePanel::left("axis_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, now);
            });

        // ---- Central panel: scatter chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &mut self.state);
        });
    }
}
