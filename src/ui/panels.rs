use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{XField, YField};
use crate::state::{AppState, ChartEvent};

// ---------------------------------------------------------------------------
// Left side panel – axis controls
// ---------------------------------------------------------------------------

/// Render the axis-selection panel.  Exactly one label per group shows as
/// active; clicking an inactive label fires the matching event.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, now: f64) {
    ui.heading("Axes");
    ui.separator();

    ui.strong("Horizontal");
    for field in XField::ALL {
        let active = state.selection.x == field;
        if ui.selectable_label(active, field.control_label()).clicked() {
            state.handle_event(ChartEvent::SelectX(field), now);
        }
    }

    ui.add_space(8.0);
    ui.strong("Vertical");
    for field in YField::ALL {
        let active = state.selection.y == field;
        if ui.selectable_label(active, field.control_label()).clicked() {
            state.handle_event(ChartEvent::SelectY(field), now);
        }
    }

    if state.dataset.is_none() {
        ui.add_space(8.0);
        ui.separator();
        ui.label("No dataset loaded.");
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} states loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open survey data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load a file into the app state.  On failure the previous dataset stays
/// in place and the error lands in the log and the status bar.
pub fn load_into(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!("Loaded {} state records from {}", dataset.len(), path.display());
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
