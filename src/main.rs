mod app;
mod data;
mod scale;
mod scene;
mod state;
mod ui;

use std::path::PathBuf;

use app::StatescopeApp;
use eframe::egui;

/// Dataset loaded at startup when no path is given on the command line.
const DEFAULT_DATA_FILE: &str = "assets/data/demographics.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let data_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 640.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Statescope – State Survey Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(StatescopeApp::with_data_file(&data_file)))),
    )
}
