/// UI layer: egui panels and the scatter-chart painter.

pub mod panels;
pub mod plot;
