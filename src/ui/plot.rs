use std::f32::consts::FRAC_PI_2;

use eframe::egui::epaint::TextShape;
use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, Ui, pos2, vec2};

use crate::scene::MARKER_RADIUS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter chart (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter chart in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    match &state.dataset {
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a survey file to view the chart  (File → Open…)");
            });
            return;
        }
        Some(ds) if ds.is_empty() => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("The loaded file has no rows.");
            });
            return;
        }
        Some(_) => {}
    }

    let now = ui.input(|i| i.time);
    let scene = state.scene(now);
    if state.is_transitioning(now) {
        ui.ctx().request_repaint();
    }

    let geom = state.geometry;
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());

    // Fixed-size canvas, centred in whatever space the panel gives us.
    let canvas = Rect::from_center_size(response.rect.center(), vec2(geom.width, geom.height));
    let origin = canvas.min + vec2(geom.margins.left, geom.margins.top);
    let axis_y = origin.y + geom.plot_height();
    let axis_color = ui.visuals().text_color();
    let axis_stroke = Stroke::new(1.0, axis_color);
    let marker_fill = Color32::from_rgba_unmultiplied(173, 216, 230, 128);
    let tick_font = FontId::proportional(12.0);
    let title_font = FontId::proportional(16.0);

    painter.rect_filled(canvas, 4.0, ui.visuals().extreme_bg_color);

    // ---- Axis lines ----
    painter.line_segment(
        [pos2(origin.x, axis_y), pos2(origin.x + geom.plot_width(), axis_y)],
        axis_stroke,
    );
    painter.line_segment([pos2(origin.x, origin.y), pos2(origin.x, axis_y)], axis_stroke);

    // ---- Ticks (gliding ones can start far off-axis; skip those) ----
    for tick in &scene.x_ticks {
        if !tick.pos.is_finite() || tick.pos < -20.0 || tick.pos > geom.plot_width() + 20.0 {
            continue;
        }
        let x = origin.x + tick.pos;
        painter.line_segment([pos2(x, axis_y), pos2(x, axis_y + 6.0)], axis_stroke);
        painter.text(
            pos2(x, axis_y + 8.0),
            Align2::CENTER_TOP,
            &tick.label,
            tick_font.clone(),
            axis_color,
        );
    }
    for tick in &scene.y_ticks {
        if !tick.pos.is_finite() || tick.pos < -20.0 || tick.pos > geom.plot_height() + 20.0 {
            continue;
        }
        let y = origin.y + tick.pos;
        painter.line_segment([pos2(origin.x - 6.0, y), pos2(origin.x, y)], axis_stroke);
        painter.text(
            pos2(origin.x - 8.0, y),
            Align2::RIGHT_CENTER,
            &tick.label,
            tick_font.clone(),
            axis_color,
        );
    }

    // ---- Axis titles: the currently active field of each group ----
    painter.text(
        pos2(origin.x + geom.plot_width() / 2.0, axis_y + 44.0),
        Align2::CENTER_TOP,
        state.selection.x.control_label(),
        title_font.clone(),
        axis_color,
    );
    let y_title = painter.layout_no_wrap(
        state.selection.y.control_label().to_string(),
        title_font,
        axis_color,
    );
    let y_title_len = y_title.size().x;
    painter.add(
        TextShape::new(
            pos2(canvas.min.x + 24.0, origin.y + (geom.plot_height() + y_title_len) / 2.0),
            y_title,
            axis_color,
        )
        .with_angle(-FRAC_PI_2),
    );

    // ---- Markers ----
    for marker in &scene.markers {
        if !marker.x.is_finite() || !marker.y.is_finite() {
            continue;
        }
        let center = pos2(origin.x + marker.x, origin.y + marker.y);
        painter.circle_filled(center, MARKER_RADIUS, marker_fill);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            &marker.abbr,
            FontId::proportional(11.0),
            Color32::WHITE,
        );
    }

    // ---- Hover tooltip: topmost marker under the pointer ----
    let hovered = response.hover_pos().and_then(|p| {
        scene.markers.iter().rev().find(|m| {
            m.x.is_finite()
                && m.y.is_finite()
                && vec2(origin.x + m.x - p.x, origin.y + m.y - p.y).length() <= MARKER_RADIUS
        })
    });
    if let Some(marker) = hovered {
        response.on_hover_text(marker.tooltip.clone());
    }
}
