use crate::data::model::{SurveyDataset, XField, YField};
use crate::scale::{DEFAULT_TICK_COUNT, LinearScale, tick_label};

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Marker radius in pixels.
pub const MARKER_RADIUS: f32 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Fixed canvas layout.  The plot area is the canvas minus the margins;
/// the bottom and left margins leave room for the clickable axis labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        ChartGeometry {
            width: 800.0,
            height: 500.0,
            margins: Margins { top: 20.0, right: 40.0, bottom: 80.0, left: 100.0 },
        }
    }
}

impl ChartGeometry {
    pub fn plot_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn plot_height(&self) -> f32 {
        self.height - self.margins.top - self.margins.bottom
    }
}

// ---------------------------------------------------------------------------
// Scales
// ---------------------------------------------------------------------------

/// Horizontal scale for the chosen field: data extent, niced, mapped onto
/// `[0, plot_width]`.  An all-NaN column leaves the domain unresolved, so
/// ticks and marker positions drop out downstream.
pub fn x_scale(dataset: &SurveyDataset, field: XField, geom: &ChartGeometry) -> LinearScale {
    let domain = dataset.x_extent(field).unwrap_or((f64::NAN, f64::NAN));
    LinearScale::new(domain, (0.0, geom.plot_width())).nice(DEFAULT_TICK_COUNT)
}

/// Vertical scale for the chosen field.  The range is inverted
/// (`[plot_height, 0]`) so larger values plot higher.
pub fn y_scale(dataset: &SurveyDataset, field: YField, geom: &ChartGeometry) -> LinearScale {
    let domain = dataset.y_extent(field).unwrap_or((f64::NAN, f64::NAN));
    LinearScale::new(domain, (geom.plot_height(), 0.0)).nice(DEFAULT_TICK_COUNT)
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// One circle per state, in plot-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
    pub abbr: String,
    pub tooltip: String,
}

/// An axis tick: pixel offset along the axis plus its label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f32,
    pub label: String,
}

/// Everything the view needs to paint one frame of the chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub markers: Vec<Marker>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

/// Marker position for every record under the given scales, in record order.
/// Records with NaN metrics get NaN positions.
pub fn marker_positions(
    dataset: &SurveyDataset,
    x_field: XField,
    y_field: YField,
    xs: &LinearScale,
    ys: &LinearScale,
) -> Vec<(f32, f32)> {
    dataset
        .records
        .iter()
        .map(|r| (xs.scale(x_field.value(r)), ys.scale(y_field.value(r))))
        .collect()
}

/// Pair each record with a position to produce the markers.  Tooltip text
/// always reflects the currently selected fields, even mid-transition.
pub fn markers(
    dataset: &SurveyDataset,
    x_field: XField,
    y_field: YField,
    positions: &[(f32, f32)],
) -> Vec<Marker> {
    dataset
        .records
        .iter()
        .zip(positions)
        .map(|(r, &(x, y))| Marker {
            x,
            y,
            abbr: r.abbr.clone(),
            tooltip: format!(
                "{}\n{} {}\n{} {}",
                r.state,
                x_field.tooltip_label(),
                tick_label(x_field.value(r)),
                y_field.tooltip_label(),
                tick_label(y_field.value(r)),
            ),
        })
        .collect()
}

/// Ticks for one axis.  Tick values come from `values_from`; each value is
/// placed by `placed_by`.  The two scales coincide when the chart is at
/// rest; during a transition the placement scale has a blended domain so
/// ticks glide toward their final positions.
pub fn axis_ticks(values_from: &LinearScale, placed_by: &LinearScale, count: usize) -> Vec<Tick> {
    values_from
        .ticks(count)
        .into_iter()
        .map(|v| Tick { pos: placed_by.scale(v), label: tick_label(v) })
        .collect()
}

/// Scene for a chart at rest on the given field pair.
pub fn build_scene(
    dataset: &SurveyDataset,
    x_field: XField,
    y_field: YField,
    geom: &ChartGeometry,
) -> Scene {
    if dataset.is_empty() {
        return Scene::default();
    }
    let xs = x_scale(dataset, x_field, geom);
    let ys = y_scale(dataset, y_field, geom);
    let positions = marker_positions(dataset, x_field, y_field, &xs, &ys);
    Scene {
        markers: markers(dataset, x_field, y_field, &positions),
        x_ticks: axis_ticks(&xs, &xs, DEFAULT_TICK_COUNT),
        y_ticks: axis_ticks(&ys, &ys, DEFAULT_TICK_COUNT),
    }
}

// ---------------------------------------------------------------------------
// Animation helpers
// ---------------------------------------------------------------------------

/// Cubic ease-in-out, clamped to [0, 1].
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn lerp_domain(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StateRecord;

    fn record(state: &str, abbr: &str, poverty: f64, healthcare: f64) -> StateRecord {
        StateRecord {
            state: state.to_string(),
            abbr: abbr.to_string(),
            poverty,
            age: 35.0,
            income: 50000.0,
            obesity: 30.0,
            smokes: 20.0,
            healthcare,
        }
    }

    fn sample() -> SurveyDataset {
        SurveyDataset::from_records(vec![
            record("Alpha", "AA", 10.0, 10.0),
            record("Beta", "BB", 15.0, 20.0),
            record("Gamma", "GG", 20.0, 30.0),
        ])
    }

    #[test]
    fn plot_area_is_canvas_minus_margins() {
        let geom = ChartGeometry::default();
        assert_eq!(geom.plot_width(), 660.0);
        assert_eq!(geom.plot_height(), 400.0);
    }

    #[test]
    fn midrange_marker_lands_at_plot_center() {
        // poverty extent (10, 20) and healthcare extent (10, 30) are already
        // nice, so the middle record sits exactly at the plot center.
        let scene = build_scene(
            &sample(),
            XField::Poverty,
            YField::Healthcare,
            &ChartGeometry::default(),
        );
        assert_eq!(scene.markers[1].x, 330.0);
        assert_eq!(scene.markers[1].y, 200.0);
        // inverted vertical range: larger healthcare values plot higher
        assert!(scene.markers[2].y < scene.markers[0].y);
    }

    #[test]
    fn alabama_marker_matches_its_scales() {
        let mut ds = sample();
        ds.records.push(StateRecord {
            state: "Alabama".to_string(),
            abbr: "AL".to_string(),
            poverty: 20.1,
            age: 38.1,
            income: 42018.0,
            obesity: 32.4,
            smokes: 23.5,
            healthcare: 11.7,
        });
        let geom = ChartGeometry::default();
        let xs = x_scale(&ds, XField::Poverty, &geom);
        let ys = y_scale(&ds, YField::Healthcare, &geom);
        let scene = build_scene(&ds, XField::Poverty, YField::Healthcare, &geom);

        let al = scene.markers.iter().find(|m| m.abbr == "AL").unwrap();
        assert_eq!(al.x, xs.scale(20.1));
        assert_eq!(al.y, ys.scale(11.7));
        let (d0, d1) = xs.domain();
        assert!(d0 <= 20.1 && 20.1 <= d1, "domain contains the value");
    }

    #[test]
    fn rebuilding_the_scene_is_deterministic() {
        let ds = sample();
        let geom = ChartGeometry::default();
        let a = build_scene(&ds, XField::Age, YField::Smokes, &geom);
        let b = build_scene(&ds, XField::Age, YField::Smokes, &geom);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dataset_yields_empty_scene() {
        let scene = build_scene(
            &SurveyDataset::default(),
            XField::Poverty,
            YField::Obesity,
            &ChartGeometry::default(),
        );
        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn nan_metric_gives_nan_position_without_poisoning_others() {
        let mut ds = sample();
        ds.records[1].poverty = f64::NAN;
        let scene = build_scene(&ds, XField::Poverty, YField::Healthcare, &ChartGeometry::default());
        assert!(scene.markers[1].x.is_nan());
        assert!(scene.markers[0].x.is_finite());
        assert!(scene.markers[2].x.is_finite());
        // extent skipped the NaN, so the finite markers still span the plot
        assert_eq!(scene.x_ticks.first().map(|t| t.label.as_str()), Some("10"));
    }

    #[test]
    fn identical_values_collapse_to_range_midpoint() {
        let ds = SurveyDataset::from_records(vec![
            record("Alpha", "AA", 12.0, 10.0),
            record("Beta", "BB", 12.0, 20.0),
        ]);
        let scene = build_scene(&ds, XField::Poverty, YField::Healthcare, &ChartGeometry::default());
        assert_eq!(scene.markers[0].x, 330.0);
        assert_eq!(scene.markers[1].x, 330.0);
        assert_eq!(scene.x_ticks.len(), 1);
        assert_eq!(scene.x_ticks[0].label, "12");
    }

    #[test]
    fn tooltip_lists_state_then_both_fields() {
        let scene = build_scene(&sample(), XField::Poverty, YField::Obesity, &ChartGeometry::default());
        let lines: Vec<&str> = scene.markers[0].tooltip.lines().collect();
        assert_eq!(lines, vec!["Alpha", "In Poverty (%) 10", "Obese (%) 30"]);
    }

    #[test]
    fn gliding_ticks_keep_target_values() {
        let geom = ChartGeometry::default();
        let ds = sample();
        let target = x_scale(&ds, XField::Poverty, &geom);
        let display = LinearScale::new((5.0, 25.0), target.range());
        let ticks = axis_ticks(&target, &display, DEFAULT_TICK_COUNT);
        // values are the target's, placement is the display scale's
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("10"));
        assert_eq!(ticks[0].pos, display.scale(10.0));
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert_eq!(ease_cubic_in_out(1.7), 1.0, "clamped past the end");
        assert!((ease_cubic_in_out(0.25) - 0.0625).abs() < 1e-12);
        assert!((ease_cubic_in_out(0.75) - 0.9375).abs() < 1e-12);
    }
}
