use crate::data::model::{SurveyDataset, XField, YField};
use crate::scale::{DEFAULT_TICK_COUNT, LinearScale};
use crate::scene::{self, ChartGeometry, Scene};

/// Axis-change animation length in seconds.
pub const TRANSITION_SECS: f64 = 1.0;

// ---------------------------------------------------------------------------
// Selection and events
// ---------------------------------------------------------------------------

/// Which field each axis currently plots.  One field per axis by
/// construction, so exactly one control per axis is ever active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSelection {
    pub x: XField,
    pub y: YField,
}

impl Default for AxisSelection {
    fn default() -> Self {
        AxisSelection { x: XField::Poverty, y: YField::Obesity }
    }
}

/// Everything the UI can ask the chart to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartEvent {
    SelectX(XField),
    SelectY(YField),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// An in-flight axis-change animation.
struct Transition {
    started_at: f64,
    /// Marker positions when the transition began, in record order.
    from_positions: Vec<(f32, f32)>,
    from_x_domain: (f64, f64),
    from_y_domain: (f64, f64),
}

/// The full chart state, independent of rendering.  Time is passed in by
/// the caller (seconds, any monotonic origin), never read from a clock.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<SurveyDataset>,

    /// Which field each axis plots.
    pub selection: AxisSelection,

    /// Fixed canvas layout.
    pub geometry: ChartGeometry,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    transition: Option<Transition>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: AxisSelection::default(),
            geometry: ChartGeometry::default(),
            status_message: None,
            transition: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset.  The selection resets to the default
    /// pair and any running animation is dropped.
    pub fn set_dataset(&mut self, dataset: SurveyDataset) {
        self.dataset = Some(dataset);
        self.selection = AxisSelection::default();
        self.transition = None;
        self.status_message = None;
    }

    /// Apply a UI event.  Selecting the already-active field is a no-op;
    /// otherwise the selection flips immediately and an animation starts
    /// from wherever the markers currently sit, so a click mid-flight
    /// retargets without snapping.
    pub fn handle_event(&mut self, event: ChartEvent, now: f64) {
        let next = match event {
            ChartEvent::SelectX(field) => AxisSelection { x: field, ..self.selection },
            ChartEvent::SelectY(field) => AxisSelection { y: field, ..self.selection },
        };
        if next == self.selection {
            return;
        }
        self.begin_transition(next, now);
    }

    /// True while an axis-change animation is still running.
    pub fn is_transitioning(&self, now: f64) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|tr| now - tr.started_at < TRANSITION_SECS)
    }

    /// Scene for this frame.  Finished animations are retired here, so the
    /// idle path stays a plain deterministic rebuild.
    pub fn scene(&mut self, now: f64) -> Scene {
        if let Some(tr) = &self.transition {
            if now - tr.started_at >= TRANSITION_SECS {
                self.transition = None;
            }
        }

        let Some(dataset) = &self.dataset else {
            return Scene::default();
        };
        if dataset.is_empty() {
            return Scene::default();
        }

        if self.transition.is_none() {
            return scene::build_scene(dataset, self.selection.x, self.selection.y, &self.geometry);
        }

        let xs = scene::x_scale(dataset, self.selection.x, &self.geometry);
        let ys = scene::y_scale(dataset, self.selection.y, &self.geometry);
        let (positions, x_domain, y_domain) = self.displayed_positions(dataset, now);
        let x_display = LinearScale::new(x_domain, xs.range());
        let y_display = LinearScale::new(y_domain, ys.range());

        Scene {
            markers: scene::markers(dataset, self.selection.x, self.selection.y, &positions),
            x_ticks: scene::axis_ticks(&xs, &x_display, DEFAULT_TICK_COUNT),
            y_ticks: scene::axis_ticks(&ys, &y_display, DEFAULT_TICK_COUNT),
        }
    }

    fn begin_transition(&mut self, next: AxisSelection, now: f64) {
        let Some(dataset) = &self.dataset else {
            // Nothing on screen to animate.
            self.selection = next;
            return;
        };
        if dataset.is_empty() {
            self.selection = next;
            self.transition = None;
            return;
        }

        // Capture what is on screen right now, which for a mid-flight
        // transition is the blended state, not the old endpoint.
        let (from_positions, from_x_domain, from_y_domain) =
            self.displayed_positions(dataset, now);

        self.selection = next;
        self.transition = Some(Transition {
            started_at: now,
            from_positions,
            from_x_domain,
            from_y_domain,
        });
    }

    /// Marker positions and axis domains as currently displayed: the
    /// targets of the active selection when idle, or the eased blend while
    /// a transition runs.
    fn displayed_positions(
        &self,
        dataset: &SurveyDataset,
        now: f64,
    ) -> (Vec<(f32, f32)>, (f64, f64), (f64, f64)) {
        let xs = scene::x_scale(dataset, self.selection.x, &self.geometry);
        let ys = scene::y_scale(dataset, self.selection.y, &self.geometry);
        let target = scene::marker_positions(dataset, self.selection.x, self.selection.y, &xs, &ys);

        match &self.transition {
            Some(tr) if now - tr.started_at < TRANSITION_SECS => {
                let eased = scene::ease_cubic_in_out((now - tr.started_at) / TRANSITION_SECS);
                let t = eased as f32;
                let positions = tr
                    .from_positions
                    .iter()
                    .zip(&target)
                    .map(|(&(fx, fy), &(tx, ty))| (scene::lerp(fx, tx, t), scene::lerp(fy, ty, t)))
                    .collect();
                let x_domain = scene::lerp_domain(tr.from_x_domain, xs.domain(), eased);
                let y_domain = scene::lerp_domain(tr.from_y_domain, ys.domain(), eased);
                (positions, x_domain, y_domain)
            }
            _ => (target, xs.domain(), ys.domain()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StateRecord;
    use crate::scene::{build_scene, ease_cubic_in_out, lerp};

    fn record(state: &str, abbr: &str, poverty: f64, age: f64) -> StateRecord {
        StateRecord {
            state: state.to_string(),
            abbr: abbr.to_string(),
            poverty,
            age,
            income: 50000.0,
            obesity: 30.0,
            smokes: 20.0,
            healthcare: 15.0,
        }
    }

    fn loaded_state() -> AppState {
        let mut st = AppState::default();
        st.set_dataset(SurveyDataset::from_records(vec![
            record("Alpha", "AA", 10.0, 30.0),
            record("Beta", "BB", 15.0, 31.0),
            record("Gamma", "GG", 20.0, 40.0),
        ]));
        st
    }

    #[test]
    fn defaults_to_poverty_vs_obesity() {
        let st = AppState::default();
        assert_eq!(st.selection, AxisSelection { x: XField::Poverty, y: YField::Obesity });
        assert!(st.dataset.is_none());
        assert!(!st.is_transitioning(0.0));
    }

    #[test]
    fn reselecting_the_active_field_is_a_noop() {
        let mut st = loaded_state();
        st.handle_event(ChartEvent::SelectX(XField::Poverty), 0.0);
        assert!(st.transition.is_none());
        assert_eq!(st.selection.x, XField::Poverty);

        // mid-flight reselection of the new target must not restart the clock
        st.handle_event(ChartEvent::SelectX(XField::Age), 1.0);
        st.handle_event(ChartEvent::SelectX(XField::Age), 1.4);
        assert_eq!(st.transition.as_ref().map(|t| t.started_at), Some(1.0));
    }

    #[test]
    fn axis_switch_animates_and_lands_on_target() {
        let mut st = loaded_state();
        let before = st.scene(0.0);

        st.handle_event(ChartEvent::SelectX(XField::Age), 10.0);
        assert_eq!(st.selection.x, XField::Age);
        assert!(st.is_transitioning(10.0));

        // at the very start nothing has moved yet
        let at_start = st.scene(10.0);
        assert_eq!(at_start.markers[0].x, before.markers[0].x);

        // after the full second the markers sit exactly on the new layout
        let done = st.scene(11.2);
        let target = build_scene(
            st.dataset.as_ref().unwrap(),
            XField::Age,
            YField::Obesity,
            &st.geometry,
        );
        assert_eq!(done, target);
        assert!(!st.is_transitioning(11.2));
        assert!(st.transition.is_none(), "finished transition is retired");
    }

    #[test]
    fn halfway_markers_sit_between_endpoints() {
        let mut st = loaded_state();
        let ds = st.dataset.clone().unwrap();
        let geom = st.geometry;
        let from = build_scene(&ds, XField::Poverty, YField::Obesity, &geom);
        let to = build_scene(&ds, XField::Age, YField::Obesity, &geom);

        st.handle_event(ChartEvent::SelectX(XField::Age), 0.0);
        let mid = st.scene(0.5); // cubic ease-in-out is exactly 1/2 at 1/2

        for i in 0..3 {
            let expected = lerp(from.markers[i].x, to.markers[i].x, 0.5);
            assert!((mid.markers[i].x - expected).abs() < 1e-3);
            assert_eq!(mid.markers[i].y, from.markers[i].y, "y axis unchanged");
        }
    }

    #[test]
    fn interrupting_click_retargets_from_blended_positions() {
        let mut st = loaded_state();
        let ds = st.dataset.clone().unwrap();
        let geom = st.geometry;
        let from = build_scene(&ds, XField::Poverty, YField::Obesity, &geom);
        let to = build_scene(&ds, XField::Age, YField::Obesity, &geom);

        st.handle_event(ChartEvent::SelectX(XField::Age), 0.0);
        st.handle_event(ChartEvent::SelectY(YField::Smokes), 0.5);

        assert_eq!(st.selection, AxisSelection { x: XField::Age, y: YField::Smokes });
        let tr = st.transition.as_ref().unwrap();
        assert_eq!(tr.started_at, 0.5);
        for i in 0..3 {
            let expected = lerp(from.markers[i].x, to.markers[i].x, 0.5);
            assert!((tr.from_positions[i].0 - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn ticks_glide_with_the_blended_domain() {
        let mut st = loaded_state();
        st.handle_event(ChartEvent::SelectX(XField::Age), 0.0);
        let mid = st.scene(0.5);

        // tick values already belong to the target field...
        let ds = st.dataset.as_ref().unwrap();
        let target = scene::x_scale(ds, XField::Age, &st.geometry);
        let labels: Vec<String> =
            target.ticks(DEFAULT_TICK_COUNT).iter().map(|v| crate::scale::tick_label(*v)).collect();
        assert_eq!(mid.x_ticks.iter().map(|t| t.label.clone()).collect::<Vec<_>>(), labels);

        // ...but sit where the half-blended domain puts them
        let from = scene::x_scale(ds, XField::Poverty, &st.geometry);
        let blended = LinearScale::new(
            scene::lerp_domain(from.domain(), target.domain(), ease_cubic_in_out(0.5)),
            target.range(),
        );
        assert_eq!(mid.x_ticks[0].pos, blended.scale(30.0));
        assert!(mid.x_ticks[0].pos != target.scale(30.0));
    }

    #[test]
    fn events_without_a_dataset_flip_selection_silently() {
        let mut st = AppState::default();
        st.handle_event(ChartEvent::SelectY(YField::Healthcare), 2.0);
        assert_eq!(st.selection.y, YField::Healthcare);
        assert!(st.transition.is_none());
        assert_eq!(st.scene(2.0), Scene::default());
    }

    #[test]
    fn empty_dataset_renders_nothing_and_never_animates() {
        let mut st = AppState::default();
        st.set_dataset(SurveyDataset::default());
        st.handle_event(ChartEvent::SelectX(XField::Income), 0.0);
        assert_eq!(st.selection.x, XField::Income);
        assert!(st.transition.is_none());
        assert_eq!(st.scene(0.1), Scene::default());
    }

    #[test]
    fn loading_a_dataset_resets_selection_and_animation() {
        let mut st = loaded_state();
        st.handle_event(ChartEvent::SelectX(XField::Age), 0.0);
        st.set_dataset(SurveyDataset::from_records(vec![record("Delta", "DD", 9.0, 33.0)]));
        assert_eq!(st.selection, AxisSelection::default());
        assert!(st.transition.is_none());
    }
}
