use super::*;
use crate::cache::snapshot::Observed;

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<String>,
}

impl Presenter<u32> for Recorder {
    fn set_transform(&mut self, element: &u32, transform: &Translation) {
        self.calls.push(format!("{element} transform {}", transform.to_css()));
    }
    fn clear_transform(&mut self, element: &u32) {
        self.calls.push(format!("{element} clear"));
    }
    fn add_class(&mut self, element: &u32, class: &str) {
        self.calls.push(format!("{element} +{class}"));
    }
    fn remove_class(&mut self, element: &u32, class: &str) {
        self.calls.push(format!("{element} -{class}"));
    }
}

fn snapshot() -> GeometrySnapshot<u32> {
    GeometrySnapshot {
        element: 7,
        width: 10.0,
        height: 10.0,
        speed: 1.0,
        is_based_on_scroll_start: false,
        delta_start: 0.0,
        delta_end: 0.0,
        delta_translation: 0.0,
        observed: Observed {
            start_position: 0.0,
            min: 0.0,
            max: 1.0,
            full_height: 0.0,
        },
        visible: true,
    }
}

fn sample(visible: bool, value: f64) -> ViewportSample {
    ViewportSample {
        ratio: if visible { 0.5 } else { 2.0 },
        visible,
        value,
    }
}

#[test]
fn hidden_marker_is_edge_triggered() {
    let cfg = ParallaxConfig::default();
    let mut p = Recorder::default();
    let mut s = snapshot();

    assert_eq!(
        apply_frame(&mut p, &cfg, &mut s, &sample(false, 0.0)),
        VisibilityChange::Hidden
    );
    assert_eq!(
        apply_frame(&mut p, &cfg, &mut s, &sample(false, 0.0)),
        VisibilityChange::Unchanged
    );
    assert!(!s.is_visible());
    assert_eq!(p.calls, vec!["7 +u-hidden"]);

    assert_eq!(
        apply_frame(&mut p, &cfg, &mut s, &sample(true, 1.25)),
        VisibilityChange::Shown
    );
    assert_eq!(
        apply_frame(&mut p, &cfg, &mut s, &sample(true, 2.5)),
        VisibilityChange::Unchanged
    );
    assert_eq!(
        p.calls,
        vec![
            "7 +u-hidden",
            "7 transform matrix(1,0,0,1, 0, 1.2500)",
            "7 -u-hidden",
            "7 transform matrix(1,0,0,1, 0, 2.5000)",
        ]
    );
}

#[test]
fn revert_clears_transform_and_marker() {
    let cfg = ParallaxConfig::default();
    let mut p = Recorder::default();
    revert(&mut p, &cfg, &snapshot());
    assert_eq!(p.calls, vec!["7 clear", "7 -u-hidden"]);
}
