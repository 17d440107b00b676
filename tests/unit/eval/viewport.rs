use super::*;
use crate::cache::snapshot::Observed;

/// Snapshot of an element spanning `[100, 300]` in an 800px viewport, baseline 0, no deltas.
fn snap(speed: f64) -> GeometrySnapshot<u32> {
    GeometrySnapshot {
        element: 0,
        width: 100.0,
        height: 200.0,
        speed,
        is_based_on_scroll_start: false,
        delta_start: 0.0,
        delta_end: 0.0,
        delta_translation: 0.0,
        observed: Observed {
            start_position: 100.0,
            min: 800.0,
            max: -200.0,
            full_height: 1000.0,
        },
        visible: true,
    }
}

#[test]
fn fast_item_far_above_window_is_hidden() {
    let s = ViewportEvaluator::evaluate(&snap(2.0), 100.0);
    assert_eq!(s.ratio, (0.0 - 800.0) / (-200.0 - 800.0) * 2.0);
    assert!(!s.visible);
}

#[test]
fn fast_item_ratio_and_value_are_exact() {
    let s = ViewportEvaluator::evaluate(&snap(2.0), 750.0);
    let ratio = (-650.0 - 800.0) / (-200.0 - 800.0) * 2.0;
    assert_eq!(s.ratio, ratio);
    assert_eq!(
        s.value,
        0.0 + 0.0 * ratio + (-1000.0 + 1000.0 / 2.0) * ratio
    );
    assert!(!s.visible);
}

#[test]
fn window_bounds_are_inclusive() {
    let at_start = ViewportEvaluator::evaluate(&snap(1.0), -700.0);
    assert_eq!(at_start.ratio, 0.0);
    assert!(at_start.visible);

    let at_end = ViewportEvaluator::evaluate(&snap(1.0), 300.0);
    assert_eq!(at_end.ratio, 1.0);
    assert!(at_end.visible);

    assert!(!ViewportEvaluator::evaluate(&snap(1.0), -700.5).visible);
    assert!(!ViewportEvaluator::evaluate(&snap(1.0), 300.5).visible);
}

#[test]
fn sweep_at_unit_speed_is_linear() {
    let steps = 10;
    let from = -700.0;
    let to = 300.0;
    let mut prev: Option<f64> = None;
    let mut diffs = Vec::new();
    for i in 0..=steps {
        let current = from + (to - from) * f64::from(i) / f64::from(steps);
        let s = ViewportEvaluator::evaluate(&snap(1.0), current);
        assert!(s.visible, "step {i}");
        assert_eq!(s.value, 0.0);
        assert!((s.ratio - f64::from(i) / f64::from(steps)).abs() < 1e-12);
        if let Some(p) = prev {
            diffs.push(s.ratio - p);
        }
        prev = Some(s.ratio);
    }
    for d in &diffs {
        assert!((d - 0.1).abs() < 1e-12);
    }
}

#[test]
fn zero_length_window_is_never_visible() {
    let mut s = snap(1.0);
    s.observed.min = 800.0;
    s.observed.max = 800.0;

    let nan = ViewportEvaluator::evaluate(&s, -700.0);
    assert!(nan.ratio.is_nan());
    assert!(!nan.visible);

    let inf = ViewportEvaluator::evaluate(&s, 0.0);
    assert!(inf.ratio.is_infinite());
    assert!(!inf.visible);
}

#[test]
fn scroll_start_value_tracks_absolute_position() {
    let mut s = snap(0.5);
    s.is_based_on_scroll_start = true;
    s.observed.min = s.observed.start_position;
    s.delta_start = 10.0;
    s.delta_translation = 20.0;

    let current = 40.0;
    let out = ViewportEvaluator::evaluate(&s, current);
    let ratio = (100.0 - current - 100.0) / (-200.0 - 100.0) * 0.5;
    assert_eq!(out.ratio, ratio);
    assert_eq!(out.value, 10.0 + 20.0 * ratio + current * (1.0 - 0.5));
    assert!(out.visible);
}

#[test]
fn predicate_rejects_non_finite() {
    assert!(is_in_view(0.0));
    assert!(is_in_view(1.0));
    assert!(!is_in_view(f64::NAN));
    assert!(!is_in_view(f64::INFINITY));
    assert!(!is_in_view(-1e-9));
}
