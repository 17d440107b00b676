use super::*;
use crate::diagnostics::sink::CollectingDiagnostics;
use crate::dom::memory::{MemoryDocument, MemoryNode, NodeId};
use crate::foundation::core::Rect;

fn item(attrs: &[(&str, &str)]) -> (MemoryDocument, NodeId) {
    let mut node = MemoryNode::new(Rect::new(0.0, 100.0, 50.0, 300.0));
    for (k, v) in attrs {
        node = node.with_attr(*k, *v);
    }
    let mut d = MemoryDocument::new();
    let id = d.push(node).unwrap();
    (d, id)
}

#[test]
fn delta_parsing_follows_suffix_rules() {
    assert_eq!(DeltaValue::parse(""), Some(DeltaValue::Pixels(0.0)));
    assert_eq!(
        DeltaValue::parse("10%"),
        Some(DeltaValue::ElementPercent(10.0))
    );
    assert_eq!(
        DeltaValue::parse("-25"),
        Some(DeltaValue::ElementPercent(-25.0))
    );
    assert_eq!(
        DeltaValue::parse("12.5v"),
        Some(DeltaValue::ViewportPercent(12.5))
    );
    assert_eq!(DeltaValue::parse("v"), None);
    assert_eq!(DeltaValue::parse("abc"), None);
}

#[test]
fn element_percent_resolves_against_element_size() {
    let d = DeltaValue::parse("10%").unwrap();
    assert_eq!(d.resolve(200.0, 800.0), 20.0);
}

#[test]
fn viewport_percent_resolves_against_viewport_size() {
    let d = DeltaValue::parse("50v").unwrap();
    assert_eq!(d.resolve(200.0, 1000.0), 500.0);
}

#[test]
fn pixels_pass_through() {
    assert_eq!(DeltaValue::Pixels(-7.25).resolve(200.0, 1000.0), -7.25);
    assert!(DeltaValue::Pixels(0.0).is_zero());
    assert!(DeltaValue::ElementPercent(0.0).is_zero());
    assert!(!DeltaValue::ViewportPercent(1.0).is_zero());
}

#[test]
fn absent_attributes_use_defaults() {
    let (d, id) = item(&[]);
    let diag = CollectingDiagnostics::new();
    let p = ItemParams::read(&d, &id, &mut diag.clone());
    assert_eq!(p, ItemParams::default());
    assert!(diag.is_empty());
}

#[test]
fn declared_attributes_are_read() {
    let (d, id) = item(&[
        ("data-speed", "0.5"),
        ("data-delta-start", "10%"),
        ("data-delta-end", "20v"),
        ("data-scroll-top", ""),
        ("data-based-on-parent", "120"),
        ("data-invert", ""),
    ]);
    let diag = CollectingDiagnostics::new();
    let p = ItemParams::read(&d, &id, &mut diag.clone());
    assert_eq!(p.speed, 0.5);
    assert_eq!(p.delta_start, DeltaValue::ElementPercent(10.0));
    assert_eq!(p.delta_end, DeltaValue::ViewportPercent(20.0));
    assert!(p.is_based_on_scroll_start);
    assert_eq!(p.parent_basis, Some(120.0));
    assert!(p.is_based_on_parent());
    assert!(p.invert);
    assert!(diag.is_empty());
}

#[test]
fn invalid_values_warn_and_fall_back() {
    let (d, id) = item(&[
        ("data-speed", "fast"),
        ("data-delta-start", "%"),
        ("data-based-on-parent", ""),
    ]);
    let diag = CollectingDiagnostics::new();
    let p = ItemParams::read(&d, &id, &mut diag.clone());
    assert_eq!(p.speed, 1.0);
    assert_eq!(p.delta_start, DeltaValue::Pixels(0.0));
    assert_eq!(p.parent_basis, Some(100.0));

    let names: Vec<String> = diag
        .warnings()
        .into_iter()
        .map(|w| match w {
            ConfigWarning::InvalidAttribute { name, .. } => name,
            other => panic!("unexpected warning {other:?}"),
        })
        .collect();
    assert_eq!(
        names,
        vec!["data-speed", "data-delta-start", "data-based-on-parent"]
    );
}

#[test]
fn incompatible_combinations_each_warn() {
    let diag = CollectingDiagnostics::new();
    let p = ItemParams {
        speed: 2.0,
        delta_end: DeltaValue::ElementPercent(10.0),
        parent_basis: Some(120.0),
        ..ItemParams::default()
    };
    p.check(&mut diag.clone());
    assert_eq!(
        diag.warnings(),
        vec![
            ConfigWarning::SpeedWithDeltas { speed: 2.0 },
            ConfigWarning::SpeedWithParentBasis { speed: 2.0 },
        ]
    );
}

#[test]
fn default_speed_or_zero_deltas_do_not_warn() {
    let diag = CollectingDiagnostics::new();
    ItemParams {
        delta_start: DeltaValue::ElementPercent(10.0),
        ..ItemParams::default()
    }
    .check(&mut diag.clone());
    ItemParams {
        speed: 3.0,
        delta_start: DeltaValue::ElementPercent(0.0),
        ..ItemParams::default()
    }
    .check(&mut diag.clone());
    assert!(diag.is_empty());
}
