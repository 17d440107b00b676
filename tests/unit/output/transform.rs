use super::*;

#[test]
fn css_uses_axis_slot_and_precision() {
    let t = Translation {
        axis: Axis::Vertical,
        value: -12.5,
        precision: 4,
    };
    assert_eq!(t.to_css(), "matrix(1,0,0,1, 0, -12.5000)");

    let t = Translation {
        axis: Axis::Horizontal,
        value: 3.14159,
        precision: 2,
    };
    assert_eq!(t.to_css(), "matrix(1,0,0,1, 3.14, 0)");
}

#[test]
fn css_never_prints_negative_zero() {
    let t = Translation {
        axis: Axis::Vertical,
        value: -0.0,
        precision: 4,
    };
    assert_eq!(t.to_css(), "matrix(1,0,0,1, 0, 0.0000)");
}

#[test]
fn affine_matches_offset() {
    let t = Translation {
        axis: Axis::Horizontal,
        value: 40.0,
        precision: 4,
    };
    assert_eq!(t.offset(), Vec2::new(40.0, 0.0));
    assert_eq!(t.to_affine(), Affine::translate((40.0, 0.0)));
}
