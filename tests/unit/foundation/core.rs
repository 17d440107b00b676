use super::*;

#[test]
fn bounds_follow_axis() {
    let r = Rect::new(10.0, 100.0, 60.0, 300.0);

    let v = Axis::Vertical.bounds(r);
    assert_eq!(
        v,
        AxisBounds {
            start: 100.0,
            end: 300.0,
            size: 200.0
        }
    );

    let h = Axis::Horizontal.bounds(r);
    assert_eq!(
        h,
        AxisBounds {
            start: 10.0,
            end: 60.0,
            size: 50.0
        }
    );
}

#[test]
fn pick_and_offset() {
    assert_eq!(Axis::Vertical.pick(1280.0, 720.0), 720.0);
    assert_eq!(Axis::Horizontal.pick(1280.0, 720.0), 1280.0);
    assert_eq!(Axis::Vertical.offset(3.0), Vec2::new(0.0, 3.0));
    assert_eq!(Axis::Horizontal.offset(3.0), Vec2::new(3.0, 0.0));
}

#[test]
fn axis_serde_is_lowercase() {
    let a: Axis = serde_json::from_str("\"horizontal\"").unwrap();
    assert_eq!(a, Axis::Horizontal);
    assert_eq!(serde_json::to_string(&Axis::Vertical).unwrap(), "\"vertical\"");
}
