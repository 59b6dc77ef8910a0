use super::*;

fn pt(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

#[test]
fn default_is_idle() {
    let g = PanGesture::default();
    assert_eq!(g, PanGesture::Idle);
    assert!(!g.is_active());
}

#[test]
fn idle_has_no_target() {
    assert_eq!(PanGesture::Idle.target(pt(10.0, 10.0)), None);
}

#[test]
fn begin_is_active() {
    assert!(PanGesture::begin(pt(0.0, 0.0), pt(0.0, 0.0)).is_active());
}

#[test]
fn target_at_origin_is_cached_corner() {
    let g = PanGesture::begin(pt(100.0, 50.0), pt(-20.0, 5.0));
    assert_eq!(g.target(pt(100.0, 50.0)), Some(pt(-20.0, 5.0)));
}

#[test]
fn target_applies_delta_from_origin() {
    let g = PanGesture::begin(pt(100.0, 50.0), pt(-20.0, 5.0));
    assert_eq!(g.target(pt(130.0, 40.0)), Some(pt(10.0, -5.0)));
}

#[test]
fn target_is_replayable() {
    let g = PanGesture::begin(pt(0.0, 0.0), pt(0.0, 0.0));
    let first = g.target(pt(7.0, 3.0));
    let _ = g.target(pt(-50.0, 90.0));
    assert_eq!(g.target(pt(7.0, 3.0)), first);
}
