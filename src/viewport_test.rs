#![allow(clippy::float_cmp)]

use super::*;

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

fn bottom_left_based() -> ViewportF {
    Viewport::new(v(2.0, 3.0), v(10.0, 5.0)).unwrap()
}

fn top_left_based() -> ViewportF {
    Viewport::with_mode(v(0.0, 0.0), v(800.0, 600.0), CornerMode::TopLeftBased).unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_defaults_to_bottom_left_based() {
    let vp = bottom_left_based();
    assert_eq!(vp.corner_mode(), CornerMode::BottomLeftBased);
    assert_eq!(vp.primary_corner(), v(2.0, 3.0));
    assert_eq!(vp.dims(), v(10.0, 5.0));
}

#[test]
fn zero_dims_rejected() {
    let err = Viewport::new(v(0.0, 0.0), v(0.0, 5.0)).unwrap_err();
    assert!(matches!(err, ViewportError::NonPositiveDims { .. }));
}

#[test]
fn negative_dims_rejected() {
    assert!(Viewport::new(v(0.0, 0.0), v(4.0, -1.0)).is_err());
}

#[test]
fn nan_and_infinite_dims_rejected() {
    assert!(Viewport::new(v(0.0, 0.0), v(f64::NAN, 1.0)).is_err());
    assert!(Viewport::new(v(0.0, 0.0), v(1.0, f64::INFINITY)).is_err());
}

#[test]
fn integer_viewport_supported() {
    let vp: ViewportI = Viewport::new(Vector2::new(-2, 1), Vector2::new(4, 3)).unwrap();
    assert_eq!(vp.top_right(), Vector2::new(2, 4));
    assert!(Viewport::new(Vector2::new(0, 0), Vector2::new(0, 3)).is_err());
}

#[test]
fn error_message_names_dims() {
    let err = Viewport::new(v(0.0, 0.0), v(-1.0, 2.0)).unwrap_err();
    assert!(err.to_string().contains("(-1, 2)"));
}

// =============================================================
// Corners
// =============================================================

#[test]
fn bottom_left_based_corners() {
    let vp = bottom_left_based();
    assert_eq!(vp.bottom_left(), v(2.0, 3.0));
    assert_eq!(vp.bottom_right(), v(12.0, 3.0));
    assert_eq!(vp.top_left(), v(2.0, 8.0));
    assert_eq!(vp.top_right(), v(12.0, 8.0));
}

#[test]
fn bottom_left_based_top_right_is_bottom_left_plus_dims() {
    let vp = bottom_left_based();
    assert_eq!(vp.top_right(), vp.bottom_left() + vp.dims());
}

#[test]
fn top_left_based_corners_grow_downward() {
    let vp = top_left_based();
    assert_eq!(vp.top_left(), v(0.0, 0.0));
    assert_eq!(vp.top_right(), v(800.0, 0.0));
    assert_eq!(vp.bottom_left(), v(0.0, 600.0));
    assert_eq!(vp.bottom_right(), v(800.0, 600.0));
}

#[test]
fn top_left_based_top_right_is_bottom_left_plus_dims_in_screen_orientation() {
    let vp = top_left_based();
    let dims = vp.dims();
    assert_eq!(vp.top_right(), vp.bottom_left() + v(dims.x, -dims.y));
}

#[test]
fn corners_lists_all_four() {
    let vp = bottom_left_based();
    assert_eq!(vp.corners(), [v(2.0, 3.0), v(12.0, 3.0), v(2.0, 8.0), v(12.0, 8.0)]);
}

// =============================================================
// Move / scale
// =============================================================

#[test]
fn move_replaces_anchor_only() {
    let mut vp = bottom_left_based();
    vp.move_to(v(-4.0, 1.0));
    assert_eq!(vp.bottom_left(), v(-4.0, 1.0));
    assert_eq!(vp.dims(), v(10.0, 5.0));
}

#[test]
fn move_on_top_left_based_moves_top_left() {
    let mut vp = top_left_based();
    vp.move_to(v(10.0, 20.0));
    assert_eq!(vp.top_left(), v(10.0, 20.0));
    assert_eq!(vp.bottom_left(), v(10.0, 620.0));
}

#[test]
fn move_bottom_left_is_mode_agnostic() {
    let mut a = bottom_left_based();
    a.move_bottom_left(v(1.0, 1.0));
    assert_eq!(a.bottom_left(), v(1.0, 1.0));

    let mut b = top_left_based();
    b.move_bottom_left(v(1.0, 1.0));
    assert_eq!(b.bottom_left(), v(1.0, 1.0));
    assert_eq!(b.primary_corner(), v(1.0, -599.0));
}

#[test]
fn scale_multiplies_dims_and_keeps_corner() {
    let mut vp = bottom_left_based();
    vp.scale(0.5, 2.0).unwrap();
    assert_eq!(vp.dims(), v(5.0, 10.0));
    assert_eq!(vp.primary_corner(), v(2.0, 3.0));
}

#[test]
fn scale_rejects_non_positive_factor() {
    let mut vp = bottom_left_based();
    assert!(vp.scale(0.0, 1.0).is_err());
    assert!(vp.scale(1.0, -2.0).is_err());
    assert!(vp.scale(f64::NAN, 1.0).is_err());
    assert_eq!(vp.dims(), v(10.0, 5.0));
}

#[test]
fn scale_rejects_overflow_to_infinity() {
    let mut vp = bottom_left_based();
    let err = vp.scale(f64::MAX, 1.0).unwrap_err();
    assert!(matches!(err, ViewportError::InvalidScale { .. }));
    assert_eq!(vp.dims(), v(10.0, 5.0));
}

#[test]
fn integer_scale_rejects_overflow() {
    let dims = Vector2::new(i32::MAX / 2 + 1, 10);
    let mut vp = ViewportI::new(Vector2::new(0, 0), dims).unwrap();
    let err = vp.scale(2, 1).unwrap_err();
    assert!(matches!(err, ViewportError::InvalidScale { .. }));
    assert_eq!(vp.dims(), dims);
}

#[test]
fn integer_scale_within_range() {
    let mut vp = ViewportI::new(Vector2::new(-3, 4), Vector2::new(6, 5)).unwrap();
    vp.scale(3, 2).unwrap();
    assert_eq!(vp.dims(), Vector2::new(18, 10));
    assert_eq!(vp.primary_corner(), Vector2::new(-3, 4));
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn point_inside_is_visible() {
    let vp = bottom_left_based();
    assert!(vp.visible(v(5.0, 5.0), v(0.0, 0.0)));
}

#[test]
fn touching_edge_is_visible() {
    let vp = bottom_left_based();
    // Box [13 - 1, 13 + 1] touches x = 12.
    assert!(vp.visible(v(13.0, 5.0), v(1.0, 1.0)));
}

#[test]
fn outside_on_one_axis_is_hidden() {
    let vp = bottom_left_based();
    assert!(!vp.visible(v(13.5, 5.0), v(1.0, 1.0)));
    assert!(!vp.visible(v(5.0, 0.5), v(1.0, 1.0)));
}

#[test]
fn visible_radius_matches_square_extent() {
    let vp = bottom_left_based();
    assert!(vp.visible_radius(0.0, 2.0, 2.0));
    assert!(!vp.visible_radius(-0.5, 2.0, 2.0));
}

#[test]
fn visible_point_uses_unit_extent() {
    let vp = bottom_left_based();
    assert!(vp.visible_point(v(1.0, 9.0)));
    assert!(!vp.visible_point(v(0.5, 9.0)));
}

// =============================================================
// Cell ranges
// =============================================================

#[test]
fn cell_range_is_inclusive() {
    let vp = ViewportF::from_cell_range(Vector2::new(0, -1), Vector2::new(19, 14));
    assert_eq!(vp.corner_mode(), CornerMode::BottomLeftBased);
    assert_eq!(vp.bottom_left(), v(0.0, -1.0));
    assert_eq!(vp.dims(), v(20.0, 16.0));
}

#[test]
fn single_cell_range_has_unit_dims() {
    let vp = ViewportF::from_cell_range(Vector2::new(3, 3), Vector2::new(3, 3));
    assert_eq!(vp.dims(), v(1.0, 1.0));
}
