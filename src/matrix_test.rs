#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;

const EPSILON: f64 = 1e-12;

fn point_approx_eq(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

fn mat_approx_eq(a: &Mat2, b: &Mat2, epsilon: f64) -> bool {
    a.rows
        .iter()
        .flatten()
        .zip(b.rows.iter().flatten())
        .all(|(x, y)| (x - y).abs() <= epsilon)
}

#[test]
fn identity_leaves_vectors_alone() {
    let v = Vector2::new(3.5, -2.0);
    assert_eq!(Mat2::IDENTITY * v, v);
}

#[test]
fn rotation_quarter_turn() {
    let r = Mat2::rotation(FRAC_PI_2);
    let out = r * Vector2::new(1.0, 0.0);
    assert!(point_approx_eq(out, Vector2::new(0.0, 1.0)));
}

#[test]
fn scale_is_diagonal() {
    let s = Mat2::scale(2.0, 0.5);
    assert_eq!(s * Vector2::new(1.0, 4.0), Vector2::new(2.0, 2.0));
}

#[test]
fn product_composes_right_to_left() {
    let m = Mat2::rotation(FRAC_PI_2) * Mat2::scale(1.0, 0.5);
    // (0, 2) -> scale -> (0, 1) -> rotate -> (-1, 0)
    let out = m * Vector2::new(0.0, 2.0);
    assert!(point_approx_eq(out, Vector2::new(-1.0, 0.0)));
}

#[test]
fn determinant_of_rotation_is_one() {
    assert!((Mat2::rotation(0.7).determinant() - 1.0).abs() < EPSILON);
}

#[test]
fn determinant_of_rotation_times_scale_is_scale() {
    let m = Mat2::rotation(0.3) * Mat2::scale(1.0, 0.5);
    assert!((m.determinant() - 0.5).abs() < EPSILON);
}

#[test]
fn inverse_times_matrix_is_identity() {
    let m = Mat2::new(2.0, 1.0, -1.0, 3.0);
    let inv = m.inverse(EPSILON).unwrap();
    assert!(mat_approx_eq(&(inv * m), &Mat2::IDENTITY, EPSILON));
    assert!(mat_approx_eq(&(m * inv), &Mat2::IDENTITY, EPSILON));
}

#[test]
fn singular_matrix_has_no_inverse() {
    let m = Mat2::new(1.0, 2.0, 2.0, 4.0);
    assert!(m.inverse(EPSILON).is_none());
}

#[test]
fn near_singular_matrix_rejected_by_tolerance() {
    let m = Mat2::scale(1.0, 1e-10);
    assert!(m.inverse(1e-9).is_none());
    assert!(m.inverse(1e-12).is_some());
}

#[test]
fn non_finite_matrix_has_no_inverse() {
    let m = Mat2::new(f64::NAN, 0.0, 0.0, 1.0);
    assert!(m.inverse(EPSILON).is_none());
}
