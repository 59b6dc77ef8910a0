//! 2x2 linear transforms used by the isometric projection.

#[cfg(test)]
#[path = "matrix_test.rs"]
mod matrix_test;

use std::ops::Mul;

use crate::vector::Vector2;

/// Row-major 2x2 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub rows: [[f64; 2]; 2],
}

impl Mat2 {
    pub const IDENTITY: Self = Self { rows: [[1.0, 0.0], [0.0, 1.0]] };

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { rows: [[a, b], [c, d]] }
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }

    /// Inverse, or `None` when the determinant magnitude is at or below
    /// `tolerance` or any entry is not finite.
    #[must_use]
    pub fn inverse(&self, tolerance: f64) -> Option<Self> {
        let det = self.determinant();
        if !self.is_finite() || !det.is_finite() || det.abs() <= tolerance {
            return None;
        }
        let [[a, b], [c, d]] = self.rows;
        let inv = 1.0 / det;
        Some(Self::new(d * inv, -b * inv, -c * inv, a * inv))
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|v| v.is_finite())
    }
}

impl Mul for Mat2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [[a, b], [c, d]] = self.rows;
        let [[e, f], [g, h]] = rhs.rows;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }
}

impl Mul<Vector2<f64>> for Mat2 {
    type Output = Vector2<f64>;

    fn mul(self, v: Vector2<f64>) -> Vector2<f64> {
        let [[a, b], [c, d]] = self.rows;
        Vector2::new(a * v.x + b * v.y, c * v.x + d * v.y)
    }
}
