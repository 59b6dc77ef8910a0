//! Axis-aligned window into tile space or pixel space.
//!
//! A viewport is stored as one anchored corner plus its dimensions. The
//! [`CornerMode`] decides which corner is anchored and, with it, which way the
//! vertical axis points:
//!
//! - `BottomLeftBased`: y grows upward, `top_right = bottom_left + dims`.
//! - `TopLeftBased`: y grows downward (screen convention), so the bottom
//!   edge sits at `corner.y + dims.y`.
//!
//! The four derived corners are always computed on demand; callers never need
//! to know which mode is in effect.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::vector::{Coordinate, Vector2};

/// Error returned when a viewport would end up with unusable dimensions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewportError {
    /// Dimensions must be finite and strictly positive on both axes.
    #[error("viewport dims must be strictly positive, got {dims}")]
    NonPositiveDims { dims: String },
    /// Scale factors must be finite and strictly positive, and keep the dims so.
    #[error("invalid viewport scale ({sx}, {sy})")]
    InvalidScale { sx: String, sy: String },
}

/// Which corner of the viewport is stored and moved directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerMode {
    /// The anchored corner is the bottom-left one; y grows upward.
    #[default]
    BottomLeftBased,
    /// The anchored corner is the top-left one; y grows downward.
    TopLeftBased,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport<T> {
    mode: CornerMode,
    corner: Vector2<T>,
    dims: Vector2<T>,
}

pub type ViewportI = Viewport<i32>;
pub type ViewportF = Viewport<f64>;

impl<T: Coordinate> Viewport<T> {
    /// Create a bottom-left based viewport.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::NonPositiveDims`] unless both dims are finite and `> 0`.
    pub fn new(corner: Vector2<T>, dims: Vector2<T>) -> Result<Self, ViewportError> {
        Self::with_mode(corner, dims, CornerMode::BottomLeftBased)
    }

    /// Create a viewport anchored at `corner` according to `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::NonPositiveDims`] unless both dims are finite and `> 0`.
    pub fn with_mode(corner: Vector2<T>, dims: Vector2<T>, mode: CornerMode) -> Result<Self, ViewportError> {
        if !dims.is_positive() {
            return Err(ViewportError::NonPositiveDims { dims: dims.to_string() });
        }
        Ok(Self { mode, corner, dims })
    }

    #[must_use]
    pub fn corner_mode(&self) -> CornerMode {
        self.mode
    }

    /// The anchored corner, as given at construction or by the last move.
    #[must_use]
    pub fn primary_corner(&self) -> Vector2<T> {
        self.corner
    }

    #[must_use]
    pub fn dims(&self) -> Vector2<T> {
        self.dims
    }

    #[must_use]
    pub fn bottom_left(&self) -> Vector2<T> {
        match self.mode {
            CornerMode::BottomLeftBased => self.corner,
            CornerMode::TopLeftBased => Vector2::new(self.corner.x, self.corner.y + self.dims.y),
        }
    }

    #[must_use]
    pub fn bottom_right(&self) -> Vector2<T> {
        match self.mode {
            CornerMode::BottomLeftBased => Vector2::new(self.corner.x + self.dims.x, self.corner.y),
            CornerMode::TopLeftBased => self.corner + self.dims,
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Vector2<T> {
        match self.mode {
            CornerMode::BottomLeftBased => Vector2::new(self.corner.x, self.corner.y + self.dims.y),
            CornerMode::TopLeftBased => self.corner,
        }
    }

    #[must_use]
    pub fn top_right(&self) -> Vector2<T> {
        match self.mode {
            CornerMode::BottomLeftBased => self.corner + self.dims,
            CornerMode::TopLeftBased => Vector2::new(self.corner.x + self.dims.x, self.corner.y),
        }
    }

    /// All four corners: bottom-left, bottom-right, top-left, top-right.
    #[must_use]
    pub fn corners(&self) -> [Vector2<T>; 4] {
        [self.bottom_left(), self.bottom_right(), self.top_left(), self.top_right()]
    }

    /// Replace the anchored corner. Dims are untouched.
    pub fn move_to(&mut self, corner: Vector2<T>) {
        self.corner = corner;
    }

    /// Relocate the viewport so that its bottom-left corner lands on `bottom_left`,
    /// whatever the corner mode.
    pub fn move_bottom_left(&mut self, bottom_left: Vector2<T>) {
        let offset = self.corner - self.bottom_left();
        self.corner = bottom_left + offset;
    }

    /// Multiply the dims component-wise. The anchored corner is untouched.
    ///
    /// Factors below one shrink the viewport, above one grow it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidScale`] when a factor is not finite and
    /// strictly positive, or when the scaled dims would stop being so
    /// (underflow or overflow). The viewport is left unchanged in that case.
    pub fn scale(&mut self, sx: T, sy: T) -> Result<(), ViewportError> {
        let invalid = || ViewportError::InvalidScale { sx: sx.to_string(), sy: sy.to_string() };
        let factors = Vector2::new(sx, sy);
        if !factors.is_positive() {
            return Err(invalid());
        }
        let scaled = self.dims.checked_mul_elem(factors).ok_or_else(invalid)?;
        if !scaled.is_positive() {
            return Err(invalid());
        }
        self.dims = scaled;
        Ok(())
    }

    /// Whether the box `[p - size, p + size]` touches the viewport box
    /// `[corner, corner + dims]` on both axes. Touching edges count as visible.
    #[must_use]
    pub fn visible(&self, p: Vector2<T>, size: Vector2<T>) -> bool {
        let min = self.corner;
        let max = self.corner + self.dims;

        if p.x + size.x < min.x || p.x - size.x > max.x {
            return false;
        }
        if p.y + size.y < min.y || p.y - size.y > max.y {
            return false;
        }
        true
    }

    /// Same as [`Viewport::visible`] with a square extent of `radius`.
    #[must_use]
    pub fn visible_radius(&self, x: T, y: T, radius: T) -> bool {
        self.visible(Vector2::new(x, y), Vector2::splat(radius))
    }

    /// Unit-extent visibility check.
    #[must_use]
    pub fn visible_point(&self, p: Vector2<T>) -> bool {
        self.visible(p, Vector2::splat(T::ONE))
    }
}

impl ViewportF {
    /// Bottom-left based viewport covering every cell from `min` to `max` inclusive.
    ///
    /// Dims are `max - min + 1` and therefore at least one on each axis.
    pub(crate) fn from_cell_range(min: Vector2<i32>, max: Vector2<i32>) -> Self {
        let lo = Vector2::<f64>::from(min.min_elem(max));
        let hi = Vector2::<f64>::from(min.max_elem(max));
        Self {
            mode: CornerMode::BottomLeftBased,
            corner: lo,
            dims: hi - lo + Vector2::splat(1.0),
        }
    }
}
