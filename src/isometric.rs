//! Isometric projection.
//!
//! Same normalize/denormalize scheme as the top view, with a 2x2 linear
//! transform in between: `normalized_pixel = world_to_pixel * normalized_tile`.
//! `world_to_pixel` is `rotation(angle) * scale(1, compression)`, which tilts
//! the grid and flattens it into diamonds. Both it and its inverse are built
//! once at construction; picking runs on every pointer move and only ever
//! multiplies by the cached inverse.
//!
//! The y inversion and the one-row lift of the top view apply after the
//! matrix.

#[cfg(test)]
#[path = "isometric_test.rs"]
mod isometric_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ISO_ANGLE_DEG, ISO_COMPRESSION, SINGULARITY_TOLERANCE};
use crate::frame::{Frame, FrameBase, FrameError};
use crate::matrix::Mat2;
use crate::vector::Vector2;
use crate::viewport::ViewportF;

/// Shape of the isometric grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsometricParams {
    /// Grid tilt in degrees.
    pub angle_deg: f64,
    /// Vertical compression applied before the tilt.
    pub compression: f64,
}

impl Default for IsometricParams {
    fn default() -> Self {
        Self { angle_deg: ISO_ANGLE_DEG, compression: ISO_COMPRESSION }
    }
}

impl IsometricParams {
    /// The forward (tile to pixel) transform.
    #[must_use]
    pub fn world_to_pixel(&self) -> Mat2 {
        Mat2::rotation(self.angle_deg.to_radians()) * Mat2::scale(1.0, self.compression)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IsometricViewFrame {
    base: FrameBase,
    params: IsometricParams,
    world_to_pixel: Mat2,
    pixel_to_world: Mat2,
}

impl IsometricViewFrame {
    /// Isometric frame with the default tilt and compression.
    ///
    /// # Errors
    ///
    /// See [`IsometricViewFrame::with_params`].
    pub fn new(tiles: ViewportF, pixels: ViewportF) -> Result<Self, FrameError> {
        Self::with_params(tiles, pixels, IsometricParams::default())
    }

    /// # Errors
    ///
    /// Returns [`FrameError::SingularProjection`] when the transform built from
    /// `params` is not finite or too close to singular to invert, and
    /// [`FrameError::DegenerateScale`] when the viewport ratio is not usable.
    pub fn with_params(tiles: ViewportF, pixels: ViewportF, params: IsometricParams) -> Result<Self, FrameError> {
        let world_to_pixel = params.world_to_pixel();
        let pixel_to_world = world_to_pixel
            .inverse(SINGULARITY_TOLERANCE)
            .ok_or(FrameError::SingularProjection { det: world_to_pixel.determinant() })?;
        let base = FrameBase::new(tiles, pixels)?;

        tracing::info!(
            angle_deg = params.angle_deg,
            compression = params.compression,
            tiles = %tiles.dims(),
            pixels = %pixels.dims(),
            "isometric frame created"
        );
        Ok(Self { base, params, world_to_pixel, pixel_to_world })
    }

    #[must_use]
    pub fn params(&self) -> IsometricParams {
        self.params
    }

    #[must_use]
    pub fn world_to_pixel(&self) -> Mat2 {
        self.world_to_pixel
    }

    #[must_use]
    pub fn pixel_to_world(&self) -> Mat2 {
        self.pixel_to_world
    }
}

impl Frame for IsometricViewFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn tile_to_pixel(&self, tile: Vector2<f64>) -> Vector2<f64> {
        let (tiles, pixels) = (self.base.tiles(), self.base.pixels());
        let origin = pixels.bottom_left();
        let dims = pixels.dims();

        let normalized = (tile - tiles.bottom_left()).div_elem(tiles.dims());
        let projected = self.world_to_pixel * normalized;

        Vector2::new(
            origin.x + projected.x * dims.x,
            origin.y - projected.y * dims.y - self.base.scale().y,
        )
    }

    fn pixel_to_tile(&self, pixel: Vector2<f64>) -> Vector2<f64> {
        let (tiles, pixels) = (self.base.tiles(), self.base.pixels());
        let origin = pixels.bottom_left();
        let dims = pixels.dims();

        let projected = Vector2::new(
            (pixel.x - origin.x) / dims.x,
            (origin.y - pixel.y - self.base.scale().y) / dims.y,
        );
        let normalized = self.pixel_to_world * projected;

        tiles.bottom_left() + normalized.mul_elem(tiles.dims())
    }
}
