//! Orthogonal ("top view") projection.
//!
//! Each axis is an independent change of frame: normalize the coordinate
//! within the source viewport, then spread it over the destination viewport.
//! The y axis is inverted because tile space grows upward while the screen
//! grows downward. The pixel result is then lifted by one tile so that the
//! origin row of the tile viewport is the bottom visible row.

#[cfg(test)]
#[path = "top_view_test.rs"]
mod top_view_test;

use crate::frame::{Frame, FrameBase, FrameError};
use crate::vector::Vector2;
use crate::viewport::ViewportF;

#[derive(Debug, Clone, PartialEq)]
pub struct TopViewFrame {
    base: FrameBase,
}

impl TopViewFrame {
    /// # Errors
    ///
    /// Returns [`FrameError::DegenerateScale`] when the viewport ratio is not usable.
    pub fn new(tiles: ViewportF, pixels: ViewportF) -> Result<Self, FrameError> {
        let base = FrameBase::new(tiles, pixels)?;
        tracing::info!(
            tiles = %tiles.dims(),
            pixels = %pixels.dims(),
            "top view frame created"
        );
        Ok(Self { base })
    }
}

impl Frame for TopViewFrame {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn tile_to_pixel(&self, tile: Vector2<f64>) -> Vector2<f64> {
        let (tiles, pixels) = (self.base.tiles(), self.base.pixels());
        let (t_origin, p_origin) = (tiles.bottom_left(), pixels.bottom_left());
        let (t_dims, p_dims) = (tiles.dims(), pixels.dims());

        let x = change_axis(tile.x, false, t_origin.x, t_dims.x, p_origin.x, p_dims.x);
        let y = change_axis(tile.y, true, t_origin.y, t_dims.y, p_origin.y, p_dims.y);
        Vector2::new(x, y - self.base.scale().y)
    }

    fn pixel_to_tile(&self, pixel: Vector2<f64>) -> Vector2<f64> {
        let (tiles, pixels) = (self.base.tiles(), self.base.pixels());
        let (t_origin, p_origin) = (tiles.bottom_left(), pixels.bottom_left());
        let (t_dims, p_dims) = (tiles.dims(), pixels.dims());

        let py = pixel.y + self.base.scale().y;
        let x = change_axis(pixel.x, false, p_origin.x, p_dims.x, t_origin.x, t_dims.x);
        let y = change_axis(py, true, p_origin.y, p_dims.y, t_origin.y, t_dims.y);
        Vector2::new(x, y)
    }
}

/// Map one coordinate from a source span onto a destination span.
///
/// With `invert`, the coordinate is measured from the source origin in the
/// opposite direction.
fn change_axis(value: f64, invert: bool, src_origin: f64, src_len: f64, dst_origin: f64, dst_len: f64) -> f64 {
    let offset = if invert { src_origin - value } else { value - src_origin };
    dst_origin + offset / src_len * dst_len
}
