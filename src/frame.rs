//! The coordinate frame contract shared by every projection.
//!
//! A frame owns two viewports: the tile viewport (what part of the world is
//! visible, in tiles) and the pixel viewport (where it lands on the device).
//! Their dims ratio is the per-axis tile-to-pixel scale, cached in
//! [`FrameBase`] and recomputed at the end of every mutating call.
//!
//! Zoom changes only the tile viewport: the pixel footprint stays put and more
//! or fewer tiles are squeezed into it. Pan changes only the pixel viewport.
//!
//! The actual mapping is projection specific. Implementors of [`Frame`]
//! provide the two continuous maps (tile to pixel at the `TopLeft` anchor, and
//! its exact inverse); anchors, flooring, visible cells, zoom and pan are
//! provided on top of them.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::gesture::PanGesture;
use crate::vector::Vector2;
use crate::viewport::{ViewportError, ViewportF};

/// Error returned by frame construction and mutation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    /// A viewport was built or scaled to unusable dims.
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    /// The tile-to-pixel scale would not be finite and positive.
    #[error("degenerate tile-to-pixel scale ({x}, {y})")]
    DegenerateScale { x: f64, y: f64 },
    /// The projection matrix cannot be inverted.
    #[error("projection matrix is singular (determinant {det})")]
    SingularProjection { det: f64 },
    /// Zoom factors must be finite and strictly positive.
    #[error("invalid zoom factor {0}")]
    InvalidZoomFactor(f64),
    /// `translate` was called without a preceding `begin_translation`.
    #[error("translate called without an active translation")]
    NoActiveTranslation,
    /// A pointer position, or a corner derived from it, is NaN or infinite.
    #[error("non-finite position ({x}, {y})")]
    NonFinitePosition { x: f64, y: f64 },
    /// A tile-space position has no `i32` cell.
    #[error("tile position ({x}, {y}) is outside the cell range")]
    TileOutOfRange { x: f64, y: f64 },
}

fn ensure_finite(p: Vector2<f64>) -> Result<Vector2<f64>, FrameError> {
    if !p.is_finite() {
        return Err(FrameError::NonFinitePosition { x: p.x, y: p.y });
    }
    Ok(p)
}

/// Named anchor within a tile cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileLocation {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    RightCenter,
    BottomRight,
    BottomCenter,
    BottomLeft,
    LeftCenter,
}

impl TileLocation {
    /// Offset from the top-left anchor, in fractions of one tile.
    #[must_use]
    pub fn offset(self) -> Vector2<f64> {
        match self {
            Self::TopLeft => Vector2::new(0.0, 0.0),
            Self::TopCenter => Vector2::new(0.5, 0.0),
            Self::TopRight => Vector2::new(1.0, 0.0),
            Self::RightCenter => Vector2::new(1.0, 0.5),
            Self::BottomRight => Vector2::new(1.0, 1.0),
            Self::BottomCenter => Vector2::new(0.5, 1.0),
            Self::BottomLeft => Vector2::new(0.0, 1.0),
            Self::LeftCenter => Vector2::new(0.0, 0.5),
        }
    }
}

/// A pixel resolved to its enclosing tile cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TilePick {
    /// Enclosing cell, floored toward negative infinity.
    pub tile: Vector2<i32>,
    /// Position within the cell, each component in `[0, 1)`.
    pub intra: Vector2<f64>,
}

impl TilePick {
    /// Split a continuous tile-space position into cell and remainder.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::TileOutOfRange`] when the floored position is NaN
    /// or does not fit in `i32`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_position(position: Vector2<f64>) -> Result<Self, FrameError> {
        let cell = position.floor();
        let cells = f64::from(i32::MIN)..=f64::from(i32::MAX);
        if !(cells.contains(&cell.x) && cells.contains(&cell.y)) {
            return Err(FrameError::TileOutOfRange { x: position.x, y: position.y });
        }
        // Range checked above, the casts are exact.
        Ok(Self {
            tile: Vector2::new(cell.x as i32, cell.y as i32),
            intra: position - cell,
        })
    }

    /// The continuous tile-space position this pick was made from.
    #[must_use]
    pub fn position(&self) -> Vector2<f64> {
        Vector2::<f64>::from(self.tile) + self.intra
    }
}

/// State shared by every projection: both viewports, the cached scale, the
/// pan gesture and the fixed flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBase {
    tiles: ViewportF,
    pixels: ViewportF,
    scale: Vector2<f64>,
    gesture: PanGesture,
    fixed: bool,
}

impl FrameBase {
    /// # Errors
    ///
    /// Returns [`FrameError::DegenerateScale`] if the dims ratio overflows or underflows.
    pub fn new(tiles: ViewportF, pixels: ViewportF) -> Result<Self, FrameError> {
        let scale = scale_between(&tiles, &pixels)?;
        tracing::debug!("1 tile = {scale} pixel(s)");
        Ok(Self { tiles, pixels, scale, gesture: PanGesture::Idle, fixed: false })
    }

    #[must_use]
    pub fn tiles(&self) -> &ViewportF {
        &self.tiles
    }

    #[must_use]
    pub fn pixels(&self) -> &ViewportF {
        &self.pixels
    }

    /// Pixels per tile unit, per axis.
    #[must_use]
    pub fn scale(&self) -> Vector2<f64> {
        self.scale
    }

    #[must_use]
    pub fn gesture(&self) -> PanGesture {
        self.gesture
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
    }

    /// Relocate the tile viewport around `focus` and scale it by `factor`.
    ///
    /// The new bottom-left is `focus + (bottom_left - focus) * factor`. Nothing
    /// is modified when the new corner, the scaled viewport or the resulting
    /// scale is invalid.
    fn rescale_tiles(&mut self, focus: Vector2<f64>, factor: f64) -> Result<(), FrameError> {
        let mut tiles = self.tiles;
        let relocated = ensure_finite(focus + (tiles.bottom_left() - focus) * factor)?;
        tiles.scale(factor, factor)?;
        tiles.move_bottom_left(relocated);

        let scale = scale_between(&tiles, &self.pixels)?;
        self.tiles = tiles;
        self.scale = scale;
        tracing::debug!("1 tile = {scale} pixel(s)");
        Ok(())
    }

    /// Shift the tile viewport by `delta` tiles without resizing it.
    fn shift_tiles(&mut self, delta: Vector2<f64>) {
        let bottom_left = self.tiles.bottom_left();
        self.tiles.move_bottom_left(bottom_left + delta);
    }

    fn begin_translation(&mut self, origin: Vector2<f64>) {
        self.gesture = PanGesture::begin(origin, self.pixels.primary_corner());
    }

    fn translate(&mut self, pos: Vector2<f64>) -> Result<(), FrameError> {
        let corner = self.gesture.target(pos).ok_or(FrameError::NoActiveTranslation)?;
        self.pixels.move_to(ensure_finite(corner)?);
        Ok(())
    }
}

fn scale_between(tiles: &ViewportF, pixels: &ViewportF) -> Result<Vector2<f64>, FrameError> {
    let scale = pixels.dims().div_elem(tiles.dims());
    if !scale.is_positive() {
        return Err(FrameError::DegenerateScale { x: scale.x, y: scale.y });
    }
    Ok(scale)
}

/// Public contract of a coordinate frame.
///
/// Implementors supply the two continuous maps; everything else is provided.
pub trait Frame {
    fn base(&self) -> &FrameBase;

    fn base_mut(&mut self) -> &mut FrameBase;

    /// Pixel position of the `TopLeft` anchor of a tile-space point.
    fn tile_to_pixel(&self, tile: Vector2<f64>) -> Vector2<f64>;

    /// Continuous tile-space position of a pixel. Exact inverse of
    /// [`Frame::tile_to_pixel`].
    fn pixel_to_tile(&self, pixel: Vector2<f64>) -> Vector2<f64>;

    /// Pixels per one tile unit, per axis.
    fn tiles_to_pixels(&self) -> Vector2<f64> {
        self.base().scale()
    }

    fn tile_viewport(&self) -> &ViewportF {
        self.base().tiles()
    }

    fn pixel_viewport(&self) -> &ViewportF {
        self.base().pixels()
    }

    /// Pixel position of the tile `(x, y)` at the given anchor.
    fn tile_coords_to_pixels(&self, x: f64, y: f64, location: TileLocation) -> Vector2<f64> {
        self.tile_pos_to_pixels(Vector2::new(x, y), location)
    }

    fn tile_pos_to_pixels(&self, tile: Vector2<f64>, location: TileLocation) -> Vector2<f64> {
        let anchor = self.tile_to_pixel(tile);
        anchor + location.offset().mul_elem(self.tiles_to_pixels())
    }

    /// Resolve the pixel `(px, py)` to its tile cell and intra-tile offset.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::TileOutOfRange`] when the pixel lands outside
    /// the `i32` cell range or is not finite.
    fn pixel_coords_to_tiles(&self, px: f64, py: f64) -> Result<TilePick, FrameError> {
        let pixel = Vector2::new(px, py);
        let position = self.pixel_to_tile(pixel);
        let pick = TilePick::from_position(position)?;
        tracing::trace!(%pixel, %position, tile = %pick.tile, "pixel to tile");
        Ok(pick)
    }

    /// Cell under `pixel`, without the intra-tile offset.
    ///
    /// # Errors
    ///
    /// See [`Frame::pixel_coords_to_tiles`].
    fn pixel_pos_to_tile(&self, pixel: Vector2<f64>) -> Result<Vector2<i32>, FrameError> {
        Ok(self.pixel_coords_to_tiles(pixel.x, pixel.y)?.tile)
    }

    /// Tile cells under the screen area `[(0, 0), pixels.dims]`.
    ///
    /// The screen area stays put while panning moves the tiles under it. Its
    /// four corners are resolved to cells and the inclusive range between the
    /// smallest and largest is returned as a viewport with dims `max - min + 1`.
    /// Iterate it as `bottom_left..top_right` with an exclusive upper bound.
    /// The range can include one row or column lying just past a screen edge.
    ///
    /// # Errors
    ///
    /// See [`Frame::pixel_coords_to_tiles`].
    fn cells_viewport(&self) -> Result<ViewportF, FrameError> {
        let dims = self.pixel_viewport().dims();
        let screen = [Vector2::new(0.0, 0.0), Vector2::new(dims.x, 0.0), Vector2::new(0.0, dims.y), dims];

        let first = self.pixel_pos_to_tile(screen[0])?;
        let (mut min, mut max) = (first, first);
        for corner in &screen[1..] {
            let cell = self.pixel_pos_to_tile(*corner)?;
            min = min.min_elem(cell);
            max = max.max_elem(cell);
        }
        Ok(ViewportF::from_cell_range(min, max))
    }

    /// Zoom in around `pos` by the default factor.
    ///
    /// # Errors
    ///
    /// See [`Frame::zoom`].
    fn zoom_in(&mut self, pos: Vector2<f64>) -> Result<(), FrameError> {
        self.zoom(pos, ZOOM_IN_FACTOR)
    }

    /// Zoom out around `pos` by the default factor.
    ///
    /// # Errors
    ///
    /// See [`Frame::zoom`].
    fn zoom_out(&mut self, pos: Vector2<f64>) -> Result<(), FrameError> {
        self.zoom(pos, ZOOM_OUT_FACTOR)
    }

    /// Scale the tile viewport by `factor`, keeping the tile under `pos` fixed.
    ///
    /// A factor below one zooms in, above one zooms out. The pixel viewport is
    /// untouched. Fixed frames accept the call and stay as they are.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidZoomFactor`] for non-finite or non-positive
    /// factors, [`FrameError::NonFinitePosition`] for a NaN or infinite `pos`,
    /// and a viewport or scale error when the result would be degenerate. The
    /// frame is unchanged on error.
    fn zoom(&mut self, pos: Vector2<f64>, factor: f64) -> Result<(), FrameError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(FrameError::InvalidZoomFactor(factor));
        }
        ensure_finite(pos)?;
        if self.base().is_fixed() {
            tracing::trace!(factor, "zoom ignored on fixed frame");
            return Ok(());
        }

        let saved = self.base().clone();
        let focus = ensure_finite(self.pixel_to_tile(pos))?;
        self.base_mut().rescale_tiles(focus, factor)?;

        // The row correction is a constant tile-space shift; it does not scale
        // with the viewport, so re-anchor on what is left over.
        let drift = self.pixel_to_tile(pos) - focus;
        if let Err(err) = ensure_finite(drift) {
            *self.base_mut() = saved;
            return Err(err);
        }
        self.base_mut().shift_tiles(-drift);
        Ok(())
    }

    /// Start a pan gesture at pixel `origin`, replacing any gesture in flight.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::NonFinitePosition`] for a NaN or infinite origin.
    fn begin_translation(&mut self, origin: Vector2<f64>) -> Result<(), FrameError> {
        ensure_finite(origin)?;
        if self.base().is_fixed() {
            tracing::trace!(%origin, "pan ignored on fixed frame");
            return Ok(());
        }
        self.base_mut().begin_translation(origin);
        Ok(())
    }

    /// Move the pixel viewport so the gesture origin follows the pointer to `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::NoActiveTranslation`] when no gesture was started
    /// and [`FrameError::NonFinitePosition`] when `pos` or the resulting corner
    /// is NaN or infinite.
    fn translate(&mut self, pos: Vector2<f64>) -> Result<(), FrameError> {
        ensure_finite(pos)?;
        if self.base().is_fixed() {
            return Ok(());
        }
        self.base_mut().translate(pos)
    }
}
