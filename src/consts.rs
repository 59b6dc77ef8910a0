//! Shared numeric constants for the coordinate frames.

use crate::vector::Vector2;

// ── Zoom ────────────────────────────────────────────────────────

/// Tile viewport scale applied by a default zoom-in (halves the visible extent).
pub const ZOOM_IN_FACTOR: f64 = 0.5;

/// Tile viewport scale applied by a default zoom-out (doubles the visible extent).
pub const ZOOM_OUT_FACTOR: f64 = 2.0;

// ── Isometric projection ────────────────────────────────────────

/// Diagonal tilt of the isometric grid, in degrees.
pub const ISO_ANGLE_DEG: f64 = 45.0;

/// Vertical compression flattening the isometric diamonds.
pub const ISO_COMPRESSION: f64 = 0.5;

/// Smallest determinant magnitude accepted for a projection matrix.
pub const SINGULARITY_TOLERANCE: f64 = 1e-6;

// ── Default viewports ───────────────────────────────────────────

/// Tile extent shown by a freshly configured frame.
pub const DEFAULT_TILE_DIMS: Vector2<f64> = Vector2::new(20.0, 15.0);

/// Pixel extent of a freshly configured frame.
pub const DEFAULT_PIXEL_DIMS: Vector2<f64> = Vector2::new(800.0, 600.0);
