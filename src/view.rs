//! Runtime choice of projection.
//!
//! `ViewFrame` wraps either concrete frame so callers that pick the projection
//! from configuration can hold one value and use the full [`Frame`] API on it.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

use crate::frame::{Frame, FrameBase};
use crate::isometric::IsometricViewFrame;
use crate::top_view::TopViewFrame;
use crate::vector::Vector2;

/// Which projection a frame uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    #[default]
    TopView,
    Isometric,
}

impl ProjectionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopView => "top_view",
            Self::Isometric => "isometric",
        }
    }
}

impl std::fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top_view" => Ok(Self::TopView),
            "isometric" => Ok(Self::Isometric),
            other => Err(format!("unknown projection '{other}' (expected 'top_view' or 'isometric')")),
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ViewFrame {
    TopView(TopViewFrame),
    Isometric(IsometricViewFrame),
}

impl ViewFrame {
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Self::TopView(_) => ProjectionKind::TopView,
            Self::Isometric(_) => ProjectionKind::Isometric,
        }
    }
}

impl From<TopViewFrame> for ViewFrame {
    fn from(frame: TopViewFrame) -> Self {
        Self::TopView(frame)
    }
}

impl From<IsometricViewFrame> for ViewFrame {
    fn from(frame: IsometricViewFrame) -> Self {
        Self::Isometric(frame)
    }
}

impl Frame for ViewFrame {
    fn base(&self) -> &FrameBase {
        match self {
            Self::TopView(f) => f.base(),
            Self::Isometric(f) => f.base(),
        }
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        match self {
            Self::TopView(f) => f.base_mut(),
            Self::Isometric(f) => f.base_mut(),
        }
    }

    fn tile_to_pixel(&self, tile: Vector2<f64>) -> Vector2<f64> {
        match self {
            Self::TopView(f) => f.tile_to_pixel(tile),
            Self::Isometric(f) => f.tile_to_pixel(tile),
        }
    }

    fn pixel_to_tile(&self, pixel: Vector2<f64>) -> Vector2<f64> {
        match self {
            Self::TopView(f) => f.pixel_to_tile(pixel),
            Self::Isometric(f) => f.pixel_to_tile(pixel),
        }
    }
}
