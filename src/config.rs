//! Frame configuration parsed from environment variables or JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PIXEL_DIMS, DEFAULT_TILE_DIMS};
use crate::frame::{Frame, FrameError};
use crate::isometric::{IsometricParams, IsometricViewFrame};
use crate::top_view::TopViewFrame;
use crate::vector::Vector2;
use crate::view::{ProjectionKind, ViewFrame};
use crate::viewport::{CornerMode, Viewport, ViewportError, ViewportF};

pub const ENV_PROJECTION: &str = "TILEFRAME_PROJECTION";
pub const ENV_TILES: &str = "TILEFRAME_TILES";
pub const ENV_PIXELS: &str = "TILEFRAME_PIXELS";
pub const ENV_ISO_ANGLE_DEG: &str = "TILEFRAME_ISO_ANGLE_DEG";
pub const ENV_ISO_COMPRESSION: &str = "TILEFRAME_ISO_COMPRESSION";
pub const ENV_FIXED: &str = "TILEFRAME_FIXED";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// One viewport as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSpec {
    #[serde(default)]
    pub corner: Vector2<f64>,
    pub dims: Vector2<f64>,
    #[serde(default)]
    pub mode: CornerMode,
}

impl ViewportSpec {
    /// # Errors
    ///
    /// Returns [`ViewportError::NonPositiveDims`] for unusable dims.
    pub fn viewport(&self) -> Result<ViewportF, ViewportError> {
        Viewport::with_mode(self.corner, self.dims, self.mode)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub projection: ProjectionKind,
    pub tiles: ViewportSpec,
    pub pixels: ViewportSpec,
    pub isometric: IsometricParams,
    pub fixed: bool,
}

impl Default for FrameConfig {
    /// 20x15 tiles on an 800x600 screen, top view, not fixed.
    fn default() -> Self {
        Self {
            projection: ProjectionKind::TopView,
            tiles: ViewportSpec {
                corner: Vector2::default(),
                dims: DEFAULT_TILE_DIMS,
                mode: CornerMode::BottomLeftBased,
            },
            pixels: ViewportSpec {
                corner: Vector2::default(),
                dims: DEFAULT_PIXEL_DIMS,
                mode: CornerMode::TopLeftBased,
            },
            isometric: IsometricParams::default(),
            fixed: false,
        }
    }
}

impl FrameConfig {
    /// Build frame config from environment variables.
    ///
    /// All optional:
    /// - `TILEFRAME_PROJECTION`: `top_view` (default) or `isometric`
    /// - `TILEFRAME_TILES`: `x,y,w,h`, bottom-left based (default `0,0,20,15`)
    /// - `TILEFRAME_PIXELS`: `x,y,w,h`, top-left based (default `0,0,800,600`)
    /// - `TILEFRAME_ISO_ANGLE_DEG`: default 45
    /// - `TILEFRAME_ISO_COMPRESSION`: default 0.5
    /// - `TILEFRAME_FIXED`: `true` or `false` (default)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for unknown projections, malformed
    /// numbers or non-unicode values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Same as [`FrameConfig::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`FrameConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = read_var(&lookup, ENV_PROJECTION)? {
            cfg.projection = raw
                .trim()
                .parse()
                .map_err(|e: String| ConfigError::Parse(format!("{ENV_PROJECTION}: {e}")))?;
        }
        if let Some(raw) = read_var(&lookup, ENV_TILES)? {
            (cfg.tiles.corner, cfg.tiles.dims) = parse_rect(ENV_TILES, &raw)?;
        }
        if let Some(raw) = read_var(&lookup, ENV_PIXELS)? {
            (cfg.pixels.corner, cfg.pixels.dims) = parse_rect(ENV_PIXELS, &raw)?;
        }
        if let Some(raw) = read_var(&lookup, ENV_ISO_ANGLE_DEG)? {
            cfg.isometric.angle_deg = parse_f64(ENV_ISO_ANGLE_DEG, &raw)?;
        }
        if let Some(raw) = read_var(&lookup, ENV_ISO_COMPRESSION)? {
            cfg.isometric.compression = parse_f64(ENV_ISO_COMPRESSION, &raw)?;
        }
        if let Some(raw) = read_var(&lookup, ENV_FIXED)? {
            cfg.fixed = parse_bool(ENV_FIXED, &raw)?;
        }

        Ok(cfg)
    }

    /// Parse a JSON document. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the document does not match.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Construct the configured frame.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Frame`] when a viewport, the scale or the
    /// isometric projection is invalid.
    pub fn build(&self) -> Result<ViewFrame, ConfigError> {
        let tiles = self.tiles.viewport().map_err(FrameError::from)?;
        let pixels = self.pixels.viewport().map_err(FrameError::from)?;

        let mut frame: ViewFrame = match self.projection {
            ProjectionKind::TopView => TopViewFrame::new(tiles, pixels)?.into(),
            ProjectionKind::Isometric => IsometricViewFrame::with_params(tiles, pixels, self.isometric)?.into(),
        };
        frame.base_mut().set_fixed(self.fixed);

        tracing::info!(projection = %self.projection, fixed = self.fixed, "frame built from config");
        Ok(frame)
    }
}

fn read_var<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::Parse(format!("{key}: value is not valid unicode"))),
    }
}

fn parse_f64(key: &str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ConfigError::Parse(format!("{key}: '{raw}' is not a number ({e})")))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfigError::Parse(format!("{key}: expected 'true' or 'false', got '{other}'"))),
    }
}

/// Parse `x,y,w,h` into a corner and dims.
fn parse_rect(key: &str, raw: &str) -> Result<(Vector2<f64>, Vector2<f64>), ConfigError> {
    let parts = raw.split(',').map(|p| parse_f64(key, p)).collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [x, y, w, h] => Ok((Vector2::new(x, y), Vector2::new(w, h))),
        _ => Err(ConfigError::Parse(format!("{key}: expected 'x,y,w,h', got '{raw}'"))),
    }
}
