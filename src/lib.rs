//! Coordinate frames for a 2-D tile world.
//!
//! A frame maps between continuous tile coordinates and device pixels under
//! a pluggable projection (orthogonal top view or isometric), and owns the
//! pan/zoom state that keeps both sides consistent. Rendering, sprites and
//! input dispatch live elsewhere; they only ever call into a [`frame::Frame`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`vector`] | `Vector2<T>` and the `Coordinate` numeric trait |
//! | [`viewport`] | Axis-aligned window with configurable corner semantics |
//! | [`matrix`] | 2x2 matrices for the isometric transform |
//! | [`frame`] | The `Frame` contract: anchors, picking, visible cells, zoom, pan |
//! | [`gesture`] | Pan gesture state machine |
//! | [`top_view`] | Orthogonal projection |
//! | [`isometric`] | Rotated and compressed projection with cached inverse |
//! | [`view`] | `ViewFrame`: projection chosen at runtime |
//! | [`config`] | Frame configuration from environment or JSON |
//! | [`consts`] | Shared numeric constants (zoom factors, default viewports, etc.) |

pub mod config;
pub mod consts;
pub mod frame;
pub mod gesture;
pub mod isometric;
pub mod matrix;
pub mod top_view;
pub mod vector;
pub mod view;
pub mod viewport;

pub use config::{ConfigError, FrameConfig};
pub use frame::{Frame, FrameError, TileLocation, TilePick};
pub use isometric::{IsometricParams, IsometricViewFrame};
pub use top_view::TopViewFrame;
pub use vector::Vector2;
pub use view::{ProjectionKind, ViewFrame};
pub use viewport::{CornerMode, Viewport, ViewportError, ViewportF, ViewportI};
