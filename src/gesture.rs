//! Two-phase pan gesture.
//!
//! `begin_translation` snapshots the pixel viewport's anchored corner together
//! with the pointer position that started the drag. Every later `translate`
//! recomputes the corner from that snapshot, so replaying positions in any
//! order never accumulates drift. Starting a new gesture overwrites the old
//! snapshot.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanGesture {
    /// No pan in progress.
    #[default]
    Idle,
    /// A pan started and has not been superseded.
    Translating {
        /// Pixel position where the gesture started.
        origin: Vector2<f64>,
        /// Anchored pixel-viewport corner at the start of the gesture.
        cached_corner: Vector2<f64>,
    },
}

impl PanGesture {
    #[must_use]
    pub fn begin(origin: Vector2<f64>, corner: Vector2<f64>) -> Self {
        Self::Translating { origin, cached_corner: corner }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Translating { .. })
    }

    /// Where the anchored corner goes when the pointer is at `pos`, or `None`
    /// when no gesture has been started.
    #[must_use]
    pub fn target(&self, pos: Vector2<f64>) -> Option<Vector2<f64>> {
        match *self {
            Self::Idle => None,
            Self::Translating { origin, cached_corner } => Some(cached_corner + (pos - origin)),
        }
    }
}
