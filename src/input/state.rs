//! Stroke state machine - tracks the stroke in progress.
//!
//! This replaces a scattered `drawing` boolean plus implicit path head with
//! a single explicit state machine, making impossible states (a path head
//! without an active stroke) unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Stroking     (pointer-down / touch-start; anchors the head)
//! Stroking -> Stroking     (pointer-move / touch-move; advances the head)
//! Stroking -> Idle         (pointer-up / touch-end; drops the head so the
//!                           next stroke is a disconnected subpath)
//! ```
//!
//! Re-entering `Stroking` while already stroking simply re-anchors the head;
//! begin is idempotent.

use crate::types::Point;

/// The signature pad's stroke state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    /// No stroke in progress
    Idle,

    /// A stroke is being drawn
    Stroking {
        /// Current path head; the next segment starts here
        head: Point,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    /// Returns true while a stroke is in progress
    pub fn is_stroking(&self) -> bool {
        matches!(self, Self::Stroking { .. })
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Current path head, if a stroke is in progress
    pub fn head(&self) -> Option<Point> {
        match self {
            Self::Stroking { head } => Some(*head),
            Self::Idle => None,
        }
    }

    /// Begin (or re-anchor) a stroke at `position`
    pub fn begin(&mut self, position: Point) {
        *self = Self::Stroking { head: position };
    }

    /// Advance the path head. No-op when idle.
    pub fn advance(&mut self, position: Point) {
        if let Self::Stroking { head } = self {
            *head = position;
        }
    }

    /// End the stroke and drop the head.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
