//! Pointer and touch input handling for the signature pad.
//!
//! This module implements the event side of signature capture: choosing an
//! input family once at construction, translating device coordinates into
//! surface-local space, and tracking the stroke in progress.
//!
//! ## Architecture
//!
//! The capture logic uses an explicit state machine (`InputState`) for the
//! stroke in progress. This replaces a scattered drawing flag plus implicit
//! path head and makes impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Stroke state machine enum and helper methods
//! - `mode` - Input family selection from a one-shot capability probe
//! - `events` - Pointer/touch event types and the dispatch envelope
//! - `coords` - Device-to-surface coordinate conversion

pub mod coords;
mod events;
mod mode;
mod state;

pub use events::{DefaultAction, InputEvent, PointerEvent, TouchEvent};
pub use mode::{DeviceCapabilities, InputMode};
pub use state::InputState;
