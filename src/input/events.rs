//! Event types the host feeds into the signature pad.
//!
//! The pad is headless: the hosting shell owns the real event loop and
//! forwards each device event as an [`InputEvent`]. Dispatch returns a
//! [`DefaultAction`] telling the host whether the platform's default
//! gesture (scroll/pan during a touch move) must be suppressed.

use crate::types::Point;

/// A pointer event, carrying surface-local offset coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position relative to the surface element's top-left
    pub offset: Point,
}

impl PointerEvent {
    pub fn new(offset: Point) -> Self {
        Self { offset }
    }
}

/// A touch event, carrying viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// First touch point, relative to the viewport's top-left
    pub client: Point,
}

impl TouchEvent {
    pub fn new(client: Point) -> Self {
        Self { client }
    }
}

/// Envelope for everything the pad can receive from the host event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp,
    TouchStart(TouchEvent),
    TouchMove(TouchEvent),
    TouchEnd,
}

/// What the host should do with the platform's default gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    /// Let the platform handle the event normally
    Allow,
    /// Cancel the default scroll/pan gesture (touch move while inking)
    Prevent,
}
