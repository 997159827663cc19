//! Input family selection.
//!
//! Exactly one event family is wired per session. The choice is made once
//! at construction from a capability probe, never re-evaluated per event;
//! on a device that supports both families, only the detected one receives
//! handlers.

/// What the hosting environment reported about the input device.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceCapabilities {
    /// Whether the environment exposes touch events at all
    /// (the `ontouchstart` probe)
    pub touch_events: bool,
    /// Maximum number of simultaneous touch points
    pub max_touch_points: u32,
}

impl DeviceCapabilities {
    /// A plain pointer device (desktop mouse).
    pub fn pointer_only() -> Self {
        Self::default()
    }

    /// A touch screen reporting `points` simultaneous contacts.
    pub fn touch(points: u32) -> Self {
        Self {
            touch_events: true,
            max_touch_points: points,
        }
    }
}

/// The event family wired for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    Touch,
}

impl InputMode {
    /// Static capability check: touch wins when either probe fires.
    pub fn detect(caps: &DeviceCapabilities) -> Self {
        if caps.touch_events || caps.max_touch_points > 0 {
            Self::Touch
        } else {
            Self::Pointer
        }
    }
}
