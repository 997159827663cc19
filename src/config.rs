//! Widget configuration.
//!
//! Deployments of these widgets differ only in touch support and preview
//! scale; both knobs live here so a single component serves every page.
//! Hosts can embed options as a JSON page attribute and parse
//! them with [`PadOptions::from_json`] / [`PreviewOptions::from_json`];
//! unknown fields are ignored and missing fields fall back to defaults.

use crate::constants::{DEFAULT_PREVIEW_SCALE, DEFAULT_STROKE_WIDTH};
use serde::{Deserialize, Serialize};

/// Options for the signature pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadOptions {
    /// Stroke width in surface units
    pub stroke_width: f32,
    /// Whether touch input may be wired when the device supports it.
    /// When false the pad always listens for pointer events.
    pub touch_input: bool,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            touch_input: true,
        }
    }
}

impl PadOptions {
    /// Parse options from a JSON page attribute.
    pub fn from_json(attr: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(attr)
    }
}

/// Options for the document preview pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    /// Page scale factor applied when rasterizing (1.0, or 1.5 for the
    /// high-density variant)
    pub scale: f32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_PREVIEW_SCALE,
        }
    }
}

impl PreviewOptions {
    /// Parse options from a JSON page attribute.
    pub fn from_json(attr: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(attr)
    }
}
