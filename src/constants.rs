//! Crate-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

use image::Rgba;

// ============================================================================
// Drawing Surface
// ============================================================================

/// Surface height as a fraction of its layout width (2:5 aspect)
pub const SURFACE_ASPECT_RATIO: f32 = 0.4;

/// Smallest surface dimension; a zero-width layout still yields a 1x1 buffer
pub const MIN_SURFACE_DIMENSION: u32 = 1;

// ============================================================================
// Ink
// ============================================================================

/// Default stroke width in surface units
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Ink color (opaque black)
pub const INK_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Flattened-export background (opaque white)
pub const EXPORT_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Interactive surface background (fully transparent)
pub const SURFACE_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Disc-stamp spacing along a segment, as a fraction of the stamp radius.
/// Must stay below 1.0 so consecutive stamps overlap into a solid line.
pub const STAMP_SPACING: f32 = 0.25;

// ============================================================================
// Preview Pane
// ============================================================================

/// Default page scale factor for the preview render
pub const DEFAULT_PREVIEW_SCALE: f32 = 1.0;

/// Page scale factor for the high-density preview variant
pub const HIDPI_PREVIEW_SCALE: f32 = 1.5;

// ============================================================================
// PDFium Loader
// ============================================================================

/// Environment variable overriding the PDFium dynamic library directory
pub const PDFIUM_LIB_DIR_ENV: &str = "SIGNPAD_PDFIUM_DIR";

/// Library subdirectory probed next to the working directory and executable
pub const PDFIUM_LIB_SUBDIR: &str = "lib";
