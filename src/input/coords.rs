//! Coordinate conversion utilities for signature capture.
//!
//! This module provides centralized coordinate conversion functions so the
//! two event families share one set of formulas. Pointer events already
//! carry surface-local offsets; touch events carry viewport (client)
//! coordinates and must be rebased against the surface element's current
//! viewport origin.

use crate::types::Point;

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateContext {
    /// Viewport-relative origin of the surface element (its bounding box
    /// top-left, as last reported by the host layout)
    pub surface_origin: Point,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(surface_origin: Point) -> Self {
        Self { surface_origin }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Pointer events report offsets relative to the surface already.
    #[inline]
    pub fn pointer_to_surface(offset: Point) -> Point {
        offset
    }

    /// Map a touch point's viewport coordinates into surface-local space.
    #[inline]
    pub fn touch_to_surface(client: Point, ctx: &CoordinateContext) -> Point {
        client - ctx.surface_origin
    }
}
