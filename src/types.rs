//! Shared geometry types for the signing-page widgets.

use serde::{Deserialize, Serialize};

/// A position in 2D space, in logical pixels.
///
/// Used for both surface-local coordinates (origin at the drawing surface's
/// top-left) and viewport coordinates (origin at the page's top-left); the
/// `input::coords` module converts between the two.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor for [`Point`].
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Point {
    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation between `self` and `other` at parameter `t` in [0, 1].
    #[inline]
    pub fn lerp(&self, other: Point, t: f32) -> Point {
        point(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}
