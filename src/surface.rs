//! The drawing surface - a transparent RGBA buffer the signature is inked onto.
//!
//! The surface's logical size is derived from the host layout width with a
//! fixed 2:5 aspect ratio. Reallocating on resize discards prior ink; ink
//! does not survive a layout resize.
//!
//! Strokes are rendered as antialiased discs stamped along each segment.
//! Stamps overlap at a quarter-radius spacing and write with max-alpha, so
//! revisited pixels never darken and round caps fall out of the disc shape
//! at both segment ends.

use crate::constants::{
    EXPORT_BACKGROUND, INK_COLOR, MIN_SURFACE_DIMENSION, STAMP_SPACING, SURFACE_ASPECT_RATIO,
    SURFACE_BACKGROUND,
};
use crate::types::{Point, point};
use image::{Rgba, RgbaImage};

/// A 2D pixel buffer bound to the signature element's screen region.
pub struct Surface {
    buffer: RgbaImage,
}

impl Surface {
    /// Create a surface sized for the given layout width.
    pub fn new(layout_width: u32) -> Self {
        let (width, height) = Self::size_for(layout_width);
        Self {
            buffer: RgbaImage::from_pixel(width, height, SURFACE_BACKGROUND),
        }
    }

    /// Logical size for a layout width: (W, 0.4 * W), clamped to 1x1.
    pub fn size_for(layout_width: u32) -> (u32, u32) {
        let width = layout_width.max(MIN_SURFACE_DIMENSION);
        let height =
            ((width as f32 * SURFACE_ASPECT_RATIO).round() as u32).max(MIN_SURFACE_DIMENSION);
        (width, height)
    }

    /// Reallocate for a new layout width. Discards all ink.
    pub fn resize(&mut self, layout_width: u32) {
        let (width, height) = Self::size_for(layout_width);
        self.buffer = RgbaImage::from_pixel(width, height, SURFACE_BACKGROUND);
    }

    /// Refill with the transparent background, keeping the current size.
    pub fn clear(&mut self) {
        for pixel in self.buffer.pixels_mut() {
            *pixel = SURFACE_BACKGROUND;
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Borrow the raw buffer (tests and compositing).
    pub fn image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// True when no ink has been laid down since the last clear/resize.
    pub fn is_blank(&self) -> bool {
        self.buffer.pixels().all(|p| p.0[3] == 0)
    }

    /// Draw one round-capped ink segment from `from` to `to`.
    ///
    /// `stroke_width` is the full stroke width; the stamped disc radius is
    /// half of it.
    pub fn stroke_segment(&mut self, from: Point, to: Point, stroke_width: f32) {
        let radius = (stroke_width / 2.0).max(0.5);
        let length = from.distance_to(to);
        let step = (radius * STAMP_SPACING).max(0.1);
        let stamps = (length / step).ceil().max(1.0) as u32;
        for i in 0..=stamps {
            let t = i as f32 / stamps as f32;
            self.stamp_disc(from.lerp(to, t), radius);
        }
    }

    /// Stamp one antialiased disc of ink centered at `center`.
    fn stamp_disc(&mut self, center: Point, radius: f32) {
        let (width, height) = self.size();
        let reach = radius + 0.5;
        let x_min = (center.x - reach).floor().max(0.0) as u32;
        let y_min = (center.y - reach).floor().max(0.0) as u32;
        if center.x + reach < 0.0 || center.y + reach < 0.0 {
            return;
        }
        let x_max = ((center.x + reach).ceil() as i64).min(width as i64 - 1);
        let y_max = ((center.y + reach).ceil() as i64).min(height as i64 - 1);
        if x_max < x_min as i64 || y_max < y_min as i64 {
            return;
        }

        for y in y_min..=y_max as u32 {
            for x in x_min..=x_max as u32 {
                // Coverage from the distance between pixel center and disc edge
                let distance = center.distance_to(point(x as f32 + 0.5, y as f32 + 0.5));
                let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let alpha = (f32::from(INK_COLOR.0[3]) * coverage).round() as u8;
                let existing = self.buffer.get_pixel(x, y);
                // Max-alpha stamping: overlapping stamps never darken a pixel
                if alpha > existing.0[3] {
                    self.buffer.put_pixel(
                        x,
                        y,
                        Rgba([INK_COLOR.0[0], INK_COLOR.0[1], INK_COLOR.0[2], alpha]),
                    );
                }
            }
        }
    }

    /// Composite the surface over opaque white into a new same-size buffer.
    ///
    /// The interactive surface is transparent for display purposes only;
    /// every exported pixel carries full alpha.
    pub fn flatten(&self) -> RgbaImage {
        let mut flattened =
            RgbaImage::from_pixel(self.width(), self.height(), EXPORT_BACKGROUND);
        for (x, y, ink) in self.buffer.enumerate_pixels() {
            let alpha = f32::from(ink.0[3]) / 255.0;
            if alpha <= 0.0 {
                continue;
            }
            let over = |ink_channel: u8, bg_channel: u8| -> u8 {
                (f32::from(ink_channel) * alpha + f32::from(bg_channel) * (1.0 - alpha)).round()
                    as u8
            };
            flattened.put_pixel(
                x,
                y,
                Rgba([
                    over(ink.0[0], EXPORT_BACKGROUND.0[0]),
                    over(ink.0[1], EXPORT_BACKGROUND.0[1]),
                    over(ink.0[2], EXPORT_BACKGROUND.0[2]),
                    255,
                ]),
            );
        }
        flattened
    }
}
