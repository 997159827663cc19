//! Flattened signature export.
//!
//! A save request composites the drawing surface over opaque white, encodes
//! the result as a lossless PNG, and wraps it in a `data:image/png;base64,`
//! URI suitable for a hidden form field. The artifact is built fresh on
//! every save and never cached.

use crate::error::{ExportError, ExportResult};
use crate::surface::Surface;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

/// Scheme prefix of the exported artifact.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// A flattened, alpha-free signature image encoded for form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedSignature {
    width: u32,
    height: u32,
    data_uri: String,
}

impl FlattenedSignature {
    /// Flatten the surface and encode it.
    pub fn from_surface(surface: &Surface) -> ExportResult<Self> {
        let flattened = surface.flatten();
        let (width, height) = (flattened.width(), flattened.height());

        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            flattened.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        )?;

        Ok(Self {
            width,
            height,
            data_uri: format!("{DATA_URI_PREFIX}{}", STANDARD.encode(&png)),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The encoded artifact, ready for the hidden form field.
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    pub fn into_data_uri(self) -> String {
        self.data_uri
    }

    /// Decode a data URI back into pixels.
    ///
    /// This is the consumer's first step when the form round-trips the
    /// field; it doubles as validation that an export is well-formed.
    pub fn decode(data_uri: &str) -> ExportResult<RgbaImage> {
        let payload = data_uri
            .strip_prefix(DATA_URI_PREFIX)
            .ok_or(ExportError::MalformedDataUri)?;
        let png = STANDARD.decode(payload)?;
        Ok(image::load_from_memory(&png)?.to_rgba8())
    }
}
