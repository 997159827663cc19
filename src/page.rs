//! The signing page - the host contract binding both widgets.
//!
//! A hosting shell describes what its page actually contains
//! ([`HostElements`]); the page wires a [`SignaturePad`] to the hidden
//! output field, and a [`PreviewPane`] only when a preview element with a
//! locator attribute is present. A page without a preview element never
//! touches the rendering dependency at all.

use crate::config::{PadOptions, PreviewOptions};
use crate::error::ExportResult;
use crate::input::DeviceCapabilities;
use crate::pad::SignaturePad;
use crate::preview::PreviewPane;
use anyhow::Context as _;

/// Hidden form field receiving the flattened export.
#[derive(Debug, Clone, Default)]
pub struct HiddenField {
    value: String,
}

impl HiddenField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// The optional preview element and its document-locator attribute.
#[derive(Debug, Clone)]
pub struct PreviewElement {
    /// Value of the element's `data-url` attribute
    pub locator: String,
}

/// What the hosting page supplies at initialization.
#[derive(Debug, Clone)]
pub struct HostElements {
    /// On-screen layout width of the signature element
    pub signature_width: u32,
    /// One-shot input capability probe
    pub capabilities: DeviceCapabilities,
    /// Preview element, when the page has one
    pub preview: Option<PreviewElement>,
    /// Text content of the signing-URL display element, when present
    pub signing_url: Option<String>,
}

/// A blocking confirmation the host should surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
}

impl Notice {
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub struct SigningPage {
    pub pad: SignaturePad,
    signature_field: HiddenField,
    preview: Option<PreviewPane>,
    signing_url: Option<String>,
}

impl SigningPage {
    pub fn new(
        host: HostElements,
        pad_options: PadOptions,
        preview_options: PreviewOptions,
    ) -> Self {
        let preview = host
            .preview
            .map(|element| PreviewPane::new(element.locator.into(), preview_options));
        Self {
            pad: SignaturePad::new(host.signature_width, &host.capabilities, pad_options),
            signature_field: HiddenField::default(),
            preview,
            signing_url: host.signing_url,
        }
    }

    pub fn signature_field(&self) -> &HiddenField {
        &self.signature_field
    }

    pub fn preview(&self) -> Option<&PreviewPane> {
        self.preview.as_ref()
    }

    /// Flatten the current signature and write the encoded artifact into
    /// the hidden form field.
    pub fn save_signature(&mut self) -> ExportResult<()> {
        let flattened = self.pad.export_flattened()?;
        self.signature_field.set_value(flattened.into_data_uri());
        Ok(())
    }

    /// Render the first document page, if the page has a preview element.
    pub fn render_preview(&mut self) {
        if let Some(pane) = self.preview.as_mut() {
            pane.render_first_page();
        }
    }

    /// Copy the signing link to the system clipboard.
    ///
    /// On success returns the confirmation notice for the host to display.
    /// Denied clipboard access stays silent toward the user.
    pub fn copy_signing_url(&self) -> Option<Notice> {
        let url = self.signing_url.as_deref()?;
        match write_clipboard(url) {
            Ok(()) => Some(Notice {
                message: "Signing link copied to clipboard.".to_string(),
            }),
            Err(error) => {
                tracing::warn!(%error, "signing link copy failed");
                None
            }
        }
    }
}

fn write_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text)
        .context("clipboard write rejected")?;
    Ok(())
}
