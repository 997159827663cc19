//! Error types for the signing-page widgets
//!
//! Provides unified error handling for signature export and preview
//! rendering. Both failure domains are non-fatal to the hosting page: export
//! errors surface to the caller, preview errors are logged and absorbed by
//! the pane's stage machine.

use pdfium_render::prelude::PdfiumError;
use thiserror::Error;

/// Errors that can occur while flattening and encoding a signature
#[derive(Error, Debug)]
pub enum ExportError {
    /// PNG codec failure while encoding or re-reading an artifact
    #[error("PNG codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// Data URI missing the `data:image/png;base64,` prefix
    #[error("malformed signature data URI")]
    MalformedDataUri,

    /// Base64 payload failed to decode
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while rendering the document preview
#[derive(Error, Debug)]
pub enum PreviewError {
    /// The PDFium dynamic library could not be located or bound
    #[error("PDFium unavailable: {0}")]
    LibraryUnavailable(String),

    /// Document load, page fetch, or render failure inside PDFium
    #[error("PDF error: {0}")]
    Pdfium(#[from] PdfiumError),

    /// The document contains no pages
    #[error("document has no pages")]
    EmptyDocument,
}

/// Result type alias for preview operations
pub type PreviewResult<T> = Result<T, PreviewError>;
