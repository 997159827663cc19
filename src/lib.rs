//! signpad - document-signing page widgets.
//!
//! A headless core for the two components of a signing page: a freehand
//! signature pad that flattens ink onto opaque white and exports it as a
//! base64 PNG data URI, and a PDFium-backed pane that renders page 1 of
//! the referenced document for visual reference while signing. The hosting
//! shell owns the real event loop and layout; it feeds device events and
//! layout changes in, and reads rasters, field values, and notices out.
//!
//! ## Modules
//!
//! - `page` - Host contract wiring pad, hidden field, preview, signing link
//! - `pad` - The signature pad widget
//! - `surface` - Transparent drawing surface and flattening
//! - `export` - PNG/base64 data-URI artifact
//! - `input` - Input mode selection, event types, stroke state, coords
//! - `preview` - First-page document rendering via PDFium
//! - `config` - Pad and preview options
//! - `error` - Export and preview error types
//! - `logging` - Tracing subscriber setup

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod input;
pub mod logging;
pub mod pad;
pub mod page;
pub mod preview;
pub mod surface;
pub mod types;

pub use config::{PadOptions, PreviewOptions};
pub use export::FlattenedSignature;
pub use pad::SignaturePad;
pub use page::{HostElements, Notice, PreviewElement, SigningPage};
pub use preview::{DocumentLocator, PreviewPane, RenderStage};
