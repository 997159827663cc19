//! First-page document preview rendering using PDFium.
//!
//! The preview is a read-only reference shown next to the signature pad:
//! page 1 of the referenced document, rasterized once at a fixed scale.
//! PDFium is treated as an opaque collaborator - load document by locator,
//! get page by index, render page at scale.
//!
//! ## Modules
//!
//! - `state` - Sequential render stage machine
//! - `locator` - URL-or-path document locators
//! - `pdfium_loader` - Shared PDFium library loading logic
//! - `renderer` - The preview pane and its render driver

mod locator;
mod pdfium_loader;
mod renderer;
mod state;

pub use locator::DocumentLocator;
pub use pdfium_loader::PdfiumLoader;
pub use renderer::PreviewPane;
pub use state::RenderStage;
