//! The preview pane and its render driver.
//!
//! `render_first_page` walks the stage machine through one render request.
//! Failures at any stage log a diagnostic and park the pane in `Failed`
//! with its raster untouched; nothing propagates to the hosting page and
//! nothing retries.

use crate::config::PreviewOptions;
use crate::error::{PreviewError, PreviewResult};
use crate::preview::{DocumentLocator, PdfiumLoader, RenderStage};
use image::RgbaImage;
use pdfium_render::prelude::*;

/// A raster pane holding page 1 of the referenced document.
pub struct PreviewPane {
    locator: DocumentLocator,
    options: PreviewOptions,
    stage: RenderStage,
    page_image: Option<RgbaImage>,
}

impl PreviewPane {
    pub fn new(locator: DocumentLocator, options: PreviewOptions) -> Self {
        Self {
            locator,
            options,
            stage: RenderStage::default(),
            page_image: None,
        }
    }

    pub fn locator(&self) -> &DocumentLocator {
        &self.locator
    }

    pub fn stage(&self) -> RenderStage {
        self.stage
    }

    /// The rendered page raster, once `Rendered`. The pane is sized to the
    /// page's natural dimensions scaled by the configured factor.
    pub fn page_image(&self) -> Option<&RgbaImage> {
        self.page_image.as_ref()
    }

    /// Pane size in pixels, `None` while blank.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.page_image.as_ref().map(|i| (i.width(), i.height()))
    }

    /// Fetch and rasterize page 1 of the referenced document.
    ///
    /// Drives `Loading -> PageFetched -> Rendered`, or parks in `Failed`
    /// with the prior (blank) content intact.
    pub fn render_first_page(&mut self) {
        self.stage = RenderStage::Loading;
        match self.rasterize() {
            Ok(image) => {
                self.page_image = Some(image);
                self.stage = RenderStage::Rendered;
            }
            Err(error) => {
                tracing::error!(
                    locator = self.locator.as_str(),
                    %error,
                    "failed to render document preview"
                );
                self.stage = RenderStage::Failed;
            }
        }
    }

    fn rasterize(&mut self) -> PreviewResult<RgbaImage> {
        let pdfium = PdfiumLoader::load()?;
        let document = pdfium.load_pdf_from_file(self.locator.to_path(), None)?;
        if document.pages().len() == 0 {
            return Err(PreviewError::EmptyDocument);
        }
        let page = document.pages().first()?;
        self.stage = RenderStage::PageFetched;

        let config = PdfRenderConfig::new().scale_page_by_factor(self.options.scale);
        let bitmap = page.render_with_config(&config)?;
        Ok(bitmap.as_image().to_rgba8())
    }
}
