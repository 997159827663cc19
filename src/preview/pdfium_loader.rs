//! PDFium library loader with platform-specific search paths.
//!
//! This module centralizes the logic for locating and binding the PDFium
//! dynamic library across deployment scenarios. The platform library name
//! (`libpdfium.so` / `libpdfium.dylib` / `pdfium.dll`) is derived by
//! pdfium-render itself, so the search list stays platform-neutral.

use crate::constants::{PDFIUM_LIB_DIR_ENV, PDFIUM_LIB_SUBDIR};
use crate::error::{PreviewError, PreviewResult};
use pdfium_render::prelude::*;
use std::path::PathBuf;

pub struct PdfiumLoader;

impl PdfiumLoader {
    /// Bind the PDFium library from known search paths or the system loader.
    ///
    /// Search order:
    /// 1. Directory named by the `SIGNPAD_PDFIUM_DIR` environment variable
    /// 2. `lib/` in the current working directory (development)
    /// 3. `lib/` relative to the executable (deployment)
    /// 4. System library fallback
    pub fn load() -> PreviewResult<Pdfium> {
        for dir in Self::search_dirs() {
            let library = Pdfium::pdfium_platform_library_name_at_path(&dir);
            if let Ok(bindings) = Pdfium::bind_to_library(&library) {
                tracing::debug!(library = %library.display(), "bound PDFium");
                return Ok(Pdfium::new(bindings));
            }
        }
        Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| PreviewError::LibraryUnavailable(format!("{e:?}")))
    }

    fn search_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();

        if let Ok(dir) = std::env::var(PDFIUM_LIB_DIR_ENV) {
            dirs.push(PathBuf::from(dir));
        }

        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd.join(PDFIUM_LIB_SUBDIR));
        }

        if let Ok(exe) = std::env::current_exe()
            && let Some(parent) = exe.parent()
        {
            dirs.push(parent.join(PDFIUM_LIB_SUBDIR));
        }

        dirs
    }
}
