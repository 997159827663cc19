//! Document locators.
//!
//! The hosting page hands the preview a locator string in a data attribute.
//! Locators are either plain filesystem paths or `file://` URLs; the
//! remote-transport surface that served documents upstream is outside this
//! crate, so anything else simply fails at load time like any unreachable
//! path.

use std::path::Path;

const FILE_SCHEME: &str = "file://";

/// An address identifying the document to preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocator(String);

impl DocumentLocator {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The locator exactly as the host supplied it (diagnostics).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The filesystem path the locator resolves to.
    pub fn to_path(&self) -> &Path {
        Path::new(self.0.strip_prefix(FILE_SCHEME).unwrap_or(&self.0))
    }
}

impl From<&str> for DocumentLocator {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for DocumentLocator {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
