//! Catalog feed access.
//!
//! The catalog is a read-only JSON feed on disk: an ordered array of
//! product records. It is re-read fresh for every protected-page visit and
//! for every feed-endpoint request; there is no cache and no retry. A
//! failed read or parse surfaces as a [`CatalogError`] for the caller to
//! display.

use std::path::{Path, PathBuf};

use comrak::{Options, markdown_to_html};
use driftwood_core::ProductRecord;

/// Reads the catalog feed from disk.
#[derive(Debug, Clone)]
pub struct CatalogReader {
    path: PathBuf,
}

impl CatalogReader {
    /// Create a reader for the feed at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The feed file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed file cannot be read or is not a JSON
    /// array of product records.
    pub async fn load(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io(e.to_string()))?;

        let records = serde_json::from_str(&raw).map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(records)
    }
}

/// Render rich-text product details to HTML with GitHub Flavored Markdown
/// support.
#[must_use]
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    markdown_to_html(content, &options)
}

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
