//! The page-extraction collaborator interface.
//!
//! Document decoding lives behind [`PageProvider`]; this crate only consumes
//! positioned fragments. Providers must be `Send + Sync` so their calls can
//! be raced against the pipeline's timeout budgets on a worker thread.

use crate::error::Result;
use crate::token::RawToken;

/// A source of positioned text fragments, one list per page.
///
/// Implementations wrap whatever actually decodes the document (a PDF text
/// layer reader, an OCR backend, a test fixture). All methods may block;
/// the pipeline bounds each call with an independent timeout.
pub trait PageProvider: Send + Sync {
    /// Whether the backend is ready to serve pages. A provider that reports
    /// not-ready sends the pipeline straight to the fallback grid.
    fn is_ready(&self) -> bool {
        true
    }

    /// Total number of pages. Called once per document, bounded by the
    /// document timeout.
    fn page_count(&self) -> Result<usize>;

    /// Acquire a page before its content is fetched. Bounded by the page
    /// timeout, independently of [`PageProvider::page_tokens`]. The default
    /// is a no-op for providers without a separate acquisition step.
    fn open_page(&self, page_index: usize) -> Result<()> {
        let _ = page_index;
        Ok(())
    }

    /// Retrieve the raw fragments for a page (zero-based index). Bounded by
    /// the page timeout. An empty list is not an error — it marks a page
    /// with no extractable text.
    fn page_tokens(&self, page_index: usize) -> Result<Vec<RawToken>>;
}

/// Caller-supplied identity of the source document, used for the grid's
/// header rows and for the fallback grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Display name of the file.
    pub name: String,
    /// Size in bytes, when known.
    pub size_bytes: Option<u64>,
}

impl SourceFile {
    /// Create a source descriptor with just a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablegrid::SourceFile;
    ///
    /// let source = SourceFile::new("invoice.pdf").with_size(150 * 1024);
    /// assert_eq!(source.size_label(), "150 KB");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes: None,
        }
    }

    /// Set the file size in bytes.
    pub fn with_size(mut self, bytes: u64) -> Self {
        self.size_bytes = Some(bytes);
        self
    }

    /// Human-readable size for metadata rows: whole kilobytes, or "unknown".
    pub fn size_label(&self) -> String {
        match self.size_bytes {
            Some(bytes) => format!("{} KB", (bytes as f64 / 1024.0).round() as u64),
            None => "unknown".to_string(),
        }
    }
}
