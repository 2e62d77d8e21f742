//! Error types for grid reconstruction.
//!
//! None of these errors ever escape [`crate::GridPipeline::convert`] — every
//! failure path resolves to a valid grid (inline error row or fallback grid).
//! They exist so providers and bounded operations can describe what went
//! wrong on the way there.

use std::time::Duration;

/// Result type alias for grid reconstruction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while acquiring or processing pages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The extraction backend reported it is not ready or not present.
    #[error("extraction backend is not available")]
    BackendUnavailable,

    /// The document could not be loaded at all.
    #[error("document could not be loaded: {0}")]
    DocumentLoad(String),

    /// Document acquisition exceeded its budget.
    #[error("document loading timed out after {0:?}")]
    DocumentTimeout(Duration),

    /// A single page failed to load or yield content.
    #[error("failed to process page {page}: {reason}")]
    Page {
        /// One-based page number
        page: usize,
        /// Reason for the failure
        reason: String,
    },

    /// A page-level operation exceeded its budget.
    #[error("page {page} timed out after {budget:?}")]
    PageTimeout {
        /// One-based page number
        page: usize,
        /// Budget that expired
        budget: Duration,
    },

    /// A bounded operation's worker terminated without producing a result.
    #[error("bounded operation terminated without a result")]
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_message() {
        let err = Error::Page {
            page: 3,
            reason: "content stream unreadable".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 3"));
        assert!(msg.contains("content stream unreadable"));
    }

    #[test]
    fn test_timeout_messages() {
        let err = Error::DocumentTimeout(Duration::from_secs(20));
        assert!(format!("{}", err).contains("timed out"));

        let err = Error::PageTimeout {
            page: 2,
            budget: Duration::from_secs(5),
        };
        assert!(format!("{}", err).contains("page 2"));
    }
}
