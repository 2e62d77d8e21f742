//! Per-page processing metrics.

use serde::Serialize;

/// Numbers describing how one page was processed.
///
/// Collected by the pipeline alongside the grid; useful for diagnosing why a
/// document reconstructed the way it did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetrics {
    /// Zero-based page index.
    pub page_index: usize,
    /// Tokens surviving normalization.
    pub token_count: usize,
    /// Row tolerance used on this page.
    pub tolerance: u32,
    /// Detected column count (diagnostic).
    pub column_count: usize,
    /// Wall-clock processing time for this page.
    pub elapsed_ms: u64,
}
