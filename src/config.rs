//! Configuration for grid reconstruction.
//!
//! All clustering thresholds are empirical constants measured against real
//! documents. They are exposed as configuration because some document classes
//! (very dense forms, large-print layouts) benefit from different radii.

use std::time::Duration;

/// Grid reconstruction configuration.
///
/// Construct with [`GridConfig::new`] for the reference defaults, then adjust
/// with the `with_*` builders.
///
/// # Examples
///
/// ```
/// use tablegrid::GridConfig;
/// use std::time::Duration;
///
/// let config = GridConfig::new()
///     .with_header_size_cutoff(14.0)
///     .with_page_timeout(Duration::from_secs(10));
/// assert_eq!(config.default_tolerance, 5);
/// ```
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Row tolerance used when too few tokens exist to estimate one (units).
    pub default_tolerance: u32,

    /// Lower bound on any estimated row tolerance (units).
    pub min_tolerance: u32,

    /// Fraction of the most common inter-line spacing used as the clustering
    /// radius. 30% merges same-line jitter without merging adjacent lines.
    pub tolerance_scale: f32,

    /// Baseline differences at or above this are treated as unrelated line
    /// breaks and excluded from the spacing histogram (units).
    pub spacing_outlier_cutoff: f32,

    /// Minimum token count before spacing estimation is attempted; below
    /// this, `default_tolerance` is used.
    pub min_tokens_for_estimate: usize,

    /// Maximum distance from a cluster's running average for an x-position
    /// to join that cluster (units).
    pub column_cluster_threshold: f32,

    /// Font sizes strictly above this flag a row as a header (points).
    pub header_size_cutoff: f32,

    /// How many of the most frequent font names form the "common" set a
    /// header row must deviate from.
    pub common_font_count: usize,

    /// Cell-count jump between consecutive rows beyond which a structural
    /// separator row is inserted.
    pub column_jump_threshold: usize,

    /// Budget for acquiring the whole document (page count / readiness).
    pub document_timeout: Duration,

    /// Budget for each page-level step (page acquisition, content retrieval),
    /// applied independently per step.
    pub page_timeout: Duration,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfig {
    /// Create a configuration with the reference defaults.
    pub fn new() -> Self {
        Self {
            default_tolerance: 5,
            min_tolerance: 3,
            tolerance_scale: 0.3,
            spacing_outlier_cutoff: 20.0,
            min_tokens_for_estimate: 10,
            column_cluster_threshold: 10.0,
            header_size_cutoff: 12.0,
            common_font_count: 2,
            column_jump_threshold: 2,
            document_timeout: Duration::from_secs(20),
            page_timeout: Duration::from_secs(5),
        }
    }

    /// Set the font size cutoff above which a row is flagged as a header.
    pub fn with_header_size_cutoff(mut self, points: f32) -> Self {
        self.header_size_cutoff = points;
        self
    }

    /// Set the clustering threshold for column boundary estimation.
    pub fn with_column_cluster_threshold(mut self, units: f32) -> Self {
        self.column_cluster_threshold = units;
        self
    }

    /// Set the whole-document acquisition budget.
    pub fn with_document_timeout(mut self, budget: Duration) -> Self {
        self.document_timeout = budget;
        self
    }

    /// Set the per-step page budget.
    pub fn with_page_timeout(mut self, budget: Duration) -> Self {
        self.page_timeout = budget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_defaults() {
        let config = GridConfig::new();
        assert_eq!(config.default_tolerance, 5);
        assert_eq!(config.min_tolerance, 3);
        assert_eq!(config.tolerance_scale, 0.3);
        assert_eq!(config.spacing_outlier_cutoff, 20.0);
        assert_eq!(config.min_tokens_for_estimate, 10);
        assert_eq!(config.column_cluster_threshold, 10.0);
        assert_eq!(config.header_size_cutoff, 12.0);
        assert_eq!(config.common_font_count, 2);
        assert_eq!(config.column_jump_threshold, 2);
        assert_eq!(config.document_timeout, Duration::from_secs(20));
        assert_eq!(config.page_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builders() {
        let config = GridConfig::new()
            .with_header_size_cutoff(14.0)
            .with_column_cluster_threshold(8.0)
            .with_document_timeout(Duration::from_secs(30))
            .with_page_timeout(Duration::from_millis(500));
        assert_eq!(config.header_size_cutoff, 14.0);
        assert_eq!(config.column_cluster_threshold, 8.0);
        assert_eq!(config.document_timeout, Duration::from_secs(30));
        assert_eq!(config.page_timeout, Duration::from_millis(500));
    }
}
