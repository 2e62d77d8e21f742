//! Page analysis: adaptive row tolerance and per-page inference results.
//!
//! Row tolerance is derived from the page's baseline spacing distribution.
//! The most common consecutive-baseline difference approximates single-line
//! height; 30% of that is a safe clustering radius that merges same-line
//! sub-pixel jitter without merging adjacent lines.

use indexmap::IndexMap;

use crate::columns::estimate_column_boundaries;
use crate::config::GridConfig;
use crate::rows::{group_into_rows, Row};
use crate::token::Token;

/// The inference result for a single page: ordered rows plus the page-level
/// numbers that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAnalysis {
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows in top-to-bottom page order, tokens x-sorted within each row.
    pub rows: Vec<Row>,
    /// The vertical clustering tolerance used for this page.
    pub tolerance: u32,
    /// Estimated column boundary positions (diagnostic, sorted ascending).
    pub column_boundaries: Vec<f32>,
    /// Number of tokens that survived normalization on this page.
    pub token_count: usize,
}

impl PageAnalysis {
    /// Detected column count: one fewer than the number of boundaries.
    pub fn column_count(&self) -> usize {
        self.column_boundaries.len().saturating_sub(1)
    }
}

/// Derive the vertical clustering tolerance for one page's tokens.
///
/// With fewer than `min_tokens_for_estimate` tokens the fixed
/// `default_tolerance` is returned — there is not enough signal to measure
/// line spacing. Otherwise baselines are sorted, consecutive absolute
/// differences collected (zeros and outliers at or above
/// `spacing_outlier_cutoff` discarded), and a frequency histogram of rounded
/// differences selects the most common spacing. The result is
/// `max(min_tolerance, ceil(spacing * tolerance_scale))`.
///
/// Tie-break: on equal frequency, the difference encountered first after the
/// baseline sort wins (the histogram is insertion-ordered). This is stable
/// across runs and pinned by tests.
///
/// # Examples
///
/// ```
/// use tablegrid::{estimate_row_tolerance, normalize_tokens, GridConfig, RawToken};
///
/// // 20 baselines uniformly 12 units apart: ceil(12 * 0.3) = 4
/// let tokens = normalize_tokens(
///     (0..20).map(|i| RawToken::new("x", 0.0, i as f32 * 12.0)).collect(),
/// );
/// assert_eq!(estimate_row_tolerance(&tokens, &GridConfig::new()), 4);
/// ```
pub fn estimate_row_tolerance(tokens: &[Token], config: &GridConfig) -> u32 {
    if tokens.len() < config.min_tokens_for_estimate {
        return config.default_tolerance;
    }

    let mut baselines: Vec<f32> = tokens.iter().map(|t| t.y).collect();
    baselines.sort_by(f32::total_cmp);

    let mut histogram: IndexMap<i64, u32> = IndexMap::new();
    for pair in baselines.windows(2) {
        let diff = (pair[1] - pair[0]).abs();
        if diff > 0.0 && diff < config.spacing_outlier_cutoff {
            *histogram.entry(diff.round() as i64).or_insert(0) += 1;
        }
    }

    // First-encountered value wins ties: only a strictly greater count
    // displaces the current best.
    let mut best: Option<(i64, u32)> = None;
    for (&diff, &count) in &histogram {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((diff, count));
        }
    }

    match best {
        Some((spacing, _)) => {
            let scaled = (spacing as f32 * config.tolerance_scale).ceil() as u32;
            config.min_tolerance.max(scaled)
        }
        // Every difference was zero or an outlier
        None => config.default_tolerance,
    }
}

/// Run the full per-page inference: tolerance, row grouping, column
/// boundaries.
///
/// Pure and single-pass; the returned [`PageAnalysis`] is never mutated
/// afterwards.
pub fn analyze_page(page_index: usize, tokens: Vec<Token>, config: &GridConfig) -> PageAnalysis {
    let token_count = tokens.len();
    let tolerance = estimate_row_tolerance(&tokens, config);
    let rows = group_into_rows(tokens, tolerance);
    let column_boundaries = estimate_column_boundaries(&rows, config.column_cluster_threshold);

    log::debug!(
        "page {}: {} tokens, tolerance {}, {} rows, ~{} columns",
        page_index + 1,
        token_count,
        tolerance,
        rows.len(),
        column_boundaries.len().saturating_sub(1)
    );

    PageAnalysis {
        page_index,
        rows,
        tolerance,
        column_boundaries,
        token_count,
    }
}
