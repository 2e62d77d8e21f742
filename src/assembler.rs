//! Table assembly: ordered rows into the document-level grid.
//!
//! The assembler owns the append-only [`TableGrid`] accumulator and applies
//! the structural separator rules: a blank row at large column-count jumps,
//! blank rows around detected header rows, and a blank row between pages.

use crate::analyzer::PageAnalysis;
use crate::config::GridConfig;
use crate::grid::TableGrid;
use crate::headers::is_header_row;

/// Accumulates page analyses and note rows into one document-level grid.
///
/// # Examples
///
/// ```
/// use tablegrid::{analyze_page, normalize_tokens, GridConfig, RawToken, TableAssembler};
///
/// let config = GridConfig::new();
/// let tokens = normalize_tokens(vec![
///     RawToken::new("Item", 0.0, 100.0),
///     RawToken::new("Amount", 60.0, 100.0),
///     RawToken::new("Widget", 0.0, 90.0),
///     RawToken::new("3", 60.0, 90.0),
/// ]);
/// let analysis = analyze_page(0, tokens, &config);
///
/// let mut assembler = TableAssembler::new(config);
/// assembler.append_page(&analysis);
/// let grid = assembler.finish();
///
/// assert_eq!(grid.rows()[0], vec!["Item", "Amount"]);
/// assert_eq!(grid.rows()[1], vec!["Widget", "3"]);
/// ```
#[derive(Debug)]
pub struct TableAssembler {
    config: GridConfig,
    grid: TableGrid,
    last_column_count: usize,
}

impl TableAssembler {
    /// Create an assembler with an empty grid.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            grid: TableGrid::new(),
            last_column_count: 0,
        }
    }

    /// Append a single-cell note row (page markers, error rows, metadata
    /// headings). Note rows do not participate in discontinuity tracking.
    pub fn note(&mut self, text: impl Into<String>) {
        self.grid.push_note(text);
    }

    /// Append an empty separator row.
    pub fn blank(&mut self) {
        self.grid.push_blank();
    }

    /// Append a raw row of cells (caller-level metadata rows). Does not
    /// participate in discontinuity tracking.
    pub fn row(&mut self, cells: Vec<String>) {
        self.grid.push_row(cells);
    }

    /// Append one page's analyzed rows, applying the separator rules.
    ///
    /// Per row in top-to-bottom order:
    /// - flatten to trimmed, non-empty cell texts; skip rows that flatten to
    ///   nothing;
    /// - insert one blank row before the current row when the previous row
    ///   had cells, the current row has more than one, and the cell-count
    ///   jump exceeds the configured threshold. The comparison deliberately
    ///   uses the previous row's raw cell count, not a smoothed average, so
    ///   a single noisy row can trigger a separator;
    /// - insert one blank row before a header row when the preceding grid
    ///   row is non-empty;
    /// - append the cells, then one blank row after a header row;
    /// - update the running cell count.
    ///
    /// The running count resets at the start of each page segment.
    pub fn append_page(&mut self, analysis: &PageAnalysis) {
        self.last_column_count = 0;

        for row in &analysis.rows {
            let cells = row.cell_texts();
            if cells.is_empty() {
                continue;
            }

            let header = is_header_row(row, &self.config);

            if self.last_column_count > 0
                && cells.len() > 1
                && cells.len().abs_diff(self.last_column_count) > self.config.column_jump_threshold
            {
                self.grid.push_blank();
            }

            if header && self.grid.last_row().is_some_and(|last| !last.is_empty()) {
                self.grid.push_blank();
            }

            let count = cells.len();
            self.grid.push_row(cells);

            if header {
                self.grid.push_blank();
            }

            self.last_column_count = count;
        }
    }

    /// Append the blank separator row between pages.
    pub fn page_break(&mut self) {
        self.grid.push_blank();
    }

    /// Finish assembly and return the immutable grid.
    pub fn finish(self) -> TableGrid {
        self.grid
    }
}
