//! The table grid output artifact.
//!
//! A [`TableGrid`] is an ordered sequence of grid rows, each an ordered
//! sequence of cell strings. Empty rows are structural separators. The grid
//! is append-only during assembly and immutable once returned to the caller,
//! ready to be written as a 2-D sheet (one call per cell array). Column
//! widths and styling are the writer's concern, not this crate's.

use serde::{Deserialize, Serialize};

/// An ordered sequence of rows of cell strings.
///
/// Serializes transparently as an array of arrays, the shape a sheet writer
/// consumes.
///
/// # Examples
///
/// ```
/// use tablegrid::TableGrid;
///
/// let mut grid = TableGrid::new();
/// grid.push_row(vec!["Item".to_string(), "Amount".to_string()]);
/// grid.push_blank();
/// grid.push_note("--- Page 2 ---");
///
/// assert_eq!(grid.len(), 3);
/// assert_eq!(grid.rows()[1], Vec::<String>::new());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row of cells.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Append an empty row (structural separator).
    pub fn push_blank(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Append a single-cell note row (markers, disclaimers, error rows).
    pub fn push_note(&mut self, text: impl Into<String>) {
        self.rows.push(vec![text.into()]);
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The most recently appended row, if any.
    pub fn last_row(&self) -> Option<&[String]> {
        self.rows.last().map(Vec::as_slice)
    }

    /// Number of rows, separators included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the grid into its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Serialize the grid as a JSON array of arrays, for diagnostics and
    /// tooling.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_inspect() {
        let mut grid = TableGrid::new();
        assert!(grid.is_empty());

        grid.push_note("Data extracted from \"a.pdf\"");
        grid.push_blank();
        grid.push_row(vec!["x".into(), "y".into()]);

        assert_eq!(grid.len(), 3);
        assert_eq!(grid.last_row(), Some(&["x".to_string(), "y".to_string()][..]));
        assert_eq!(grid.rows()[1].len(), 0);
    }

    #[test]
    fn test_json_shape_is_array_of_arrays() {
        let mut grid = TableGrid::new();
        grid.push_row(vec!["a".into(), "b".into()]);
        grid.push_blank();

        let json = grid.to_json().unwrap();
        assert_eq!(json, r#"[["a","b"],[]]"#);
    }

    #[test]
    fn test_json_round_trip() {
        let mut grid = TableGrid::new();
        grid.push_note("note");
        grid.push_row(vec!["1".into(), "2".into(), "3".into()]);

        let json = grid.to_json().unwrap();
        let back: TableGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
