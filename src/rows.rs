//! Row grouping via quantized baselines.
//!
//! Tokens are bucketed by rounding their baseline to a multiple of the row
//! tolerance, so proximate baselines merge into one row. Buckets are ordered
//! by descending key: documents with an inverted coordinate origin place
//! larger `y` values visually higher on the page.

use std::collections::BTreeMap;

use crate::token::Token;

/// A single inferred table row: tokens sharing a baseline bucket, ordered by
/// ascending `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The quantized baseline key this row was bucketed under.
    pub key: i64,
    /// The row's tokens, `x` non-decreasing.
    pub tokens: Vec<Token>,
}

impl Row {
    /// Flatten the row into trimmed, non-empty cell strings.
    ///
    /// This is the cell array handed to the table assembler; a row whose
    /// every token trims to nothing produces no grid row.
    pub fn cell_texts(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|t| t.cell_text().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }
}

/// Compute the quantized bucket key for a baseline.
///
/// # Examples
///
/// ```
/// use tablegrid::bucket_key;
///
/// assert_eq!(bucket_key(100.0, 5), 100);
/// assert_eq!(bucket_key(102.0, 5), 100);
/// assert_eq!(bucket_key(103.0, 5), 105);
/// ```
pub fn bucket_key(y: f32, tolerance: u32) -> i64 {
    (y / tolerance as f32).round() as i64 * tolerance as i64
}

/// Group tokens into rows using the given tolerance.
///
/// Each token is assigned to the bucket `round(y / tolerance) * tolerance`.
/// After assignment, every bucket is stable-sorted by ascending `x` and the
/// buckets are emitted in descending key order (top of page first).
///
/// The operation is deterministic: identical input order and positions always
/// yield identical bucket assignment and cell ordering.
///
/// # Examples
///
/// ```
/// use tablegrid::{group_into_rows, normalize_tokens, RawToken};
///
/// let tokens = normalize_tokens(vec![
///     RawToken::new("R1C1", 0.0, 100.0),
///     RawToken::new("R1C2", 50.0, 100.0),
///     RawToken::new("R2C1", 0.0, 90.0),
/// ]);
///
/// let rows = group_into_rows(tokens, 5);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].cell_texts(), vec!["R1C1", "R1C2"]);
/// assert_eq!(rows[1].cell_texts(), vec!["R2C1"]);
/// ```
pub fn group_into_rows(tokens: Vec<Token>, tolerance: u32) -> Vec<Row> {
    let mut buckets: BTreeMap<i64, Vec<Token>> = BTreeMap::new();

    for token in tokens {
        let key = bucket_key(token.y, tolerance);
        buckets.entry(key).or_default().push(token);
    }

    buckets
        .into_iter()
        .rev()
        .map(|(key, mut tokens)| {
            tokens.sort_by(|a, b| a.x.total_cmp(&b.x));
            Row { key, tokens }
        })
        .collect()
}
