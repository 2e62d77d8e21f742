//! Header detection from row typography.
//!
//! A row is flagged as a header when its typography deviates from the row's
//! dominant style: a font name outside the two most common, or a font size
//! above the cutoff. Intentionally permissive — any qualifying token flags
//! the whole row.

use indexmap::IndexMap;

use crate::config::GridConfig;
use crate::rows::Row;

/// Decide whether a row looks like a header.
///
/// Tallies font-name frequency across the row's tokens and takes the top
/// `common_font_count` names as the "common" set (stable order on equal
/// counts: first-encountered wins). The row is a header if any token uses a
/// font outside that set, or any known font size exceeds
/// `header_size_cutoff`.
///
/// A row with zero or one distinct font and no oversized text is never a
/// header.
///
/// # Examples
///
/// ```
/// use tablegrid::{group_into_rows, is_header_row, normalize_tokens, GridConfig, RawToken};
///
/// let tokens = normalize_tokens(vec![
///     RawToken::new("Name", 0.0, 100.0).with_font("Helvetica-Bold", 14.0),
///     RawToken::new("Qty", 60.0, 100.0).with_font("Helvetica-Bold", 14.0),
/// ]);
/// let rows = group_into_rows(tokens, 5);
///
/// // 14pt exceeds the 12pt cutoff
/// assert!(is_header_row(&rows[0], &GridConfig::new()));
/// ```
pub fn is_header_row(row: &Row, config: &GridConfig) -> bool {
    let mut tally: IndexMap<&str, usize> = IndexMap::new();
    for token in &row.tokens {
        if let Some(name) = token.font_name.as_deref() {
            *tally.entry(name).or_insert(0) += 1;
        }
    }

    // Stable sort keeps insertion order on equal counts
    let mut entries: Vec<(&str, usize)> = tally.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    let common: Vec<&str> = entries
        .iter()
        .take(config.common_font_count)
        .map(|(name, _)| *name)
        .collect();

    row.tokens.iter().any(|token| {
        let foreign_font = token
            .font_name
            .as_deref()
            .map_or(false, |name| !common.contains(&name));
        let oversized = token
            .font_size
            .map_or(false, |size| size > config.header_size_cutoff);
        foreign_font || oversized
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{normalize_tokens, RawToken, Token};

    fn mock_token(x: f32, font: Option<(&str, f32)>) -> Token {
        let mut raw = RawToken::new("cell", x, 100.0);
        if let Some((name, size)) = font {
            raw = raw.with_font(name, size);
        }
        normalize_tokens(vec![raw]).remove(0)
    }

    fn row_of(tokens: Vec<Token>) -> Row {
        Row { key: 100, tokens }
    }

    #[test]
    fn test_uniform_font_is_not_header() {
        let row = row_of(vec![
            mock_token(0.0, Some(("Times", 10.0))),
            mock_token(40.0, Some(("Times", 10.0))),
            mock_token(80.0, Some(("Times", 10.0))),
        ]);
        assert!(!is_header_row(&row, &GridConfig::new()));
    }

    #[test]
    fn test_no_fonts_is_not_header() {
        let row = row_of(vec![mock_token(0.0, None), mock_token(40.0, None)]);
        assert!(!is_header_row(&row, &GridConfig::new()));
    }

    #[test]
    fn test_two_fonts_are_both_common() {
        // Two distinct fonts both land in the top-2 common set
        let row = row_of(vec![
            mock_token(0.0, Some(("Times", 10.0))),
            mock_token(40.0, Some(("Helvetica", 10.0))),
        ]);
        assert!(!is_header_row(&row, &GridConfig::new()));
    }

    #[test]
    fn test_third_font_flags_header() {
        let row = row_of(vec![
            mock_token(0.0, Some(("Times", 10.0))),
            mock_token(20.0, Some(("Times", 10.0))),
            mock_token(40.0, Some(("Helvetica", 10.0))),
            mock_token(60.0, Some(("Helvetica", 10.0))),
            mock_token(80.0, Some(("Courier-Bold", 10.0))),
        ]);
        assert!(is_header_row(&row, &GridConfig::new()));
    }

    #[test]
    fn test_oversized_text_flags_header() {
        let row = row_of(vec![
            mock_token(0.0, Some(("Times", 12.5))),
            mock_token(40.0, Some(("Times", 10.0))),
        ]);
        assert!(is_header_row(&row, &GridConfig::new()));
    }

    #[test]
    fn test_cutoff_is_strict() {
        // Exactly 12pt does not exceed the cutoff
        let row = row_of(vec![mock_token(0.0, Some(("Times", 12.0)))]);
        assert!(!is_header_row(&row, &GridConfig::new()));
    }

    #[test]
    fn test_oversized_without_font_name() {
        let mut raw = RawToken::new("TITLE", 0.0, 100.0);
        raw.font_size = Some(18.0);
        let row = row_of(vec![normalize_tokens(vec![raw]).remove(0)]);
        assert!(is_header_row(&row, &GridConfig::new()));
    }

    #[test]
    fn test_common_set_tie_break_is_stable() {
        // Three fonts, one occurrence each: the first two encountered are
        // common, the third flags the row.
        let row = row_of(vec![
            mock_token(0.0, Some(("A", 10.0))),
            mock_token(20.0, Some(("B", 10.0))),
            mock_token(40.0, Some(("C", 10.0))),
        ]);
        assert!(is_header_row(&row, &GridConfig::new()));

        // With only the first two, neither is foreign
        let row = row_of(vec![
            mock_token(0.0, Some(("A", 10.0))),
            mock_token(20.0, Some(("B", 10.0))),
        ]);
        assert!(!is_header_row(&row, &GridConfig::new()));
    }
}
