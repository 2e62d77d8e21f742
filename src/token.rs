//! Positioned text fragments and their normalization.
//!
//! The extraction collaborator yields [`RawToken`]s whose positions may be
//! non-finite on malformed input. [`normalize_tokens`] coerces them into
//! canonical [`Token`]s, dropping anything unusable. Tokens are immutable
//! once created and consumed exactly once by row grouping.

/// A raw positioned text fragment as produced by the page-extraction
/// collaborator.
///
/// Nothing about a `RawToken` is trusted: text may be whitespace, positions
/// may be NaN or infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    /// The fragment's text content.
    pub text: String,
    /// Baseline x coordinate.
    pub x: f32,
    /// Baseline y coordinate (larger values are visually higher).
    pub y: f32,
    /// Bounding width, 0 when unknown.
    pub width: f32,
    /// Bounding height, 0 when unknown.
    pub height: f32,
    /// Font name, when the extractor reports one.
    pub font_name: Option<String>,
    /// Font size in points, when the extractor reports one.
    pub font_size: Option<f32>,
}

impl RawToken {
    /// Create a raw token with just text and a position.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablegrid::RawToken;
    ///
    /// let raw = RawToken::new("Total", 12.0, 340.0);
    /// assert_eq!(raw.width, 0.0);
    /// assert!(raw.font_name.is_none());
    /// ```
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width: 0.0,
            height: 0.0,
            font_name: None,
            font_size: None,
        }
    }

    /// Set the bounding extent.
    pub fn with_extent(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the font metadata.
    pub fn with_font(mut self, name: impl Into<String>, size: f32) -> Self {
        self.font_name = Some(name.into());
        self.font_size = Some(size);
        self
    }
}

/// A canonical positioned text fragment.
///
/// Guarantees: `text` is non-empty after trimming, `x` and `y` are finite,
/// `width` and `height` are finite (0 when the extractor had no value).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The fragment's text content (non-empty after trimming).
    pub text: String,
    /// Baseline x coordinate, finite.
    pub x: f32,
    /// Baseline y coordinate, finite. Larger values are visually higher.
    pub y: f32,
    /// Bounding width, finite, 0 when unknown.
    pub width: f32,
    /// Bounding height, finite, 0 when unknown.
    pub height: f32,
    /// Font name, when known.
    pub font_name: Option<String>,
    /// Font size in points, when known.
    pub font_size: Option<f32>,
}

impl Token {
    /// The trimmed text used when this token becomes a grid cell.
    pub fn cell_text(&self) -> &str {
        self.text.trim()
    }
}

/// Validate and coerce raw fragments into canonical tokens.
///
/// Fragments are dropped when their trimmed text is empty or their position
/// cannot be resolved to finite numbers. A non-finite extent is recoverable
/// and coerced to 0. Drops are silent (debug-logged only); a malformed token
/// is never fatal.
///
/// # Examples
///
/// ```
/// use tablegrid::{normalize_tokens, RawToken};
///
/// let raw = vec![
///     RawToken::new("Amount", 10.0, 100.0),
///     RawToken::new("   ", 20.0, 100.0),       // whitespace only: dropped
///     RawToken::new("ghost", f32::NAN, 100.0), // unresolvable position: dropped
/// ];
///
/// let tokens = normalize_tokens(raw);
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].text, "Amount");
/// ```
pub fn normalize_tokens(raw: Vec<RawToken>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(raw.len());

    for fragment in raw {
        if fragment.text.trim().is_empty() {
            log::trace!("dropping empty fragment at ({}, {})", fragment.x, fragment.y);
            continue;
        }
        if !fragment.x.is_finite() || !fragment.y.is_finite() {
            log::debug!("dropping fragment {:?}: unresolvable position", fragment.text);
            continue;
        }

        let width = if fragment.width.is_finite() { fragment.width } else { 0.0 };
        let height = if fragment.height.is_finite() { fragment.height } else { 0.0 };

        tokens.push(Token {
            text: fragment.text,
            x: fragment.x,
            y: fragment.y,
            width,
            height,
            font_name: fragment.font_name,
            font_size: fragment.font_size,
        });
    }

    tokens
}
