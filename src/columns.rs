//! Column boundary estimation via agglomerative x-clustering.
//!
//! Boundaries are informational: they drive column-count diagnostics and
//! discontinuity detection, and never discard or remap cell text.

use crate::rows::Row;

/// A growing cluster of horizontal positions.
struct Cluster {
    sum: f32,
    count: usize,
}

impl Cluster {
    fn new(position: f32) -> Self {
        Self { sum: position, count: 1 }
    }

    fn average(&self) -> f32 {
        self.sum / self.count as f32
    }

    fn push(&mut self, position: f32) {
        self.sum += position;
        self.count += 1;
    }
}

/// Estimate column boundary positions from all rows of a page.
///
/// Collects every token's `x` and, when the width is known, `x + width`;
/// deduplicates and sorts them; then runs a single agglomerative pass with
/// the given threshold. A value joins the nearest existing cluster whose
/// running average is within the threshold, updating that average
/// incrementally, and otherwise starts a new cluster. The sorted cluster
/// averages are returned.
///
/// # Examples
///
/// ```
/// use tablegrid::{estimate_column_boundaries, group_into_rows, normalize_tokens, RawToken};
///
/// let tokens = normalize_tokens(vec![
///     RawToken::new("a", 0.0, 100.0),
///     RawToken::new("b", 3.0, 90.0),    // within 10 of the first cluster
///     RawToken::new("c", 120.0, 100.0), // far: its own cluster
/// ]);
/// let rows = group_into_rows(tokens, 5);
///
/// let boundaries = estimate_column_boundaries(&rows, 10.0);
/// assert_eq!(boundaries.len(), 2);
/// assert!((boundaries[0] - 1.5).abs() < 1e-5);
/// assert_eq!(boundaries[1], 120.0);
/// ```
pub fn estimate_column_boundaries(rows: &[Row], threshold: f32) -> Vec<f32> {
    let mut positions: Vec<f32> = Vec::new();
    for row in rows {
        for token in &row.tokens {
            positions.push(token.x);
            if token.width > 0.0 {
                positions.push(token.x + token.width);
            }
        }
    }

    positions.sort_by(f32::total_cmp);
    positions.dedup();

    let mut clusters: Vec<Cluster> = Vec::new();
    for &position in &positions {
        let mut nearest: Option<(usize, f32)> = None;
        for (index, cluster) in clusters.iter().enumerate() {
            let distance = (cluster.average() - position).abs();
            if distance <= threshold
                && nearest.map_or(true, |(_, best)| distance < best)
            {
                nearest = Some((index, distance));
            }
        }

        match nearest {
            Some((index, _)) => clusters[index].push(position),
            None => clusters.push(Cluster::new(position)),
        }
    }

    let mut averages: Vec<f32> = clusters.iter().map(Cluster::average).collect();
    averages.sort_by(f32::total_cmp);
    averages
}
