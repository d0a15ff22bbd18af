// crates/core/src/stats.rs
//! Descriptive statistics, percentile, and rank for one field across a
//! (filtered) corpus subset.
//!
//! Stats are recomputed fresh per query — no caching across filters. When
//! data is insufficient the functions return documented neutral values
//! (`None`, percentile 50, rank 0) instead of erroring.

use serde::Serialize;

use crate::thresholds::{MIN_STAT_VALUES, RANK_MATCH_EPSILON};
use crate::types::{Field, HistoricalRecord};

/// Descriptive statistics for one field over one corpus subset.
///
/// Invariant: `count == values.len() == titles.len()`; `values` and `titles`
/// run parallel in table row order (not sorted).
#[derive(Debug, Clone, Serialize)]
pub struct FieldStats {
    pub field: Field,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    pub q25: f64,
    pub q75: f64,
    pub values: Vec<f64>,
    pub titles: Vec<String>,
}

/// Compute stats for `field` over `records`.
///
/// Returns `None` when fewer than two rows carry the field — a single value
/// has no spread to describe.
pub fn compute_stats(records: &[HistoricalRecord], field: Field) -> Option<FieldStats> {
    let mut values = Vec::new();
    let mut titles = Vec::new();
    for record in records {
        if let Some(v) = record.value(field) {
            values.push(v);
            titles.push(record.title.clone());
        }
    }

    if values.len() < MIN_STAT_VALUES {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count as f64 - 1.0);

    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(FieldStats {
        field,
        count,
        mean,
        median: quantile(&sorted, 0.5),
        min: sorted[0],
        max: sorted[count - 1],
        std_dev: variance.sqrt(),
        q25: quantile(&sorted, 0.25),
        q75: quantile(&sorted, 0.75),
        values,
        titles,
    })
}

/// Linearly interpolated quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = (n - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Rank-based percentile of `value` in [0, 100].
///
/// Tied values split the percentile mass evenly (midpoint convention):
/// (count below + 0.5 × count equal) / total × 100, rounded. Returns the
/// neutral 50 when stats are unavailable — callers must not treat that as a
/// computed quantity.
pub fn compute_percentile(stats: Option<&FieldStats>, value: f64) -> u32 {
    let Some(stats) = stats else {
        return 50;
    };
    if stats.count == 0 {
        return 50;
    }
    let below = stats.values.iter().filter(|v| **v < value).count() as f64;
    let equal = stats.values.iter().filter(|v| **v == value).count() as f64;
    (((below + equal * 0.5) / stats.count as f64) * 100.0).round() as u32
}

/// 1-based rank of `value` among the observed values.
///
/// Descending by default (rank 1 = highest); `ascending` flips the order for
/// metrics where lower is better. Exact or near matches (|Δ| <
/// [`RANK_MATCH_EPSILON`]) claim the best rank at that sorted position; a
/// value absent from the list takes its insertion position under strict
/// ordering, or `count + 1` past every existing value. The first-rule-match
/// order for near-ties is intentional, documented behavior. Returns 0 when
/// stats are unavailable.
pub fn compute_rank(stats: Option<&FieldStats>, value: f64, ascending: bool) -> usize {
    let Some(stats) = stats else {
        return 0;
    };
    if stats.count == 0 {
        return 0;
    }

    let mut sorted = stats.values.clone();
    if ascending {
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    } else {
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    }

    for (i, v) in sorted.iter().enumerate() {
        if (v - value).abs() < RANK_MATCH_EPSILON {
            return i + 1;
        }
    }
    for (i, v) in sorted.iter().enumerate() {
        if (!ascending && value > *v) || (ascending && value < *v) {
            return i + 1;
        }
    }
    sorted.len() + 1
}

// ============================================================================
// Tests
// ============================================================================
