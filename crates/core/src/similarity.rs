// crates/core/src/similarity.rs
//! Weighted multi-field similarity search over the reference corpus.
//!
//! Distance per field is the normalized absolute difference against the
//! column's observed range, clipped to [0,1]; rows missing the field take
//! the maximum difference (missing data is penalized, not ignored). The
//! final score is `1 − Σ(diff·weight)/Σ(weight used)`, so 1.0 means
//! indistinguishable on every usable field.

use crate::types::{CurrentRecord, Field, HistoricalRecord};

/// Core comparison fields and their weights (sum to 1.0 by construction).
pub const SIMILARITY_WEIGHTS: &[(Field, f64)] = &[
    (Field::BudgetTotal, 0.35),
    (Field::DurationDays, 0.25),
    (Field::VisitorsTotal, 0.25),
    (Field::ArtistsTotal, 0.15),
];

/// A corpus row paired with its similarity score in [0, 1].
#[derive(Debug, Clone)]
pub struct ScoredRecord<'a> {
    pub record: &'a HistoricalRecord,
    pub score: f64,
}

/// Rank the corpus by similarity to `current` and return the top `top_n`.
///
/// A field participates only when the current value exists and is non-zero,
/// the column has at least two non-missing non-zero entries, and the column
/// range is non-zero. Fields that cannot be evaluated drop out of the
/// denominator for every row uniformly. When no field is usable at all the
/// first `top_n` rows are returned in table order with score 0 rather than
/// failing. Score ties keep table order (stable sort).
pub fn find_similar<'a>(
    records: &'a [HistoricalRecord],
    current: &CurrentRecord,
    top_n: usize,
) -> Vec<ScoredRecord<'a>> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut weighted_diff = vec![0.0f64; records.len()];
    let mut total_weight = 0.0;

    for (field, weight) in SIMILARITY_WEIGHTS {
        let Some(current_val) = current.value(*field) else {
            continue;
        };
        if current_val == 0.0 {
            continue;
        }

        let valid: Vec<f64> = records
            .iter()
            .filter_map(|r| r.value(*field))
            .filter(|v| *v != 0.0)
            .collect();
        if valid.len() < 2 {
            continue;
        }

        let max = valid.iter().cloned().fold(f64::MIN, f64::max);
        let min = valid.iter().cloned().fold(f64::MAX, f64::min);
        let range = max - min;
        if range == 0.0 {
            continue;
        }

        for (i, record) in records.iter().enumerate() {
            let diff = match record.value(*field) {
                Some(v) => ((v - current_val).abs() / range).min(1.0),
                None => 1.0,
            };
            weighted_diff[i] += diff * weight;
        }
        total_weight += weight;
    }

    if total_weight == 0.0 {
        tracing::debug!("No similarity field usable, returning corpus head");
        return records
            .iter()
            .take(top_n)
            .map(|record| ScoredRecord { record, score: 0.0 })
            .collect();
    }

    let mut scored: Vec<ScoredRecord<'a>> = records
        .iter()
        .zip(weighted_diff)
        .map(|(record, diff)| ScoredRecord {
            record,
            score: 1.0 - diff / total_weight,
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_n);
    scored
}

// ============================================================================
// Tests
// ============================================================================
