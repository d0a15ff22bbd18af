// crates/core/src/analyzers/mod.rs
//! Category-specific insight generators.
//!
//! Each module is a pure function of (current record, filtered corpus,
//! group label) and returns zero or more [`Insight`]s. None of them touch
//! shared state, so the orchestrator is free to fan them out; their outputs
//! are concatenated in the fixed category order before the global priority
//! sort.

pub mod visitors;
pub mod budget;
pub mod programs;
pub mod artworks;
pub mod promotion;
pub mod staff;
pub mod cross;

use crate::insights::Insight;
use crate::types::{CurrentRecord, Field, HistoricalRecord};

/// Run every category generator against the comparison group.
pub fn analyze_all(
    current: &CurrentRecord,
    records: &[HistoricalRecord],
    group_label: &str,
) -> Vec<Insight> {
    let mut insights = Vec::new();
    insights.extend(visitors::analyze(current, records, group_label));
    insights.extend(budget::analyze(current, records, group_label));
    insights.extend(programs::analyze(current, records, group_label));
    insights.extend(artworks::analyze(current, records, group_label));
    insights.extend(promotion::analyze(current, records, group_label));
    insights.extend(staff::analyze(current, records, group_label));
    insights.extend(cross::analyze(current, records, group_label));
    insights
}

/// Helper: average of a slice, `None` when empty.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Helper: treat zero as "not entered" — form fields left at 0 carry no
/// signal, mirroring how the registry records absent figures.
pub(crate) fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Helper: non-missing values of one field across the corpus subset.
pub(crate) fn field_values(records: &[HistoricalRecord], field: Field) -> Vec<f64> {
    records.iter().filter_map(|r| r.value(field)).collect()
}

/// Helper: per-row ratios computed by a caller-supplied guard closure
/// (used for ratios that are not canonical derived columns).
pub(crate) fn collect_ratios<F>(records: &[HistoricalRecord], ratio: F) -> Vec<f64>
where
    F: Fn(&HistoricalRecord) -> Option<f64>,
{
    records.iter().filter_map(ratio).collect()
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use test_helpers::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_nonzero() {
        assert_eq!(nonzero(Some(5.0)), Some(5.0));
        assert_eq!(nonzero(Some(0.0)), None);
        assert_eq!(nonzero(None), None);
    }

    #[test]
    fn test_field_values_reads_derived_columns() {
        let corpus = enriched_corpus();
        let ratios = field_values(&corpus, Field::PaidRatio);
        assert_eq!(ratios.len(), 5);
        assert!(ratios.iter().all(|r| (*r - 0.3).abs() < 1e-9));
    }

    #[test]
    fn test_analyze_all_concatenates_in_category_order() {
        let corpus = enriched_corpus();
        let current = current_record();
        let insights = analyze_all(&current, &corpus, "역대");

        assert!(!insights.is_empty());
        // Category blocks appear in the fixed order
        let positions: Vec<usize> = crate::insights::Category::ORDER
            .iter()
            .filter_map(|cat| insights.iter().position(|i| i.category == *cat))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_analyze_all_empty_corpus() {
        let current = current_record();
        assert!(analyze_all(&current, &[], "역대").is_empty());
    }
}
