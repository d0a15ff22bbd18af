// crates/core/src/analysis.rs
//! Analysis orchestration: normalize, filter, generate, synthesize, rank.
//!
//! One call runs the whole pipeline against an immutable corpus snapshot;
//! nothing here mutates shared state, so concurrent runs are safe.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analyzers::analyze_all;
use crate::corpus::{exclude_type_zero, filter_by_type, type_label};
use crate::derived::with_derived_metrics;
use crate::format::format_number;
use crate::insights::{
    generate_eval_drafts, sort_by_priority, Category, EvalDraft, EvalType, Insight, Section,
};
use crate::similarity::find_similar;
use crate::thresholds::SIMILAR_TOP_N;
use crate::types::{CurrentRecord, Field, HistoricalRecord};

/// Metric subset shown in the side-by-side comparison table.
pub const COMPARISON_FIELDS: &[Field] = &[
    Field::VisitorsTotal,
    Field::VisitorsDailyAvg,
    Field::BudgetTotal,
    Field::ProgramCount,
    Field::PressCount,
    Field::ArtworksTotal,
];

/// A similar historical exhibition with its score and comparison metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityRow {
    pub title: String,
    pub similarity: f64,
    pub metrics: BTreeMap<Field, f64>,
}

/// Pre-formatted side-by-side table: current exhibition first, then the
/// similar ones. Missing or zero cells render as "—".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Priority-sorted insights (stable within equal priority).
    pub insights: Vec<Insight>,
    /// Deduplicated evaluation drafts in generation order.
    pub eval_drafts: Vec<EvalDraft>,
    pub similar_exhibitions: Vec<SimilarityRow>,
    pub comparison_table: Option<ComparisonTable>,
    /// Which comparison group the sentences refer to.
    pub group_label: String,
    /// Size of the comparison group the insights were computed against.
    pub comparison_count: usize,
}

impl AnalysisResult {
    pub fn insights_by_category(&self) -> BTreeMap<Category, Vec<&Insight>> {
        let mut grouped: BTreeMap<Category, Vec<&Insight>> = BTreeMap::new();
        for ins in &self.insights {
            grouped.entry(ins.category).or_default().push(ins);
        }
        grouped
    }

    pub fn insights_by_section(&self) -> BTreeMap<Section, Vec<&Insight>> {
        let mut grouped: BTreeMap<Section, Vec<&Insight>> = BTreeMap::new();
        for ins in &self.insights {
            grouped.entry(ins.section).or_default().push(ins);
        }
        grouped
    }

    pub fn drafts_of_type(&self, eval_type: EvalType) -> Vec<&EvalDraft> {
        self.eval_drafts
            .iter()
            .filter(|d| d.eval_type == eval_type)
            .collect()
    }
}

/// Run the full analysis pipeline.
///
/// The corpus is cleaned (type 0 removed), enriched with derived ratios
/// into a fresh copy, and restricted to the requested exhibition type when
/// enough peers exist. Similarity always runs against the full
/// type-0-excluded set. An empty corpus degrades to empty results.
pub fn run_analysis(
    current: &CurrentRecord,
    corpus: &[HistoricalRecord],
    exhibition_type: Option<f64>,
) -> AnalysisResult {
    let full = with_derived_metrics(&exclude_type_zero(corpus));
    let typed = filter_by_type(&full, exhibition_type);

    let is_filtered = typed.len() < full.len();
    let group_label = if is_filtered {
        format!("동일 유형({})", type_label(exhibition_type))
    } else {
        "역대".to_string()
    };

    let mut insights = analyze_all(current, &typed, &group_label);
    let eval_drafts = generate_eval_drafts(&insights);
    let (similar_exhibitions, comparison_table) = build_similar(current, &full, SIMILAR_TOP_N);

    sort_by_priority(&mut insights);

    tracing::debug!(
        insights = insights.len(),
        drafts = eval_drafts.len(),
        similar = similar_exhibitions.len(),
        group = %group_label,
        "Analysis complete"
    );

    AnalysisResult {
        insights,
        eval_drafts,
        similar_exhibitions,
        comparison_table,
        group_label,
        comparison_count: typed.len(),
    }
}

/// Build similarity rows and the comparison table against the full corpus.
fn build_similar(
    current: &CurrentRecord,
    records: &[HistoricalRecord],
    top_n: usize,
) -> (Vec<SimilarityRow>, Option<ComparisonTable>) {
    let scored = find_similar(records, current, top_n);
    if scored.is_empty() {
        return (Vec::new(), None);
    }

    let rows: Vec<SimilarityRow> = scored
        .iter()
        .map(|s| {
            let mut metrics = BTreeMap::new();
            for field in COMPARISON_FIELDS {
                if let Some(v) = s.record.value(*field) {
                    metrics.insert(*field, v);
                }
            }
            SimilarityRow {
                title: s.record.title.clone(),
                similarity: s.score,
                metrics,
            }
        })
        .collect();

    let mut columns = vec!["전시명".to_string()];
    columns.extend(COMPARISON_FIELDS.iter().map(|f| f.label().to_string()));

    let current_title = if current.title.is_empty() {
        "현재 전시"
    } else {
        current.title.as_str()
    };
    let mut table_rows = Vec::new();
    let mut current_row = vec![current_title.to_string()];
    for field in COMPARISON_FIELDS {
        current_row.push(cell(current.value(*field), field.unit()));
    }
    table_rows.push(current_row);

    for sim in &rows {
        let mut row = vec![sim.title.clone()];
        for field in COMPARISON_FIELDS {
            row.push(cell(sim.metrics.get(field).copied(), field.unit()));
        }
        table_rows.push(row);
    }

    (
        rows,
        Some(ComparisonTable {
            columns,
            rows: table_rows,
        }),
    )
}

/// Table cell: zero counts as "not recorded", same as missing.
fn cell(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if v != 0.0 => format_number(v, unit),
        _ => "—".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
