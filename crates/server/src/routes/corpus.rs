// crates/server/src/routes/corpus.rs
//! GET /api/corpus endpoint: summary of the loaded reference corpus.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use expo_lens_core::{exclude_type_zero, type_label};

use crate::state::AppState;

/// Summary of the loaded corpus.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct CorpusSummary {
    /// All loaded rows, including non-comparable special exhibitions.
    pub total_records: usize,
    /// Rows eligible for comparison (type 0 excluded).
    pub comparable_records: usize,
    /// Row counts per exhibition-type label.
    pub types: BTreeMap<String, usize>,
    /// Where the corpus was loaded from.
    pub source: String,
}

/// GET /api/corpus - Describe the loaded reference corpus.
pub async fn corpus_summary(State(state): State<Arc<AppState>>) -> Json<CorpusSummary> {
    let mut types: BTreeMap<String, usize> = BTreeMap::new();
    for record in &state.corpus {
        let label = match record.exhibition_type {
            Some(t) => type_label(Some(t)),
            None => "유형 미상".to_string(),
        };
        *types.entry(label).or_insert(0) += 1;
    }

    Json(CorpusSummary {
        total_records: state.corpus.len(),
        comparable_records: exclude_type_zero(&state.corpus).len(),
        types,
        source: state.corpus_path.display().to_string(),
    })
}

/// Create the corpus routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/corpus", get(corpus_summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use expo_lens_core::HistoricalRecord;
    use std::path::PathBuf;

    fn typed(title: &str, ty: Option<f64>) -> HistoricalRecord {
        HistoricalRecord {
            title: title.to_string(),
            exhibition_type: ty,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_corpus_summary_counts() {
        let corpus = vec![
            typed("특별전", Some(0.0)),
            typed("기획전 A", Some(1.0)),
            typed("기획전 B", Some(1.0)),
            typed("유형 없음", None),
        ];
        let state = AppState::new(corpus, PathBuf::from("reference.csv"));
        let Json(summary) = corpus_summary(State(state)).await;

        assert_eq!(summary.total_records, 4);
        assert_eq!(summary.comparable_records, 3);
        assert_eq!(summary.types.get("0유형"), Some(&1));
        assert_eq!(summary.types.get("1유형"), Some(&2));
        assert_eq!(summary.types.get("유형 미상"), Some(&1));
        assert_eq!(summary.source, "reference.csv");
    }
}
