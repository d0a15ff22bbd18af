// crates/server/src/routes/analyze.rs
//! POST /api/analyze endpoint: run the full comparison pipeline for one
//! exhibition against the loaded corpus.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use expo_lens_core::insights::{EvalDraft, EvalType, Insight};
use expo_lens_core::{run_analysis, ComparisonTable, CurrentRecord, SimilarityRow};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body: the current exhibition as a flat field mapping, plus an
/// optional exhibition type selecting the comparison group.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(flatten)]
    pub current: CurrentRecord,
}

/// Evaluation drafts partitioned by type.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct DraftGroups {
    pub positive: Vec<EvalDraft>,
    pub negative: Vec<EvalDraft>,
    pub improvement: Vec<EvalDraft>,
}

/// Response metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct AnalyzeMeta {
    pub group_label: String,
    pub comparison_count: usize,
    pub corpus_size: usize,
}

/// Full analysis API response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct AnalyzeResponse {
    /// Priority-sorted insights.
    pub insights: Vec<Insight>,
    /// Deduplicated drafts grouped by evaluation type.
    pub eval_drafts: DraftGroups,
    pub similar_exhibitions: Vec<SimilarityRow>,
    pub comparison_table: Option<ComparisonTable>,
    pub meta: AnalyzeMeta,
}

/// POST /api/analyze - Compare one exhibition against the corpus.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    if state.corpus.is_empty() {
        return Err(ApiError::Internal("reference corpus is empty".to_string()));
    }

    let exhibition_type = request.current.exhibition_type;
    let result = run_analysis(&request.current, &state.corpus, exhibition_type);

    let partition = |t: EvalType| -> Vec<EvalDraft> {
        result
            .eval_drafts
            .iter()
            .filter(|d| d.eval_type == t)
            .cloned()
            .collect()
    };

    let eval_drafts = DraftGroups {
        positive: partition(EvalType::Positive),
        negative: partition(EvalType::Negative),
        improvement: partition(EvalType::Improvement),
    };

    tracing::info!(
        title = %request.current.title,
        insights = result.insights.len(),
        group = %result.group_label,
        "Analysis served"
    );

    Ok(Json(AnalyzeResponse {
        meta: AnalyzeMeta {
            group_label: result.group_label.clone(),
            comparison_count: result.comparison_count,
            corpus_size: state.corpus.len(),
        },
        eval_drafts,
        similar_exhibitions: result.similar_exhibitions,
        comparison_table: result.comparison_table,
        insights: result.insights,
    }))
}

/// Create the analyze routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze))
}
