// crates/core/src/insights/eval.rs
//! Evaluation-draft synthesizer: scans generated insights and drafts
//! positive / negative / improvement statements from deviation thresholds
//! and metric-name keywords.
//!
//! Branch order matters and is kept exactly as shipped: the audience
//! keyword is tested first, so e.g. "관객당 비용" takes the audience wording
//! in the positive branch while still drawing its own cost drafts from the
//! dedicated cost rules.

use std::collections::HashSet;

use crate::format::format_percent;
use crate::thresholds::{
    EVAL_COST_EFFICIENT_PCT, EVAL_IMPROVEMENT_PCT, EVAL_NEGATIVE_PCT, EVAL_POSITIVE_PCT,
};

use super::{EvalDraft, EvalType, Insight};

/// Metric-name keywords driving draft wording.
pub const KW_AUDIENCE: &str = "관객";
pub const KW_COST: &str = "비용";
pub const KW_PARTICIPATION: &str = "참여";
pub const KW_RECOVERY: &str = "회수";
pub const KW_PRESS: &str = "보도";

/// Derive evaluation drafts from the full insight list.
///
/// Only insights carrying both a current value and a non-zero reference
/// mean participate. The result is deduplicated per
/// (eval type, source metric), first occurrence in generation order wins.
pub fn generate_eval_drafts(insights: &[Insight]) -> Vec<EvalDraft> {
    let mut drafts = Vec::new();

    for ins in insights {
        let (Some(current), Some(avg)) = (ins.current_value, ins.reference_avg) else {
            continue;
        };
        if avg == 0.0 {
            continue;
        }

        let diff = (current - avg) / avg.abs() * 100.0;
        let name = ins.metric_name.as_str();

        // ── Positive ──
        if diff > EVAL_POSITIVE_PCT {
            if name.contains(KW_AUDIENCE) {
                drafts.push(EvalDraft::new(
                    EvalType::Positive,
                    format!(
                        "{}이 역대 평균 대비 {:.0}% 높은 우수한 성과를 기록했습니다.",
                        name,
                        diff.abs()
                    ),
                    name,
                ));
            } else if name.contains(KW_COST) && diff < 0.0 {
                drafts.push(EvalDraft::new(
                    EvalType::Positive,
                    "관객당 비용이 역대 평균보다 낮아 효율적인 예산 운영이 이루어졌습니다.",
                    name,
                ));
            } else if name.contains(KW_PARTICIPATION) {
                drafts.push(EvalDraft::new(
                    EvalType::Positive,
                    "프로그램 참여율이 역대 평균을 상회하여 관객 경험 강화에 효과적으로 기여했습니다.",
                    name,
                ));
            } else if name.contains(KW_RECOVERY) {
                drafts.push(EvalDraft::new(
                    EvalType::Positive,
                    format!(
                        "예산 회수율이 {}로, 수입 확보 면에서 양호한 결과를 보였습니다.",
                        format_percent(current)
                    ),
                    name,
                ));
            } else {
                drafts.push(EvalDraft::new(
                    EvalType::Positive,
                    format!("{}이 역대 평균 대비 우수한 수준입니다.", name),
                    name,
                ));
            }
        }

        // Low cost per visitor is a positive on its own, independent of the
        // rule above.
        if name.contains(KW_COST) && diff < EVAL_COST_EFFICIENT_PCT {
            drafts.push(EvalDraft::new(
                EvalType::Positive,
                format!(
                    "관객당 비용이 역대 평균보다 {:.0}% 낮아 효율적인 예산 운영이 이루어졌습니다.",
                    diff.abs()
                ),
                name,
            ));
        }

        // ── Negative ──
        if diff < EVAL_NEGATIVE_PCT {
            if name.contains(KW_AUDIENCE) && !name.contains(KW_COST) {
                drafts.push(EvalDraft::new(
                    EvalType::Negative,
                    format!(
                        "{}이 역대 평균 대비 {:.0}% 낮은 수치를 기록했습니다.",
                        name,
                        diff.abs()
                    ),
                    name,
                ));
            } else if name.contains(KW_PARTICIPATION) {
                drafts.push(EvalDraft::new(
                    EvalType::Negative,
                    "프로그램 참여율이 역대 평균에 미치지 못하여, 프로그램 기획 및 홍보 전략 재검토가 필요합니다.",
                    name,
                ));
            }
        }

        // High cost per visitor is a negative.
        if name.contains(KW_COST) && diff > EVAL_POSITIVE_PCT {
            drafts.push(EvalDraft::new(
                EvalType::Negative,
                format!(
                    "관객당 비용이 역대 평균보다 {:.0}% 높아, 예산 효율성 면에서 개선이 필요합니다.",
                    diff.abs()
                ),
                name,
            ));
        }

        // ── Improvement ──
        if diff < EVAL_IMPROVEMENT_PCT {
            if name.contains(KW_AUDIENCE) && !name.contains(KW_COST) {
                drafts.push(EvalDraft::new(
                    EvalType::Improvement,
                    "관객 유치 확대를 위한 다채널 홍보 전략 및 타깃 마케팅 강화가 필요합니다.",
                    name,
                ));
            } else if name.contains(KW_PARTICIPATION) {
                drafts.push(EvalDraft::new(
                    EvalType::Improvement,
                    "프로그램 참여율 제고를 위해 사전 예약 시스템 도입이나 참여형 프로그램 확대를 검토할 수 있습니다.",
                    name,
                ));
            } else if name.contains(KW_PRESS) {
                drafts.push(EvalDraft::new(
                    EvalType::Improvement,
                    "언론 노출 확대를 위해 보도자료 배포 시점 및 매체 타깃팅 전략을 재검토할 필요가 있습니다.",
                    name,
                ));
            }
        }
    }

    dedup_drafts(drafts)
}

/// Keep the first draft per (eval type, source metric).
pub fn dedup_drafts(drafts: Vec<EvalDraft>) -> Vec<EvalDraft> {
    let mut seen = HashSet::new();
    drafts
        .into_iter()
        .filter(|d| seen.insert((d.eval_type, d.source_metric.clone())))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
