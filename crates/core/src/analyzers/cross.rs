// crates/core/src/analyzers/cross.rs
//! Cross-metric insights: conjunctions of two independently-computed
//! deviations, e.g. low budget with high attendance. Thresholds live in
//! [`crate::thresholds`].

use crate::format::{format_number, format_percent};
use crate::insights::{diff_pct, Category, Insight, Section};
use crate::stats::{compute_rank, compute_stats};
use crate::thresholds::{
    CROSS_BUDGET_ABOVE_PCT, CROSS_BUDGET_BELOW_PCT, CROSS_PRESS_BELOW_PCT,
    CROSS_VISITORS_ABOVE_PCT, CROSS_VISITORS_BELOW_PCT, MIN_COMPARISON_ROWS,
};
use crate::types::{CurrentRecord, Field, HistoricalRecord};

use super::{field_values, mean, nonzero};

pub fn analyze(
    current: &CurrentRecord,
    records: &[HistoricalRecord],
    group_label: &str,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    let budget = nonzero(current.fields.budget_total);
    let visitors = nonzero(current.fields.visitors_total);
    let revenue = nonzero(current.fields.revenue_total);
    let press = nonzero(current.fields.press_count);

    let budget_stats = compute_stats(records, Field::BudgetTotal);
    let visitor_stats = compute_stats(records, Field::VisitorsTotal);
    let budget_diff = diff_pct(budget, budget_stats.as_ref());
    let visitor_diff = diff_pct(visitors, visitor_stats.as_ref());

    // Budget vs attendance efficiency.
    if let (Some(budget), Some(visitors), Some(b_diff), Some(v_diff)) =
        (budget, visitors, budget_diff, visitor_diff)
    {
        let cost = budget / visitors;
        let cost_stats = compute_stats(records, Field::CostPerVisitor);
        if let Some(cost_stats) = cost_stats.filter(|s| s.count >= MIN_COMPARISON_ROWS) {
            let cost_rank = compute_rank(Some(&cost_stats), cost, true);
            if b_diff < CROSS_BUDGET_BELOW_PCT && v_diff > CROSS_VISITORS_ABOVE_PCT {
                let text = format!(
                    "총 사용 예산은 {} 평균 대비 {:.0}% 낮았으나, 총 관객수는 오히려 {:.0}% 높아 관객당 비용 {}으로 매우 효율적인 운영을 보였습니다 ({}개 전시 중 {}위).",
                    group_label,
                    b_diff.abs(),
                    v_diff.abs(),
                    format_number(cost, "원"),
                    cost_stats.count,
                    cost_rank,
                );
                insights.push(
                    Insight::new(
                        Category::Cross,
                        Section::Evaluation,
                        "예산 대비 관객 효율",
                        text,
                        "예산-관객 효율",
                    )
                    .with_current_value(cost)
                    .with_priority(1),
                );
            } else if b_diff > CROSS_BUDGET_ABOVE_PCT && v_diff < CROSS_VISITORS_BELOW_PCT {
                let text = format!(
                    "총 사용 예산은 {} 평균 대비 {:.0}% 높았으나, 총 관객수는 {:.0}% 낮아 관객당 비용이 {}에 달했습니다. 향후 예산 효율 개선이 필요합니다.",
                    group_label,
                    b_diff.abs(),
                    v_diff.abs(),
                    format_number(cost, "원"),
                );
                insights.push(
                    Insight::new(
                        Category::Cross,
                        Section::Evaluation,
                        "예산 대비 관객 효율",
                        text,
                        "예산-관객 비효율",
                    )
                    .with_current_value(cost)
                    .with_priority(1),
                );
            }
        }
    }

    // Press coverage vs attendance: strong turnout despite thin coverage
    // points at other channels doing the work.
    let press_diff = diff_pct(press, compute_stats(records, Field::PressCount).as_ref());
    if let (Some(_), Some(_), Some(p_diff), Some(v_diff)) =
        (press, visitors, press_diff, visitor_diff)
    {
        if p_diff < CROSS_PRESS_BELOW_PCT && v_diff > CROSS_VISITORS_ABOVE_PCT {
            let text = format!(
                "언론 보도는 {} 평균 대비 {:.0}% 적었으나 총 관객수는 {:.0}% 높아, 보도 외 채널(SNS, 구전 등)의 홍보 효과가 컸던 것으로 보입니다.",
                group_label,
                p_diff.abs(),
                v_diff.abs(),
            );
            insights.push(
                Insight::new(
                    Category::Cross,
                    Section::Evaluation,
                    "홍보 채널 효과",
                    text,
                    "보도-관객 관계",
                ),
            );
        }
    }

    // Recovery overperformance: revenue beats budget while the corpus
    // typically recovers less than it spends.
    if let (Some(revenue), Some(budget)) = (revenue, budget) {
        let recovery = revenue / budget;
        let valid = field_values(records, Field::RevenueToBudget);
        if valid.len() >= MIN_COMPARISON_ROWS {
            if let Some(avg) = mean(&valid) {
                if recovery > 1.0 && avg < 1.0 {
                    let text = format!(
                        "총수입({})이 총예산({})을 초과하여 예산 회수율 {}를 달성했습니다 ({} 평균 {}).",
                        format_number(revenue, "원"),
                        format_number(budget, "원"),
                        format_percent(recovery),
                        group_label,
                        format_percent(avg),
                    );
                    insights.push(
                        Insight::new(
                            Category::Cross,
                            Section::Evaluation,
                            "예산 회수율 초과",
                            text,
                            "예산 회수율",
                        )
                        .with_current_value(recovery)
                        .with_reference_avg(avg)
                        .with_priority(1),
                    );
                }
            }
        }
    }

    insights
}

// ============================================================================
// Tests
// ============================================================================
