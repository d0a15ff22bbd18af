// crates/core/src/analyzers/budget.rs
//! Budget insights: total spend, cost per visitor, budget structure, and
//! revenue recovery.

use crate::format::format_number;
use crate::insights::{direction_verb, make_basic_insight, quality_word, Category, Insight, Section};
use crate::stats::{compute_rank, compute_stats};
use crate::thresholds::MIN_COMPARISON_ROWS;
use crate::types::{CurrentRecord, Field, HistoricalRecord};

use super::{collect_ratios, field_values, mean, nonzero};

pub fn analyze(
    current: &CurrentRecord,
    records: &[HistoricalRecord],
    group_label: &str,
) -> Vec<Insight> {
    let mut insights = Vec::new();
    let budget = nonzero(current.fields.budget_total);
    let visitors = nonzero(current.fields.visitors_total);

    if budget.is_some() {
        if let Some(ins) = make_basic_insight(
            Category::Budget,
            Section::Results,
            "총 사용 예산",
            Field::BudgetTotal.label(),
            budget,
            compute_stats(records, Field::BudgetTotal).as_ref(),
            "원",
            true,
            2,
            group_label,
        ) {
            insights.push(ins);
        }
    }

    // Cost per visitor — lower is better, so the rank runs ascending and
    // the quality word uses the inverted banding.
    if let (Some(budget), Some(visitors)) = (budget, visitors) {
        let cost = budget / visitors;
        let valid = field_values(records, Field::CostPerVisitor);
        if valid.len() >= MIN_COMPARISON_ROWS {
            if let Some(avg) = mean(&valid) {
                let diff = (cost - avg) / avg.abs() * 100.0;
                let stats = compute_stats(records, Field::CostPerVisitor);
                let rank = compute_rank(stats.as_ref(), cost, true);
                let text = format!(
                    "관객당 비용은 {}으로, {} 평균({}) 대비 {:.1}% {} ({} 수준).",
                    format_number(cost, "원"),
                    group_label,
                    format_number(avg, "원"),
                    diff.abs(),
                    direction_verb(diff),
                    quality_word(diff, false),
                );
                insights.push(
                    Insight::new(
                        Category::Budget,
                        Section::Results,
                        "관객당 비용",
                        text,
                        Field::CostPerVisitor.label(),
                    )
                    .with_current_value(cost)
                    .with_reference_avg(avg)
                    .with_rank(rank)
                    .with_priority(1),
                );
            }
        }
    }

    // Budget structure: direct-exhibition share of total spend, compared
    // against the corpus mean of the same ratio.
    if let (Some(exhibition), Some(budget)) =
        (nonzero(current.fields.budget_exhibition), budget)
    {
        let share = exhibition / budget;
        let valid = collect_ratios(records, |r| {
            let total = r.fields.budget_total.filter(|b| *b > 0.0)?;
            Some(r.fields.budget_exhibition? / total)
        });
        if valid.len() >= MIN_COMPARISON_ROWS {
            if let Some(avg) = mean(&valid) {
                let text = format!(
                    "전시비 비율은 {:.1}%로, {} 평균({:.1}%)과 비교됩니다. {} 구조입니다.",
                    share * 100.0,
                    group_label,
                    avg * 100.0,
                    if share > avg {
                        "전시 직접비에 집중 투자한"
                    } else {
                        "부대 사업에 상대적으로 많이 배분한"
                    },
                );
                insights.push(
                    Insight::new(Category::Budget, Section::Results, "예산 구조", text, "전시비 비율")
                        .with_current_value(share)
                        .with_reference_avg(avg)
                        .with_priority(3),
                );
            }
        }
    }

    // Revenue recovery ratio against the derived corpus column.
    if let (Some(budget), Some(revenue)) = (budget, nonzero(current.fields.revenue_total)) {
        let ratio = revenue / budget;
        let valid = field_values(records, Field::RevenueToBudget);
        if valid.len() >= MIN_COMPARISON_ROWS {
            if let Some(avg) = mean(&valid) {
                let text = format!(
                    "예산 대비 수입 비율은 {:.1}%로, {} 평균({:.1}%)을 {}합니다.",
                    ratio * 100.0,
                    group_label,
                    avg * 100.0,
                    if ratio > avg { "상회" } else { "하회" },
                );
                insights.push(
                    Insight::new(
                        Category::Budget,
                        Section::Results,
                        "예산 회수율",
                        text,
                        Field::RevenueToBudget.label(),
                    )
                    .with_current_value(ratio)
                    .with_reference_avg(avg)
                    .with_priority(1),
                );
            }
        }
    }

    insights
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_helpers::*;

    #[test]
    fn test_total_budget_insight() {
        let corpus = enriched_corpus();
        let current = current_record();
        let insights = analyze(&current, &corpus, "역대");
        let total = insights
            .iter()
            .find(|i| i.metric_name == "총 사용 예산")
            .expect("budget insight");
        assert_eq!(total.priority, 2);
        assert!(total.text.contains("1.0억원"));
    }

    #[test]
    fn test_cost_per_visitor_quality_word() {
        let corpus = enriched_corpus(); // mean cost 10,000원
        let mut current = current_record();
        current.fields.budget_total = Some(70_000_000.0); // 7,000원/visitor: 30% below
        let insights = analyze(&current, &corpus, "역대");

        let cost = insights
            .iter()
            .find(|i| i.metric_name == "관객당 비용")
            .expect("cost insight");
        assert_eq!(cost.priority, 1);
        assert!(cost.text.contains("30.0% 하회합니다"), "text: {}", cost.text);
        assert!(cost.text.contains("효율적인 수준"), "text: {}", cost.text);
        // Cheapest of the group ranks first (ascending rank)
        assert_eq!(cost.rank, Some(1));
    }

    #[test]
    fn test_budget_structure_framing() {
        let corpus: Vec<_> = enriched_corpus()
            .into_iter()
            .map(|mut r| {
                let b = r.fields.budget_total.unwrap();
                r.fields.budget_exhibition = Some(b * 0.6);
                r
            })
            .collect();
        let mut current = current_record();
        current.fields.budget_exhibition = Some(80_000_000.0); // 80% share vs 60% mean
        let insights = analyze(&current, &corpus, "역대");

        let structure = insights
            .iter()
            .find(|i| i.metric_name == "전시비 비율")
            .expect("structure insight");
        assert!(structure.text.contains("전시 직접비에 집중 투자한"));

        current.fields.budget_exhibition = Some(40_000_000.0); // 40% share
        let insights = analyze(&current, &corpus, "역대");
        let structure = insights
            .iter()
            .find(|i| i.metric_name == "전시비 비율")
            .unwrap();
        assert!(structure.text.contains("부대 사업에 상대적으로 많이 배분한"));
    }

    #[test]
    fn test_recovery_ratio_direction() {
        let corpus: Vec<_> = enriched_corpus()
            .into_iter()
            .map(|mut r| {
                let b = r.fields.budget_total.unwrap();
                r.fields.revenue_total = Some(b * 0.5);
                r
            })
            .collect();
        let corpus = crate::derived::with_derived_metrics(&corpus);

        let mut current = current_record();
        current.fields.revenue_total = Some(80_000_000.0); // 80% vs 50% mean
        let insights = analyze(&current, &corpus, "역대");

        let recovery = insights
            .iter()
            .find(|i| i.metric_name == "예산 회수율")
            .expect("recovery insight");
        assert!(recovery.text.contains("80.0%로"));
        assert!(recovery.text.contains("상회합니다"));
    }

    #[test]
    fn test_no_budget_no_insights() {
        let corpus = enriched_corpus();
        let mut current = current_record();
        current.fields.budget_total = None;
        let insights = analyze(&current, &corpus, "역대");
        assert!(insights.is_empty());
    }
}
