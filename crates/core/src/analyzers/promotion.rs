// crates/core/src/analyzers/promotion.rs
//! Promotion insights: press coverage, visitors per press mention, and
//! social-media activity.

use crate::format::format_number;
use crate::insights::{direction_verb, make_basic_insight, Category, Insight, Section};
use crate::stats::compute_stats;
use crate::thresholds::MIN_COMPARISON_ROWS;
use crate::types::{CurrentRecord, Field, HistoricalRecord};

use super::{field_values, mean, nonzero};

pub fn analyze(
    current: &CurrentRecord,
    records: &[HistoricalRecord],
    group_label: &str,
) -> Vec<Insight> {
    let mut insights = Vec::new();
    let press = nonzero(current.fields.press_count);
    let visitors = nonzero(current.fields.visitors_total);

    if press.is_some() {
        if let Some(ins) = make_basic_insight(
            Category::Promotion,
            Section::Promotion,
            "언론 보도",
            Field::PressCount.label(),
            press,
            compute_stats(records, Field::PressCount).as_ref(),
            "건",
            true,
            2,
            group_label,
        ) {
            insights.push(ins);
        }
    }

    // Reach per mention: how many visitors each press item drew.
    if let (Some(press), Some(visitors)) = (press, visitors) {
        let per_press = visitors / press;
        let valid = field_values(records, Field::VisitorsPerPress);
        if valid.len() >= MIN_COMPARISON_ROWS {
            if let Some(avg) = mean(&valid) {
                let diff = (per_press - avg) / avg.abs() * 100.0;
                let text = format!(
                    "보도 1건당 관객은 {}으로, {} 평균({}) 대비 {:.1}% {}.",
                    format_number(per_press, "명"),
                    group_label,
                    format_number(avg, "명"),
                    diff.abs(),
                    direction_verb(diff),
                );
                insights.push(
                    Insight::new(
                        Category::Promotion,
                        Section::Promotion,
                        "보도건당 관객",
                        text,
                        Field::VisitorsPerPress.label(),
                    )
                    .with_current_value(per_press)
                    .with_reference_avg(avg)
                    .with_priority(1),
                );
            }
        }
    }

    if let Some(posts) = nonzero(current.fields.sns_posts) {
        if let Some(ins) = make_basic_insight(
            Category::Promotion,
            Section::Promotion,
            "SNS 활동",
            Field::SnsPosts.label(),
            Some(posts),
            compute_stats(records, Field::SnsPosts).as_ref(),
            "건",
            true,
            3,
            group_label,
        ) {
            insights.push(ins);
        }
    }

    insights
}

// ============================================================================
// Tests
// ============================================================================
