// crates/core/src/analyzers/staff.rs
//! Staffing efficiency: visitors served per operations staff member.

use crate::format::format_number;
use crate::insights::{direction_verb, Category, Insight, Section};
use crate::thresholds::MIN_COMPARISON_ROWS;
use crate::types::{CurrentRecord, HistoricalRecord};

use super::{collect_ratios, mean, nonzero};

pub fn analyze(
    current: &CurrentRecord,
    records: &[HistoricalRecord],
    group_label: &str,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let (Some(staff), Some(visitors)) = (
        nonzero(current.fields.staff_total),
        nonzero(current.fields.visitors_total),
    ) {
        let per_staff = visitors / staff;
        let valid = collect_ratios(records, |r| {
            let staff = r.fields.staff_total.filter(|s| *s > 0.0)?;
            Some(r.fields.visitors_total? / staff)
        });
        if valid.len() >= MIN_COMPARISON_ROWS {
            if let Some(avg) = mean(&valid) {
                let diff = (per_staff - avg) / avg.abs() * 100.0;
                let text = format!(
                    "운영인력 1인당 관객은 {}으로, {} 평균({}) 대비 {:.1}% {}.",
                    format_number(per_staff, "명"),
                    group_label,
                    format_number(avg, "명"),
                    diff.abs(),
                    direction_verb(diff),
                );
                insights.push(
                    Insight::new(
                        Category::Staff,
                        Section::Composition,
                        "인력당 관객",
                        text,
                        "인력당 관객",
                    )
                    .with_current_value(per_staff)
                    .with_reference_avg(avg)
                    .with_priority(3),
                );
            }
        }
    }

    insights
}

// ============================================================================
// Tests
// ============================================================================
