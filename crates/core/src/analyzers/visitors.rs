// crates/core/src/analyzers/visitors.rs
//! Audience insights: total and daily visitors, paid share, student and
//! art-pass attendance.

use crate::insights::{make_basic_insight, Category, Insight, Section};
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

    if let Some(v) = nonzero(current.fields.visitors_total) {
        if let Some(ins) = make_basic_insight(
            Category::Audience,
            Section::Results,
            "총 관객수",
            Field::VisitorsTotal.label(),
            Some(v),
            compute_stats(records, Field::VisitorsTotal).as_ref(),
            "명",
            true,
            1,
            group_label,
        ) {
            insights.push(ins);
        }
    }

    if let Some(v) = nonzero(current.fields.visitors_daily_avg) {
        if let Some(ins) = make_basic_insight(
            Category::Audience,
            Section::Results,
            "일평균 관객수",
            Field::VisitorsDailyAvg.label(),
            Some(v),
            compute_stats(records, Field::VisitorsDailyAvg).as_ref(),
            "명",
            true,
            2,
            group_label,
        ) {
            insights.push(ins);
        }
    }

    // Paid share: direct mean comparison on the derived ratio column, stated
    // in percentage points rather than routed through percentile/rank.
    if let (Some(paid), Some(total)) = (
        nonzero(current.fields.visitors_paid),
        nonzero(current.fields.visitors_total),
    ) {
        let ratio = paid / total;
        let valid = field_values(records, Field::PaidRatio);
        if valid.len() >= MIN_COMPARISON_ROWS {
            if let Some(avg) = mean(&valid) {
                let text = format!(
                    "유료 관객 비율은 {:.1}%로, {} 평균({:.1}%) 대비 {:.1}%p {}.",
                    ratio * 100.0,
                    group_label,
                    avg * 100.0,
                    (ratio - avg).abs() * 100.0,
                    if ratio > avg { "높습니다" } else { "낮습니다" },
                );
                insights.push(
                    Insight::new(
                        Category::Audience,
                        Section::Results,
                        "유료 관객 비율",
                        text,
                        Field::PaidRatio.label(),
                    )
                    .with_current_value(ratio)
                    .with_reference_avg(avg),
                );
            }
        }
    }

    if let (Some(student), Some(_total)) = (
        nonzero(current.fields.visitors_student),
        nonzero(current.fields.visitors_total),
    ) {
        if let Some(ins) = make_basic_insight(
            Category::Audience,
            Section::Results,
            "학생 관객수",
            Field::VisitorsStudent.label(),
            Some(student),
            compute_stats(records, Field::VisitorsStudent).as_ref(),
            "명",
            true,
            3,
            group_label,
        ) {
            insights.push(ins);
        }
    }

    if let Some(artpass) = nonzero(current.fields.visitors_art_pass) {
        if let Some(ins) = make_basic_insight(
            Category::Audience,
            Section::Results,
            "예술인패스 관객",
            Field::VisitorsArtPass.label(),
            Some(artpass),
            compute_stats(records, Field::VisitorsArtPass).as_ref(),
            "명",
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
