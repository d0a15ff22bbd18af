// crates/core/src/analyzers/programs.rs
//! Program insights: count, participants, and participation rate.

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

    if let Some(count) = nonzero(current.fields.program_count) {
        if let Some(ins) = make_basic_insight(
            Category::Program,
            Section::Composition,
            "프로그램 수",
            Field::ProgramCount.label(),
            Some(count),
            compute_stats(records, Field::ProgramCount).as_ref(),
            "개",
            true,
            2,
            group_label,
        ) {
            insights.push(ins);
        }
    }

    if let Some(participants) = nonzero(current.fields.program_participants) {
        if let Some(ins) = make_basic_insight(
            Category::Program,
            Section::Composition,
            "프로그램 참여 인원",
            Field::ProgramParticipants.label(),
            Some(participants),
            compute_stats(records, Field::ProgramParticipants).as_ref(),
            "명",
            true,
            2,
            group_label,
        ) {
            insights.push(ins);
        }
    }

    // Participation rate: participants over total visitors, in %p terms.
    if let (Some(participants), Some(visitors)) = (
        nonzero(current.fields.program_participants),
        nonzero(current.fields.visitors_total),
    ) {
        let rate = participants / visitors;
        let valid = field_values(records, Field::ProgramParticipation);
        if valid.len() >= MIN_COMPARISON_ROWS {
            if let Some(avg) = mean(&valid) {
                let text = format!(
                    "프로그램 참여율(참여인원/총관객)은 {:.1}%로, {} 평균({:.1}%) 대비 {:.1}%p {}.",
                    rate * 100.0,
                    group_label,
                    avg * 100.0,
                    (rate - avg).abs() * 100.0,
                    if rate > avg { "높습니다" } else { "낮습니다" },
                );
                insights.push(
                    Insight::new(
                        Category::Program,
                        Section::Composition,
                        "프로그램 참여율",
                        text,
                        Field::ProgramParticipation.label(),
                    )
                    .with_current_value(rate)
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
