// crates/core/src/derived.rs
//! Derived ratio metrics computed on read (never stored back to the source).
//!
//! All functions return `Option<f64>`: a missing or non-positive denominator
//! yields `None` instead of an error or an infinity. These are the canonical
//! denominator-safe ratios every generator reads instead of recomputing ad
//! hoc.

use crate::types::HistoricalRecord;

/// 관객당 비용: total budget spent per visitor. Lower is better.
pub fn cost_per_visitor(budget: Option<f64>, visitors: Option<f64>) -> Option<f64> {
    let budget = budget?;
    let visitors = visitors?;
    if visitors > 0.0 {
        Some(budget / visitors)
    } else {
        None
    }
}

/// 수입_예산_비율: revenue recovered per budget unit (1.0 = break-even).
pub fn revenue_to_budget(revenue: Option<f64>, budget: Option<f64>) -> Option<f64> {
    let revenue = revenue?;
    let budget = budget?;
    if budget > 0.0 {
        Some(revenue / budget)
    } else {
        None
    }
}

/// 유료_비율: paid share of total visitors.
pub fn paid_ratio(paid: Option<f64>, visitors: Option<f64>) -> Option<f64> {
    let paid = paid?;
    let visitors = visitors?;
    if visitors > 0.0 {
        Some(paid / visitors)
    } else {
        None
    }
}

/// 프로그램_참여율: program participants per visitor.
pub fn program_participation(participants: Option<f64>, visitors: Option<f64>) -> Option<f64> {
    let participants = participants?;
    let visitors = visitors?;
    if visitors > 0.0 {
        Some(participants / visitors)
    } else {
        None
    }
}

/// 보도건당_관객: visitors drawn per press mention.
pub fn visitors_per_press(visitors: Option<f64>, press: Option<f64>) -> Option<f64> {
    let visitors = visitors?;
    let press = press?;
    if press > 0.0 {
        Some(visitors / press)
    } else {
        None
    }
}

/// Compute the derived ratio columns into a fresh copy of the table.
///
/// Pure function of the cleaned records; re-run on every analysis, never
/// written back to the source.
pub fn with_derived_metrics(records: &[HistoricalRecord]) -> Vec<HistoricalRecord> {
    records
        .iter()
        .map(|r| {
            let mut out = r.clone();
            let f = &r.fields;
            out.derived.cost_per_visitor = cost_per_visitor(f.budget_total, f.visitors_total);
            out.derived.revenue_to_budget = revenue_to_budget(f.revenue_total, f.budget_total);
            out.derived.paid_ratio = paid_ratio(f.visitors_paid, f.visitors_total);
            out.derived.program_participation =
                program_participation(f.program_participants, f.visitors_total);
            out.derived.visitors_per_press = visitors_per_press(f.visitors_total, f.press_count);
            out
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
