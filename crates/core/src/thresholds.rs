// crates/core/src/thresholds.rs
//! Rule thresholds, hoisted out of the generator bodies so the rule set is
//! data-driven and independently testable. Percent values compare against
//! `diff_pct` (deviation from the comparison-group mean, in percent).

/// Comparisons against fewer peers than this are statistically meaningless;
/// both type filtering and insight gating fall back or bail below it.
pub const MIN_COMPARISON_ROWS: usize = 3;

/// Minimum non-missing values for descriptive statistics to exist at all.
pub const MIN_STAT_VALUES: usize = 2;

/// Absolute difference under which a value claims an existing rank slot.
pub const RANK_MATCH_EPSILON: f64 = 0.01;

/// Default number of similar exhibitions returned.
pub const SIMILAR_TOP_N: usize = 5;

// ── Cross-metric conjunctions ────────────────────────────────────────

/// Budget below average by at least this much (efficiency rule).
pub const CROSS_BUDGET_BELOW_PCT: f64 = -5.0;
/// Visitors above average by at least this much (efficiency rule).
pub const CROSS_VISITORS_ABOVE_PCT: f64 = 5.0;
/// Budget above average past this point (inefficiency warning).
pub const CROSS_BUDGET_ABOVE_PCT: f64 = 10.0;
/// Visitors below average past this point (inefficiency warning).
pub const CROSS_VISITORS_BELOW_PCT: f64 = -5.0;
/// Press coverage below average past this point (alternate-channel rule).
pub const CROSS_PRESS_BELOW_PCT: f64 = -10.0;

// ── Evaluation draft synthesis ───────────────────────────────────────

/// Above-average deviation that earns a positive draft.
pub const EVAL_POSITIVE_PCT: f64 = 15.0;
/// Below-average deviation that earns a negative draft.
pub const EVAL_NEGATIVE_PCT: f64 = -15.0;
/// Below-average deviation that earns an improvement draft.
pub const EVAL_IMPROVEMENT_PCT: f64 = -20.0;
/// Cost metrics this far below average earn an efficiency draft.
pub const EVAL_COST_EFFICIENT_PCT: f64 = -10.0;

/// Default confidence attached to auto-drafted evaluation sentences.
pub const EVAL_DEFAULT_CONFIDENCE: f64 = 0.8;

// ── Quality-word bands (see `insights::base::quality_word`) ──────────

pub const QUALITY_STRONG_PCT: f64 = 30.0;
pub const QUALITY_MILD_PCT: f64 = 10.0;
