// crates/core/src/insights/base.rs
//! Shared base comparison rule: one metric against the comparison group's
//! mean, with percentile, rank, and a templated Korean sentence.

use crate::format::format_number;
use crate::hangul::{particle, TOPIC, TOWARD};
use crate::stats::{compute_percentile, compute_rank, FieldStats};
use crate::thresholds::{MIN_COMPARISON_ROWS, QUALITY_MILD_PCT, QUALITY_STRONG_PCT};

use super::{Category, Insight, Section};

/// Deviation of `value` from the group mean, in percent.
///
/// `None` when the value or stats are missing or the mean is exactly zero
/// (division guard).
pub fn diff_pct(value: Option<f64>, stats: Option<&FieldStats>) -> Option<f64> {
    let value = value?;
    let stats = stats?;
    if stats.mean == 0.0 {
        return None;
    }
    Some((value - stats.mean) / stats.mean.abs() * 100.0)
}

/// Direction verb, chosen purely by the sign of the deviation.
pub fn direction_verb(diff_pct: f64) -> &'static str {
    if diff_pct > 0.0 {
        "상회합니다"
    } else {
        "하회합니다"
    }
}

/// Qualitative adjective for a deviation, in five bands. The banding is
/// mirrored and inverted for metrics where lower is better (cost-like).
pub fn quality_word(diff_pct: f64, higher_is_better: bool) -> &'static str {
    if higher_is_better {
        if diff_pct > QUALITY_STRONG_PCT {
            "매우 우수한"
        } else if diff_pct > QUALITY_MILD_PCT {
            "양호한"
        } else if diff_pct > -QUALITY_MILD_PCT {
            "평균 수준의"
        } else if diff_pct > -QUALITY_STRONG_PCT {
            "다소 저조한"
        } else {
            "저조한"
        }
    } else if diff_pct < -QUALITY_STRONG_PCT {
        "매우 효율적인"
    } else if diff_pct < -QUALITY_MILD_PCT {
        "효율적인"
    } else if diff_pct < QUALITY_MILD_PCT {
        "평균 수준의"
    } else if diff_pct < QUALITY_STRONG_PCT {
        "다소 높은"
    } else {
        "높은"
    }
}

/// Build the standard mean-comparison insight for one metric.
///
/// Yields nothing when the current value is missing, stats are unavailable
/// or cover fewer than [`MIN_COMPARISON_ROWS`] exhibitions, or the reference
/// mean is exactly zero. `higher_is_better = false` flips the rank direction
/// so rank 1 is the lowest observed value.
#[allow(clippy::too_many_arguments)]
pub fn make_basic_insight(
    category: Category,
    section: Section,
    title: &str,
    metric_name: &str,
    current_val: Option<f64>,
    stats: Option<&FieldStats>,
    unit: &str,
    higher_is_better: bool,
    priority: u8,
    group_label: &str,
) -> Option<Insight> {
    let current = current_val?;
    let stats = stats?;
    if stats.count < MIN_COMPARISON_ROWS {
        return None;
    }
    let avg = stats.mean;
    if avg == 0.0 {
        return None;
    }

    let diff = (current - avg) / avg.abs() * 100.0;
    let percentile = compute_percentile(Some(stats), current);
    let rank = compute_rank(Some(stats), current, !higher_is_better);
    let current_fmt = format_number(current, unit);
    let avg_fmt = format_number(avg, unit);
    let topic = particle(metric_name, TOPIC);
    let toward = particle(&current_fmt, TOWARD);

    let text = format!(
        "이번 전시의 {metric_name}{topic} {current_fmt}{toward}, {group_label} 평균({avg_fmt}) 대비 {:.1}% {} ({}개 전시 중 {}위).",
        diff.abs(),
        direction_verb(diff),
        stats.count,
        rank,
    );

    Some(
        Insight::new(category, section, title, text, metric_name)
            .with_current_value(current)
            .with_reference_avg(avg)
            .with_percentile(percentile)
            .with_rank(rank)
            .with_total_count(stats.count)
            .with_priority(priority),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;
    use crate::types::{Field, HistoricalRecord};

    fn corpus_with_budget(values: &[f64]) -> Vec<HistoricalRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let mut r = HistoricalRecord {
                    title: format!("전시 {}", i),
                    ..Default::default()
                };
                r.fields.budget_total = Some(*v);
                r
            })
            .collect()
    }

    #[test]
    fn test_diff_pct() {
        let records = corpus_with_budget(&[90.0, 100.0, 110.0]);
        let stats = compute_stats(&records, Field::BudgetTotal);
        let d = diff_pct(Some(130.0), stats.as_ref()).unwrap();
        assert!((d - 30.0).abs() < 1e-9);
        assert!(diff_pct(None, stats.as_ref()).is_none());
        assert!(diff_pct(Some(130.0), None).is_none());
    }

    #[test]
    fn test_direction_verb() {
        assert_eq!(direction_verb(5.0), "상회합니다");
        assert_eq!(direction_verb(-5.0), "하회합니다");
        assert_eq!(direction_verb(0.0), "하회합니다");
    }

    #[test]
    fn test_quality_word_higher_is_better() {
        assert_eq!(quality_word(45.0, true), "매우 우수한");
        assert_eq!(quality_word(20.0, true), "양호한");
        assert_eq!(quality_word(0.0, true), "평균 수준의");
        assert_eq!(quality_word(-20.0, true), "다소 저조한");
        assert_eq!(quality_word(-45.0, true), "저조한");
    }

    #[test]
    fn test_quality_word_lower_is_better() {
        assert_eq!(quality_word(-45.0, false), "매우 효율적인");
        assert_eq!(quality_word(-20.0, false), "효율적인");
        assert_eq!(quality_word(0.0, false), "평균 수준의");
        assert_eq!(quality_word(20.0, false), "다소 높은");
        assert_eq!(quality_word(45.0, false), "높은");
    }

    #[test]
    fn test_make_basic_insight_worked_example() {
        // Corpus mean 1억원, current 7000만원 -> 30.0% below average
        let records = corpus_with_budget(&[80_000_000.0, 100_000_000.0, 120_000_000.0]);
        let stats = compute_stats(&records, Field::BudgetTotal);
        let ins = make_basic_insight(
            Category::Budget,
            Section::Results,
            "총 사용 예산",
            "총 사용 예산",
            Some(70_000_000.0),
            stats.as_ref(),
            "원",
            true,
            2,
            "역대",
        )
        .unwrap();

        assert!(ins.text.contains("30.0% 하회합니다"), "text: {}", ins.text);
        assert!(ins.text.contains("7000만원"));
        assert!(ins.text.contains("역대 평균(1.0억원)"));
        assert!(ins.text.contains("3개 전시 중 4위"));
        assert_eq!(ins.reference_avg, Some(100_000_000.0));
        assert_eq!(ins.total_count, Some(3));
    }

    #[test]
    fn test_make_basic_insight_gates() {
        let records = corpus_with_budget(&[80.0, 120.0]);
        let stats = compute_stats(&records, Field::BudgetTotal);
        // Only 2 comparison rows: below the insight gate even though stats exist
        assert!(make_basic_insight(
            Category::Budget,
            Section::Results,
            "t",
            "총 사용 예산",
            Some(100.0),
            stats.as_ref(),
            "원",
            true,
            2,
            "역대"
        )
        .is_none());

        let records = corpus_with_budget(&[80.0, 100.0, 120.0]);
        let stats = compute_stats(&records, Field::BudgetTotal);
        assert!(make_basic_insight(
            Category::Budget,
            Section::Results,
            "t",
            "총 사용 예산",
            None,
            stats.as_ref(),
            "원",
            true,
            2,
            "역대"
        )
        .is_none());

        // Zero mean is a division guard
        let records = corpus_with_budget(&[-100.0, 0.0, 100.0]);
        let stats = compute_stats(&records, Field::BudgetTotal);
        assert!(make_basic_insight(
            Category::Budget,
            Section::Results,
            "t",
            "총 사용 예산",
            Some(50.0),
            stats.as_ref(),
            "원",
            true,
            2,
            "역대"
        )
        .is_none());
    }

    #[test]
    fn test_make_basic_insight_lower_is_better_rank() {
        let records = corpus_with_budget(&[10_000.0, 20_000.0, 30_000.0]);
        let stats = compute_stats(&records, Field::BudgetTotal);
        let ins = make_basic_insight(
            Category::Budget,
            Section::Results,
            "관객당 비용",
            "관객당 비용",
            Some(10_000.0),
            stats.as_ref(),
            "원",
            false,
            1,
            "역대",
        )
        .unwrap();
        // Lowest cost ranks first when lower is better
        assert_eq!(ins.rank, Some(1));
    }
}
