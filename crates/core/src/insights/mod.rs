// crates/core/src/insights/mod.rs
//! Typed insight output units, the shared base comparison rule, and the
//! evaluation-draft synthesizer.

pub mod base;
pub mod eval;

pub use base::*;
pub use eval::*;

use serde::{Deserialize, Serialize};

use crate::thresholds::EVAL_DEFAULT_CONFIDENCE;

/// Analysis category taxonomy. Fixed; generators each own one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Audience,
    Budget,
    Program,
    Artwork,
    Promotion,
    Staff,
    Cross,
}

impl Category {
    /// Fixed generator/concatenation order.
    pub const ORDER: &'static [Category] = &[
        Category::Audience,
        Category::Budget,
        Category::Program,
        Category::Artwork,
        Category::Promotion,
        Category::Staff,
        Category::Cross,
    ];

    /// Display label for category headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Audience => "관객 분석",
            Category::Budget => "예산 효율",
            Category::Program => "프로그램 밀도",
            Category::Artwork => "작품 규모",
            Category::Promotion => "홍보 효과",
            Category::Staff => "인력 효율",
            Category::Cross => "교차 분석",
        }
    }
}

/// Coarse report-placement tag for an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Results,
    Composition,
    Promotion,
    Evaluation,
}

impl Section {
    /// Report heading this section maps to.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Results => "IV. 전시 결과",
            Section::Composition => "III. 전시 구성",
            Section::Promotion => "V. 홍보",
            Section::Evaluation => "VI. 평가",
        }
    }
}

/// Default mid priority for insights that carry no explicit weighting.
pub const DEFAULT_PRIORITY: u8 = 2;

/// One generated analysis finding. Immutable after creation except for the
/// consumer's own priority re-sorts and text edits (the text is an opaque
/// string past this point).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub category: Category,
    pub section: Section,
    pub title: String,
    pub text: String,
    pub metric_name: String,
    pub current_value: Option<f64>,
    pub reference_avg: Option<f64>,
    pub percentile: Option<u32>,
    pub rank: Option<usize>,
    pub total_count: Option<usize>,
    /// Lower = more important; controls display order and default inclusion.
    pub priority: u8,
    pub selected: bool,
}

impl Insight {
    pub fn new(
        category: Category,
        section: Section,
        title: impl Into<String>,
        text: impl Into<String>,
        metric_name: impl Into<String>,
    ) -> Self {
        Self {
            category,
            section,
            title: title.into(),
            text: text.into(),
            metric_name: metric_name.into(),
            current_value: None,
            reference_avg: None,
            percentile: None,
            rank: None,
            total_count: None,
            priority: DEFAULT_PRIORITY,
            selected: true,
        }
    }

    pub fn with_current_value(mut self, value: f64) -> Self {
        self.current_value = Some(value);
        self
    }

    pub fn with_reference_avg(mut self, avg: f64) -> Self {
        self.reference_avg = Some(avg);
        self
    }

    pub fn with_percentile(mut self, percentile: u32) -> Self {
        self.percentile = Some(percentile);
        self
    }

    pub fn with_rank(mut self, rank: usize) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn with_total_count(mut self, count: usize) -> Self {
        self.total_count = Some(count);
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

/// Sort insights by ascending priority. Stable: relative order within equal
/// priority (the fixed category order) is preserved.
pub fn sort_by_priority(insights: &mut [Insight]) {
    insights.sort_by_key(|i| i.priority);
}

/// Kind of auto-drafted evaluation statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalType {
    Positive,
    Negative,
    Improvement,
}

impl EvalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvalType::Positive => "positive",
            EvalType::Negative => "negative",
            EvalType::Improvement => "improvement",
        }
    }
}

/// An auto-drafted evaluation sentence derived from one insight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalDraft {
    pub eval_type: EvalType,
    pub text: String,
    pub source_metric: String,
    pub confidence: f64,
    pub selected: bool,
}

impl EvalDraft {
    pub fn new(eval_type: EvalType, text: impl Into<String>, source_metric: impl Into<String>) -> Self {
        Self {
            eval_type,
            text: text.into(),
            source_metric: source_metric.into(),
            confidence: EVAL_DEFAULT_CONFIDENCE,
            selected: true,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_builder_defaults() {
        let ins = Insight::new(
            Category::Audience,
            Section::Results,
            "총 관객수",
            "본문",
            "총 관객수",
        );
        assert_eq!(ins.priority, DEFAULT_PRIORITY);
        assert!(ins.selected);
        assert!(ins.current_value.is_none());

        let ins = ins.with_current_value(3000.0).with_priority(1).with_rank(2);
        assert_eq!(ins.current_value, Some(3000.0));
        assert_eq!(ins.priority, 1);
        assert_eq!(ins.rank, Some(2));
    }

    #[test]
    fn test_sort_by_priority_is_stable() {
        let mut insights = vec![
            Insight::new(Category::Audience, Section::Results, "a", "", "a").with_priority(2),
            Insight::new(Category::Budget, Section::Results, "b", "", "b").with_priority(1),
            Insight::new(Category::Program, Section::Results, "c", "", "c").with_priority(2),
        ];
        sort_by_priority(&mut insights);
        assert_eq!(insights[0].title, "b");
        // Equal priorities keep their original relative order
        assert_eq!(insights[1].title, "a");
        assert_eq!(insights[2].title, "c");
    }

    #[test]
    fn test_category_order_covers_taxonomy() {
        assert_eq!(Category::ORDER.len(), 7);
        assert_eq!(Category::ORDER[0], Category::Audience);
        assert_eq!(Category::ORDER[6], Category::Cross);
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::Results.label(), "IV. 전시 결과");
        assert_eq!(Section::Evaluation.label(), "VI. 평가");
    }

    #[test]
    fn test_eval_draft_defaults() {
        let draft = EvalDraft::new(EvalType::Positive, "잘했습니다.", "총 관객수");
        assert_eq!(draft.confidence, EVAL_DEFAULT_CONFIDENCE);
        assert!(draft.selected);
        assert_eq!(draft.eval_type.as_str(), "positive");
    }

    #[test]
    fn test_insight_serialization_camel_case() {
        let ins = Insight::new(Category::Cross, Section::Evaluation, "t", "x", "m")
            .with_current_value(1.0);
        let json = serde_json::to_string(&ins).unwrap();
        assert!(json.contains("\"metricName\":\"m\""));
        assert!(json.contains("\"currentValue\":1.0"));
        assert!(json.contains("\"category\":\"cross\""));
    }
}
