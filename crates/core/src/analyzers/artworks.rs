// crates/core/src/analyzers/artworks.rs
//! Artwork insights: total works plus medium-composition analysis against
//! the historical norm for the dominant medium.

use crate::format::format_number;
use crate::insights::{make_basic_insight, Category, Insight, Section};
use crate::stats::compute_stats;
use crate::thresholds::MIN_COMPARISON_ROWS;
use crate::types::{CurrentRecord, Field, HistoricalRecord};

use super::{collect_ratios, mean, nonzero};

/// Fixed medium taxonomy, in display order.
pub const MEDIA_FIELDS: &[(Field, &str)] = &[
    (Field::ArtworksPainting, "회화"),
    (Field::ArtworksSculpture, "조각"),
    (Field::ArtworksPhoto, "사진"),
    (Field::ArtworksInstallation, "설치"),
    (Field::ArtworksMedia, "미디어"),
    (Field::ArtworksOther, "기타"),
];

pub fn analyze(
    current: &CurrentRecord,
    records: &[HistoricalRecord],
    group_label: &str,
) -> Vec<Insight> {
    let mut insights = Vec::new();
    let total = nonzero(current.fields.artworks_total);

    if total.is_some() {
        if let Some(ins) = make_basic_insight(
            Category::Artwork,
            Section::Composition,
            "출품 작품 수",
            Field::ArtworksTotal.label(),
            total,
            compute_stats(records, Field::ArtworksTotal).as_ref(),
            "점",
            true,
            2,
            group_label,
        ) {
            insights.push(ins);
        }
    }

    if let Some(total) = total {
        if let Some(ins) = medium_composition(current, records, total, group_label) {
            insights.push(ins);
        }
    }

    insights
}

/// Identify the dominant medium of the current exhibition and compare its
/// share against the corpus average share for that same medium.
fn medium_composition(
    current: &CurrentRecord,
    records: &[HistoricalRecord],
    total: f64,
    group_label: &str,
) -> Option<Insight> {
    let current_media: Vec<(&str, f64)> = MEDIA_FIELDS
        .iter()
        .filter_map(|(field, label)| {
            let v = current.value(*field).unwrap_or(0.0);
            (v > 0.0).then_some((*label, v))
        })
        .collect();
    if current_media.is_empty() {
        return None;
    }

    // First strictly-largest entry wins ties, in taxonomy order.
    let (dominant_label, dominant_count) = current_media
        .iter()
        .fold(current_media[0], |best, item| {
            if item.1 > best.1 {
                *item
            } else {
                best
            }
        });
    let dominant_pct = dominant_count / total * 100.0;

    // Corpus average share per medium, each needing enough valid ratio rows.
    let mut reference_shares: Vec<(&str, f64)> = Vec::new();
    for (field, label) in MEDIA_FIELDS {
        let ratios = collect_ratios(records, |r| {
            let t = r.fields.artworks_total.filter(|t| *t > 0.0)?;
            Some(r.value(*field)? / t)
        });
        if ratios.len() >= MIN_COMPARISON_ROWS {
            if let Some(avg) = mean(&ratios) {
                reference_shares.push((*label, avg * 100.0));
            }
        }
    }
    if reference_shares.is_empty() {
        return None;
    }

    let reference_dominant_pct = reference_shares
        .iter()
        .find(|(label, _)| *label == dominant_label)
        .map(|(_, pct)| *pct)
        .unwrap_or(0.0);

    let parts: Vec<String> = current_media
        .iter()
        .map(|(label, count)| {
            format!(
                "{} {}({:.0}%)",
                label,
                format_number(*count, "점"),
                count / total * 100.0
            )
        })
        .collect();

    let mut text = format!("출품 작품의 매체 구성은 {}입니다. ", parts.join(", "));
    if reference_dominant_pct > 0.0 {
        text.push_str(&format!(
            "{}의 비중({:.0}%)은 {} 평균({:.0}%)과 비교하여 {} 편입니다.",
            dominant_label,
            dominant_pct,
            group_label,
            reference_dominant_pct,
            if dominant_pct > reference_dominant_pct {
                "높은"
            } else {
                "낮은"
            },
        ));
    }

    Some(
        Insight::new(
            Category::Artwork,
            Section::Composition,
            "매체별 작품 구성",
            text,
            "매체별 작품 구성",
        )
        .with_current_value(dominant_pct)
        .with_reference_avg(reference_dominant_pct),
    )
}

// ============================================================================
// Tests
// ============================================================================
