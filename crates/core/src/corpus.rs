// crates/core/src/corpus.rs
//! Reference-corpus ingestion and comparison-group filtering.
//!
//! The corpus arrives as a CSV export of the registry sheet: one header row
//! carrying the Korean column vocabulary, one row per past exhibition.
//! Cleaning rules: rows without a title are dropped, sentinel "no data"
//! tokens become missing, numeric coercion failures become missing. Nothing
//! in here raises for bad cell data — only an unreadable file is an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::CorpusError;
use crate::thresholds::MIN_COMPARISON_ROWS;
use crate::types::{Field, HistoricalRecord, TITLE_COLUMN, TYPE_COLUMN};

/// Exhibition type reserved for non-comparable special exhibitions.
pub const EXCLUDED_TYPE: f64 = 0.0;

/// Load the reference corpus from a CSV file.
pub fn load_corpus(path: &Path) -> Result<Vec<HistoricalRecord>, CorpusError> {
    let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
    read_corpus(file, path)
}

/// Parse corpus CSV from any reader. `path` is only used for error context.
pub fn read_corpus<R: Read>(reader: R, path: &Path) -> Result<Vec<HistoricalRecord>, CorpusError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CorpusError::MalformedCsv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    if headers.is_empty() {
        return Err(CorpusError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let column_index = |name: &str| headers.iter().position(|h| h.trim() == name);

    let title_idx = column_index(TITLE_COLUMN).ok_or(CorpusError::MissingTitleColumn {
        path: path.to_path_buf(),
        column: TITLE_COLUMN,
    })?;
    let type_idx = column_index(TYPE_COLUMN);

    let field_indices: Vec<(Field, Option<usize>)> = Field::INGESTED
        .iter()
        .map(|f| (*f, f.column().and_then(column_index)))
        .collect();

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in csv_reader.records() {
        let row = row.map_err(|e| CorpusError::MalformedCsv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let title = row.get(title_idx).map(str::trim).unwrap_or_default();
        if title.is_empty() || is_missing(title) {
            dropped += 1;
            continue;
        }

        let mut record = HistoricalRecord {
            title: title.to_string(),
            exhibition_type: type_idx.and_then(|i| parse_numeric(row.get(i).unwrap_or_default())),
            ..Default::default()
        };
        for (field, idx) in &field_indices {
            let value = idx.and_then(|i| parse_numeric(row.get(i).unwrap_or_default()));
            record.fields.set(*field, value);
        }
        records.push(record);
    }

    tracing::debug!(
        loaded = records.len(),
        dropped_untitled = dropped,
        path = %path.display(),
        "Reference corpus loaded"
    );

    Ok(records)
}

/// Sentinel tokens meaning "no data was recorded".
fn is_missing(s: &str) -> bool {
    matches!(s, "" | "-" | "—")
}

/// Coerce a cell to a number. Sentinels and unparseable text become `None`.
fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    if is_missing(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Remove type-0 (special) exhibitions. Rows with an unknown type are kept.
pub fn exclude_type_zero(records: &[HistoricalRecord]) -> Vec<HistoricalRecord> {
    records
        .iter()
        .filter(|r| r.exhibition_type != Some(EXCLUDED_TYPE))
        .cloned()
        .collect()
}

/// Restrict the corpus to one exhibition type. Type 0 is always excluded.
///
/// `None` means the whole corpus minus type 0. When the typed subset has
/// fewer than [`MIN_COMPARISON_ROWS`] rows the comparison would be
/// meaningless, so the type-0-excluded full set is returned instead.
pub fn filter_by_type(
    records: &[HistoricalRecord],
    exhibition_type: Option<f64>,
) -> Vec<HistoricalRecord> {
    let base = exclude_type_zero(records);
    let Some(target) = exhibition_type else {
        return base;
    };

    let filtered: Vec<HistoricalRecord> = base
        .iter()
        .filter(|r| r.exhibition_type == Some(target))
        .cloned()
        .collect();

    if filtered.len() < MIN_COMPARISON_ROWS {
        tracing::debug!(
            exhibition_type = target,
            matching = filtered.len(),
            "Typed subset too small, falling back to full corpus"
        );
        base
    } else {
        filtered
    }
}

/// Display label for an exhibition type ("전체" when unspecified).
pub fn type_label(exhibition_type: Option<f64>) -> String {
    match exhibition_type {
        Some(t) if t.is_finite() => format!("{}유형", t as i64),
        _ => "전체".to_string(),
    }
}

/// Number of corpus rows carrying the given type.
pub fn type_count(records: &[HistoricalRecord], exhibition_type: Option<f64>) -> usize {
    match exhibition_type {
        Some(t) => records
            .iter()
            .filter(|r| r.exhibition_type == Some(t))
            .count(),
        None => records.len(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn parse(csv: &str) -> Vec<HistoricalRecord> {
        read_corpus(csv.as_bytes(), &PathBuf::from("test.csv")).unwrap()
    }

    fn typed_record(title: &str, ty: Option<f64>) -> HistoricalRecord {
        HistoricalRecord {
            title: title.to_string(),
            exhibition_type: ty,
            ..Default::default()
        }
    }

    #[test]
    fn test_read_corpus_basic() {
        let csv = "전시 제목,전시 유형,총 관객수,총 사용 예산\n\
                   겨울 풍경전,1,3200,45000000\n\
                   봄의 색채,2,5100,82000000\n";
        let records = parse(csv);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "겨울 풍경전");
        assert_eq!(records[0].exhibition_type, Some(1.0));
        assert_eq!(records[0].fields.visitors_total, Some(3200.0));
        assert_eq!(records[1].fields.budget_total, Some(82_000_000.0));
    }

    #[test]
    fn test_read_corpus_drops_untitled_rows() {
        let csv = "전시 제목,총 관객수\n\
                   ,1000\n\
                   -,2000\n\
                   유효한 전시,3000\n";
        let records = parse(csv);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "유효한 전시");
    }

    #[test]
    fn test_read_corpus_sentinels_become_missing() {
        let csv = "전시 제목,총 관객수,언론 보도 건수,SNS 게시 건수\n\
                   전시 A,-,—,\n";
        let records = parse(csv);
        assert_eq!(records[0].fields.visitors_total, None);
        assert_eq!(records[0].fields.press_count, None);
        assert_eq!(records[0].fields.sns_posts, None);
    }

    #[test]
    fn test_read_corpus_coercion_failure_is_silent() {
        let csv = "전시 제목,총 관객수,전시 유형\n\
                   전시 A,약 3000,미정\n";
        let records = parse(csv);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields.visitors_total, None);
        assert_eq!(records[0].exhibition_type, None);
    }

    #[test]
    fn test_read_corpus_absent_columns_yield_missing() {
        let csv = "전시 제목,총 관객수\n전시 A,1000\n";
        let records = parse(csv);
        assert_eq!(records[0].fields.budget_total, None);
        assert_eq!(records[0].exhibition_type, None);
    }

    #[test]
    fn test_read_corpus_missing_title_column() {
        let err = read_corpus("전시명,관객\nA,1\n".as_bytes(), &PathBuf::from("t.csv"))
            .unwrap_err();
        assert!(matches!(err, CorpusError::MissingTitleColumn { .. }));
    }

    #[test]
    fn test_load_corpus_missing_file() {
        let err = load_corpus(&PathBuf::from("/nonexistent/reference.csv")).unwrap_err();
        assert!(matches!(err, CorpusError::NotFound { .. }));
    }

    #[test]
    fn test_load_corpus_from_temp_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "전시 제목,총 관객수\n한강 사진전,4200\n").unwrap();
        let records = load_corpus(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields.visitors_total, Some(4200.0));
    }

    #[test]
    fn test_exclude_type_zero() {
        let records = vec![
            typed_record("특별전", Some(0.0)),
            typed_record("기획전", Some(1.0)),
            typed_record("유형 미상", None),
        ];
        let kept = exclude_type_zero(&records);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.exhibition_type != Some(0.0)));
    }

    #[test]
    fn test_filter_by_type_restricts() {
        let records: Vec<_> = (0..8)
            .map(|i| typed_record(&format!("전시 {}", i), Some(if i < 5 { 1.0 } else { 2.0 })))
            .collect();
        let filtered = filter_by_type(&records, Some(1.0));
        assert_eq!(filtered.len(), 5);
        assert!(filtered.iter().all(|r| r.exhibition_type == Some(1.0)));
    }

    #[test]
    fn test_filter_by_type_falls_back_below_minimum() {
        // Only 2 rows of type 2 — fewer than 3 peers means no typed comparison.
        let mut records: Vec<_> = (0..6)
            .map(|i| typed_record(&format!("전시 {}", i), Some(1.0)))
            .collect();
        records.push(typed_record("소수 A", Some(2.0)));
        records.push(typed_record("소수 B", Some(2.0)));
        records.push(typed_record("특별전", Some(0.0)));

        let filtered = filter_by_type(&records, Some(2.0));
        // Falls back to the full type-0-excluded set.
        assert_eq!(filtered.len(), 8);
    }

    #[test]
    fn test_filter_by_type_none_excludes_type_zero_only() {
        let records = vec![
            typed_record("특별전", Some(0.0)),
            typed_record("기획전", Some(1.0)),
        ];
        let filtered = filter_by_type(&records, None);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_type_label() {
        assert_eq!(type_label(None), "전체");
        assert_eq!(type_label(Some(1.0)), "1유형");
        assert_eq!(type_label(Some(3.0)), "3유형");
    }

    #[test]
    fn test_type_count() {
        let records = vec![
            typed_record("a", Some(1.0)),
            typed_record("b", Some(1.0)),
            typed_record("c", Some(2.0)),
        ];
        assert_eq!(type_count(&records, Some(1.0)), 2);
        assert_eq!(type_count(&records, None), 3);
    }
}
