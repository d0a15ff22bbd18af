//! End-to-end acceptance tests: CSV ingestion through the full analysis
//! pipeline, including the documented worked examples.

use std::io::Write;
use std::path::PathBuf;

use expo_lens_core::insights::EvalType;
use expo_lens_core::{load_corpus, read_corpus, run_analysis, CurrentRecord};

/// Ten-exhibition reference corpus with a type-0 special exhibition and a
/// row of sentinel values mixed in.
const REFERENCE_CSV: &str = "\
전시 제목,전시 유형,전시 일수,참여 작가 수_총(팀),총 사용 예산,전시 사용 예산,총수입,총 관객수,일평균 관객수,유료 관객수,프로그램 총 수,프로그램 참여 인원,언론 보도 건수,출품 작품 수_총,출품 작품 수_회화,출품 작품 수_조각
여름의 정원,1,30,10,80000000,48000000,20000000,8000,266,2400,4,1600,16,40,20,20
가을 서정,1,35,12,90000000,54000000,22000000,9000,257,2700,5,1800,18,45,22,23
겨울 빛,1,40,14,100000000,60000000,25000000,10000,250,3000,6,2000,20,50,25,25
봄의 숨,2,45,16,110000000,66000000,27000000,11000,244,3300,7,2200,22,55,27,28
한여름 밤,2,50,18,120000000,72000000,30000000,12000,240,3600,8,2400,24,60,30,30
도시 산책,2,28,9,85000000,51000000,21000000,8500,300,2550,4,1700,17,42,21,21
물결의 기록,1,33,11,95000000,57000000,23000000,9500,287,2850,5,1900,19,47,23,24
시간의 결,2,38,13,105000000,63000000,26000000,10500,276,3150,6,2100,21,52,26,26
상설 소장품전,0,365,40,500000000,300000000,90000000,90000,246,27000,12,9000,40,200,100,100
미완의 기록,1,-,—,,,,,,,,,,,,
";

fn corpus() -> Vec<expo_lens_core::HistoricalRecord> {
    read_corpus(REFERENCE_CSV.as_bytes(), &PathBuf::from("reference.csv")).unwrap()
}

fn current() -> CurrentRecord {
    let mut c = CurrentRecord {
        title: "경계의 풍경".to_string(),
        ..Default::default()
    };
    c.fields.duration_days = Some(36.0);
    c.fields.artists_total = Some(12.0);
    c.fields.budget_total = Some(70_000_000.0);
    c.fields.revenue_total = Some(24_000_000.0);
    c.fields.visitors_total = Some(11_000.0);
    c.fields.visitors_paid = Some(3_900.0);
    c.fields.program_count = Some(6.0);
    c.fields.program_participants = Some(2_300.0);
    c.fields.press_count = Some(20.0);
    c.fields.artworks_total = Some(50.0);
    c.fields.artworks_painting = Some(40.0);
    c.fields.artworks_sculpture = Some(10.0);
    c
}

#[test]
fn csv_round_trip_drops_bad_rows_and_sentinels() {
    let records = corpus();
    // 10 data rows, none untitled
    assert_eq!(records.len(), 10);
    let sparse = records.iter().find(|r| r.title == "미완의 기록").unwrap();
    assert_eq!(sparse.fields.duration_days, None);
    assert_eq!(sparse.fields.artists_total, None);
    assert_eq!(sparse.fields.budget_total, None);
}

#[test]
fn full_pipeline_produces_all_output_kinds() {
    let result = run_analysis(&current(), &corpus(), None);

    assert!(!result.insights.is_empty());
    assert!(!result.eval_drafts.is_empty());
    assert_eq!(result.similar_exhibitions.len(), 5);
    assert!(result.comparison_table.is_some());
    // 9 comparable exhibitions: only the type-0 row was removed
    assert_eq!(result.comparison_count, 9);
    assert_eq!(result.group_label, "역대");
}

#[test]
fn special_exhibition_never_appears_in_comparisons() {
    let result = run_analysis(&current(), &corpus(), None);
    assert!(result
        .similar_exhibitions
        .iter()
        .all(|s| s.title != "상설 소장품전"));
    for ins in &result.insights {
        if let Some(count) = ins.total_count {
            assert!(count <= 8, "comparison group leaked type-0 rows");
        }
    }
}

#[test]
fn budget_worked_example_thirty_percent_below() {
    // Corpus mean budget is (80+90+100+110+120+85+95+105)M / 8 = 98.125M.
    // Shift the current budget so the deviation is exactly -30%.
    let mut cur = current();
    cur.fields.budget_total = Some(98_125_000.0 * 0.7);
    let result = run_analysis(&cur, &corpus(), None);

    let budget = result
        .insights
        .iter()
        .find(|i| i.metric_name == "총 사용 예산")
        .expect("budget insight");
    assert!(
        budget.text.contains("30.0% 하회합니다"),
        "text: {}",
        budget.text
    );
}

#[test]
fn cheap_operation_triggers_efficiency_draft() {
    // Corpus cost per visitor is 10,000원 everywhere; current is 30% below.
    let mut cur = current();
    cur.fields.budget_total = Some(77_000_000.0); // 7,000원 × 11,000 visitors
    let result = run_analysis(&cur, &corpus(), None);

    let efficiency: Vec<_> = result
        .drafts_of_type(EvalType::Positive)
        .into_iter()
        .filter(|d| d.source_metric == "관객당 비용")
        .collect();
    assert_eq!(efficiency.len(), 1);
    assert!(
        efficiency[0].text.contains("낮아 효율적인 예산 운영"),
        "text: {}",
        efficiency[0].text
    );
}

#[test]
fn dominant_medium_worked_example() {
    // Painting 40/50 = 80% vs corpus painting share of 50%.
    let result = run_analysis(&current(), &corpus(), None);
    let comp = result
        .insights
        .iter()
        .find(|i| i.metric_name == "매체별 작품 구성")
        .expect("composition insight");
    assert!(
        comp.text.contains("회화의 비중(80%)은 역대 평균(50%)과 비교하여 높은 편입니다."),
        "text: {}",
        comp.text
    );
}

#[test]
fn eval_drafts_deduplicate_per_metric_and_type() {
    let result = run_analysis(&current(), &corpus(), None);
    let mut seen = std::collections::HashSet::new();
    for draft in &result.eval_drafts {
        assert!(
            seen.insert((draft.eval_type, draft.source_metric.clone())),
            "duplicate draft for {:?}/{}",
            draft.eval_type,
            draft.source_metric
        );
    }
}

#[test]
fn typed_comparison_switches_group_label() {
    let result = run_analysis(&current(), &corpus(), Some(1.0));
    assert_eq!(result.group_label, "동일 유형(1유형)");
    // Five type-1 exhibitions, one of which is the all-sentinel row
    assert_eq!(result.comparison_count, 5);
    let total = result
        .insights
        .iter()
        .find(|i| i.metric_name == "총 관객수")
        .expect("visitor insight");
    assert!(total.text.contains("동일 유형(1유형) 평균"));
}

#[test]
fn similarity_ranks_closest_exhibition_first() {
    // Current matches 겨울 빛 on budget, duration, visitors, and artists
    // far more closely than any other row.
    let mut cur = current();
    cur.fields.budget_total = Some(100_000_000.0);
    cur.fields.duration_days = Some(40.0);
    cur.fields.visitors_total = Some(10_000.0);
    cur.fields.artists_total = Some(14.0);
    let result = run_analysis(&cur, &corpus(), None);

    assert_eq!(result.similar_exhibitions[0].title, "겨울 빛");
    for pair in result.similar_exhibitions.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[test]
fn comparison_table_formats_current_first() {
    let result = run_analysis(&current(), &corpus(), None);
    let table = result.comparison_table.unwrap();
    assert_eq!(table.rows[0][0], "경계의 풍경");
    assert_eq!(table.columns[0], "전시명");
    // Current visitors formatted in the 만 band
    assert!(table.rows[0].iter().any(|c| c == "1만명"));
}

#[test]
fn corpus_file_missing_is_the_only_hard_failure() {
    let err = load_corpus(&PathBuf::from("/no/such/reference.csv")).unwrap_err();
    assert!(matches!(err, expo_lens_core::CorpusError::NotFound { .. }));

    // Whereas an analysis over an empty corpus degrades silently.
    let result = run_analysis(&current(), &[], None);
    assert!(result.insights.is_empty());
}

#[test]
fn corpus_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(REFERENCE_CSV.as_bytes()).unwrap();
    let records = load_corpus(file.path()).unwrap();
    assert_eq!(records.len(), 10);
}
