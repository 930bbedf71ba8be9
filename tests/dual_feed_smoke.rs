use bench_delta::DeltaError;
use bench_delta::compare_cmd::dual_feed_report;
use bench_delta::core::schema::ResultFeed;
use bench_delta::report::render_csv;
use tempfile::tempdir;

const CANDIDATE: &str = r#"{
  "benchmarks": [
    { "name": "BM_Select_int/4096", "cpu_time": 100.0 },
    { "name": "BM_Select_string/256", "cpu_time": 80.0 }
  ]
}"#;

const BASELINE: &str = r#"{
  "benchmarks": [
    { "name": "BM_Select_int/4096", "cpu_time": 150.0 },
    { "name": "BM_Select_string/256", "cpu_time": 60.0 }
  ]
}"#;

fn write_feeds(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let candidate = dir.join("candidate.json");
    let baseline = dir.join("baseline.json");
    std::fs::write(&candidate, CANDIDATE).unwrap();
    std::fs::write(&baseline, BASELINE).unwrap();
    (candidate, baseline)
}

#[test]
fn dual_feed_smoke() {
    let dir = tempdir().unwrap();
    let (candidate_path, baseline_path) = write_feeds(dir.path());

    let candidate = ResultFeed::from_path(candidate_path).unwrap();
    let baseline = ResultFeed::from_path(baseline_path).unwrap();
    let records = dual_feed_report(&candidate, &baseline).unwrap();

    let mut buffer = Vec::new();
    render_csv(&records, &mut buffer).unwrap();

    let expected = "function,type,size,delta\nSelect,int,4096,0.50\nSelect,string,256,-0.25\n";
    assert_eq!(String::from_utf8(buffer).unwrap(), expected);
}

#[test]
fn dual_feed_key_absent_from_baseline() {
    let dir = tempdir().unwrap();
    let candidate_path = dir.path().join("candidate.json");
    let baseline_path = dir.path().join("baseline.json");
    std::fs::write(&candidate_path, CANDIDATE).unwrap();
    std::fs::write(
        &baseline_path,
        r#"{ "benchmarks": [ { "name": "BM_Select_int/4096", "cpu_time": 150.0 } ] }"#,
    )
    .unwrap();

    let candidate = ResultFeed::from_path(candidate_path).unwrap();
    let baseline = ResultFeed::from_path(baseline_path).unwrap();

    let err = dual_feed_report(&candidate, &baseline).unwrap_err();
    match err {
        DeltaError::MissingKey(key) => assert_eq!(key, "Select/string/256"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn dual_feed_rejects_competitor_labelled_names() {
    let dir = tempdir().unwrap();
    let feed_path = dir.path().join("labelled.json");
    std::fs::write(
        &feed_path,
        r#"{ "benchmarks": [ { "name": "BM_Select_int_std/4096", "cpu_time": 150.0 } ] }"#,
    )
    .unwrap();

    let feed = ResultFeed::from_path(&feed_path).unwrap();
    let err = dual_feed_report(&feed, &feed).unwrap_err();
    assert!(matches!(err, DeltaError::MalformedIdentifier(_)));
}
