mod common;

use hormone_check::engine::{discover_files, run, SurveyReport};
use hormone_check::config::Config;
use tempfile::TempDir;

use common::complete_answers;

#[test]
fn test_engine_scores_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.json"), complete_answers().to_json()).unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(
        dir.path().join("nested/b.json"),
        r#"{"step2": {"age": "50 - 54 tuổi"}}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not answers").unwrap();

    let result = run(dir.path()).unwrap();
    assert_eq!(result.files_scanned, 2);
    assert_eq!(result.reports.len(), 2);
    assert_eq!(result.reports[0].source, "a.json");
    assert_eq!(result.reports[0].score.current_score, 65);
    assert_eq!(result.reports[1].source, "nested/b.json");
    assert_eq!(result.reports[1].score.current_score, 70);
    // b.json skips every other step
    assert!(!result.reports[1].diagnostics.is_empty());
}

#[test]
fn test_engine_reports_unreadable_files_as_failures() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("good.json"), "{}").unwrap();
    std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

    let result = run(dir.path()).unwrap();
    assert_eq!(result.reports.len(), 1);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].source, "bad.json");
    assert!(result.failures[0].error.contains("invalid answers"));
}

#[test]
fn test_engine_missing_path() {
    let dir = TempDir::new().unwrap();
    assert!(run(&dir.path().join("nope.json")).is_err());
}

#[test]
fn test_fail_below_threshold() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("hormone-check.toml"), "[ci]\nfail_below = 70\n").unwrap();
    std::fs::write(dir.path().join("a.json"), complete_answers().to_json()).unwrap();

    let result = run(dir.path()).unwrap();
    assert_eq!(result.fail_below, 70);
    let below = result.below_threshold();
    assert_eq!(below.len(), 1);
    assert_eq!(below[0].score.current_score, 65);
}

#[test]
fn test_discover_skips_ignored_files() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("drafts")).unwrap();
    std::fs::write(dir.path().join("drafts/x.draft.json"), "{}").unwrap();
    std::fs::write(dir.path().join("drafts/y.json"), "{}").unwrap();

    let files = discover_files(dir.path(), &Config::default());
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("drafts/y.json"));
}

#[test]
fn test_report_from_answers_flags_unknown_options() {
    let mut answers = complete_answers();
    answers.set("step4", "psychologicalSigns", vec!["Hay quên"]);
    let report = SurveyReport::from_answers("inline", &answers);
    assert_eq!(report.score.current_score, 70);
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.rule == "answers/unknown-option"));
}
