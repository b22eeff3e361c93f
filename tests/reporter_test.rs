mod common;

use hormone_check::engine::{EngineResult, Failure, SurveyReport};
use hormone_check::reporter::cli::CliReporter;
use hormone_check::reporter::json::JsonReporter;
use hormone_check::reporter::{score_only, Reporter};

use common::complete_answers;

fn sample_result(show_advice: bool) -> EngineResult {
    let mut low = complete_answers();
    low.set("step2", "age", "55 tuổi trở lên");
    low.set("step5", "riskFactors", vec!["Mãn kinh (12 tháng không có kinh)"]);
    EngineResult {
        reports: vec![
            SurveyReport::from_answers("mai.json", &complete_answers()),
            SurveyReport::from_answers("lan.json", &low),
        ],
        failures: vec![Failure {
            source: "broken.json".to_string(),
            error: "invalid answers".to_string(),
        }],
        files_scanned: 3,
        fail_below: 40,
        show_advice,
    }
}

#[test]
fn test_json_output_structure() {
    let output = JsonReporter.format(&sample_result(true), false);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["summary"]["files_scanned"], 3);
    assert_eq!(json["summary"]["scored"], 2);
    // 100 - 40 - 10 - 5 - 30
    assert_eq!(json["summary"]["lowest_score"], 15);
    assert_eq!(json["summary"]["below_threshold"], 1);
    assert_eq!(json["results"][1]["tier"]["key"], "critical");
    assert_eq!(json["results"][1]["tier"]["range"], "0 - 39");
    assert!(json["results"][0]["tier"]["advice"].is_string());
    assert_eq!(json["failures"][0]["source"], "broken.json");
}

#[test]
fn test_json_omits_advice_when_disabled() {
    let output = JsonReporter.format(&sample_result(false), false);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(json["results"][0]["tier"].get("advice").is_none());
}

#[test]
fn test_cli_output_mentions_scores_and_tiers() {
    let output = CliReporter.format(&sample_result(true), true);
    assert!(output.contains("hormone-check"));
    assert!(output.contains("mai.json"));
    assert!(output.contains("Nguy cơ thiếu hụt trung bình"));
    assert!(output.contains("Nguy cơ thiếu hụt nghiêm trọng"));
    assert!(output.contains("broken.json"));
    assert!(output.contains("45 - 49 tuổi"));
}

#[test]
fn test_score_only_output() {
    let output = score_only(&sample_result(true));
    let scores: Vec<u32> = output.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(scores, vec![65, 15]);
}
