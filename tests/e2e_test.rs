use std::path::Path;

use hormone_check::reporter::json::JsonReporter;
use hormone_check::reporter::Reporter;
use hormone_check::tier::TierKey;

#[test]
fn test_e2e_fixture_directory() {
    let result = hormone_check::engine::run(Path::new("tests/fixtures/answers")).unwrap();

    // the draft is ignored by the default config
    assert_eq!(result.files_scanned, 2);
    assert!(result.failures.is_empty());

    let sources: Vec<&str> = result.reports.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, vec!["hoa.json", "mai.json"]);

    let hoa = &result.reports[0];
    // 40 + 20 + 5 + 30 + 5
    assert_eq!(hoa.score.current_score, 0);
    assert_eq!(hoa.tier.key, TierKey::Critical);
    assert!(hoa.diagnostics.is_empty());

    let mai = &result.reports[1];
    assert_eq!(mai.score.current_score, 65);
    assert_eq!(mai.tier.key, TierKey::Moderate);
}

#[test]
fn test_e2e_single_file_json_output() {
    let result =
        hormone_check::engine::run(Path::new("tests/fixtures/answers/mai.json")).unwrap();
    assert_eq!(result.files_scanned, 1);

    let json_str = JsonReporter.format(&result, false);
    let json: serde_json::Value = serde_json::from_str(&json_str).unwrap();
    assert_eq!(json["results"][0]["score"]["value"], 65);
    assert_eq!(json["results"][0]["tier"]["key"], "moderate");
    assert_eq!(
        json["results"][0]["score"]["deductions"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}
