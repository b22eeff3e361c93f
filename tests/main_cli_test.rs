use std::process::Command;

#[test]
fn test_invalid_format_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_hormone-check"))
        .args(["--format", "jsn"])
        .output()
        .expect("binary should run");

    assert!(
        !output.status.success(),
        "Invalid --format values should cause a non-zero exit"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value"),
        "stderr should explain invalid format value. stderr: {stderr}"
    );
}

#[test]
fn test_score_flag_prints_bare_scores() {
    let output = Command::new(env!("CARGO_BIN_EXE_hormone-check"))
        .args(["--score", "tests/fixtures/answers"])
        .output()
        .expect("binary should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["0", "65"]);
}

#[test]
fn test_check_table_passes() {
    let output = Command::new(env!("CARGO_BIN_EXE_hormone-check"))
        .arg("--check-table")
        .output()
        .expect("binary should run");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Tables OK"));
}

#[test]
fn test_missing_path_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_hormone-check"))
        .arg("tests/fixtures/does-not-exist")
        .output()
        .expect("binary should run");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no answers found"));
}
