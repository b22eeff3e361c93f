mod common;

use hormone_check::diagnostic::{Category, Severity};
use hormone_check::validate::{validate_all, validate_step};

use common::{complete_answers, fill_profile};
use hormone_check::answers::AnswerSet;

fn fields(answers: &AnswerSet, step: &str) -> Vec<String> {
    validate_step(answers, step)
        .into_iter()
        .map(|d| d.field)
        .collect()
}

#[test]
fn test_complete_answers_pass() {
    assert!(validate_all(&complete_answers()).is_empty());
}

#[test]
fn test_empty_profile_requires_fields() {
    let problems = validate_step(&AnswerSet::new(), "step1");
    assert_eq!(problems.len(), 5);
    assert!(problems
        .iter()
        .all(|d| d.severity == Severity::Error && d.category == Category::Validation));
    assert_eq!(problems[0].message, "Vui lòng nhập họ và tên của bạn");
}

#[test]
fn test_phone_must_be_digits() {
    let mut answers = AnswerSet::new();
    fill_profile(&mut answers);
    answers.set("step1", "phoneNumber", "091-234");
    let problems = validate_step(&answers, "step1");
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].rule, "validation/phone-digits");
    assert_eq!(problems[0].message, "Số điện thoại chỉ bao gồm các chữ số");
}

#[test]
fn test_email_is_optional_but_checked() {
    let mut answers = AnswerSet::new();
    fill_profile(&mut answers);
    assert!(validate_step(&answers, "step1").is_empty());
    answers.set("step1", "email", "mai@example.vn");
    assert!(validate_step(&answers, "step1").is_empty());
    answers.set("step1", "email", "mai@");
    assert_eq!(fields(&answers, "step1"), vec!["step1.email"]);
}

#[test]
fn test_age_required_and_known() {
    let mut answers = AnswerSet::new();
    assert_eq!(
        validate_step(&answers, "step2")[0].message,
        "Vui lòng chọn độ tuổi của bạn"
    );
    answers.set("step2", "age", "60 tuổi");
    assert_eq!(
        validate_step(&answers, "step2")[0].rule,
        "validation/unknown-option"
    );
}

#[test]
fn test_checkbox_groups_need_one_selection() {
    let answers = AnswerSet::new();
    assert_eq!(
        validate_step(&answers, "step6")[0].message,
        "Vui lòng chọn ít nhất một loại thuốc"
    );
    assert_eq!(fields(&answers, "step4"), vec!["step4.psychologicalSigns"]);
}

#[test]
fn test_other_requires_description() {
    let mut answers = complete_answers();
    answers.set("step5", "riskFactors", vec!["Khác"]);
    let problems = validate_step(&answers, "step5");
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].field, "step5.otherRiskFactors");
    assert_eq!(problems[0].message, "Vui lòng mô tả yếu tố nguy cơ khác");

    answers.set("step5", "otherRiskFactors", "Tiền sử gia đình");
    assert!(validate_step(&answers, "step5").is_empty());
}

#[test]
fn test_unknown_step_has_no_requirements() {
    assert!(validate_step(&AnswerSet::new(), "step9").is_empty());
}
