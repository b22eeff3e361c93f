use std::sync::OnceLock;

use regex::Regex;

use crate::answers::{AnswerSet, AnswerValue};
use crate::diagnostic::{Category, Diagnostic, Severity};
use crate::table::{DeductionTable, FieldKind, FieldSpec};

/// Step ids in survey order.
pub const STEPS: [&str; 6] = ["step1", "step2", "step3", "step4", "step5", "step6"];

struct MultiMessages {
    key: &'static str,
    at_least_one: &'static str,
    describe_other: &'static str,
}

const MULTI_MESSAGES: &[MultiMessages] = &[
    MultiMessages {
        key: "step3.physicalSigns",
        at_least_one: "Vui lòng chọn ít nhất một dấu hiệu sức khỏe",
        describe_other: "Vui lòng mô tả dấu hiệu khác",
    },
    MultiMessages {
        key: "step4.psychologicalSigns",
        at_least_one: "Vui lòng chọn ít nhất một dấu hiệu tâm lý",
        describe_other: "Vui lòng mô tả dấu hiệu tâm lý khác",
    },
    MultiMessages {
        key: "step5.riskFactors",
        at_least_one: "Vui lòng chọn ít nhất một yếu tố nguy cơ",
        describe_other: "Vui lòng mô tả yếu tố nguy cơ khác",
    },
    MultiMessages {
        key: "step6.medications",
        at_least_one: "Vui lòng chọn ít nhất một loại thuốc",
        describe_other: "Vui lòng mô tả loại thuốc khác",
    },
];

const REQUIRED_PROFILE: &[(&str, &str)] = &[
    ("fullName", "Vui lòng nhập họ và tên của bạn"),
    ("gender", "Vui lòng chọn giới tính của bạn"),
    ("occupation", "Vui lòng nhập nghề nghiệp của bạn"),
    ("phoneNumber", "Vui lòng nhập số điện thoại của bạn"),
    ("address", "Vui lòng nhập địa chỉ của bạn"),
];

fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("phone pattern is valid"))
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Checks the answers of one step. Unknown steps have no requirements.
pub fn validate_step(answers: &AnswerSet, step: &str) -> Vec<Diagnostic> {
    validate_step_with(&DeductionTable::standard(), answers, step)
}

pub fn validate_step_with(
    table: &DeductionTable,
    answers: &AnswerSet,
    step: &str,
) -> Vec<Diagnostic> {
    if step == "step1" {
        return validate_profile(answers);
    }
    table
        .fields()
        .iter()
        .filter(|spec| spec.step == step)
        .flat_map(|spec| validate_field(spec, answers))
        .collect()
}

pub fn validate_all(answers: &AnswerSet) -> Vec<Diagnostic> {
    let table = DeductionTable::standard();
    STEPS
        .iter()
        .flat_map(|step| validate_step_with(&table, answers, step))
        .collect()
}

fn validate_profile(answers: &AnswerSet) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (field, message) in REQUIRED_PROFILE {
        if blank(answers.text("step1", field)) {
            out.push(error("validation/required", "step1", field, message));
        }
    }

    if let Some(phone) = answers.text("step1", "phoneNumber") {
        let phone = phone.trim();
        if !phone.is_empty() && !phone_pattern().is_match(phone) {
            out.push(error(
                "validation/phone-digits",
                "step1",
                "phoneNumber",
                "Số điện thoại chỉ bao gồm các chữ số",
            ));
        }
    }

    if let Some(email) = answers.text("step1", "email") {
        let email = email.trim();
        if !email.is_empty() && !email_pattern().is_match(email) {
            out.push(error(
                "validation/email-format",
                "step1",
                "email",
                "Email không hợp lệ",
            ));
        }
    }
    out
}

fn validate_field(spec: &FieldSpec, answers: &AnswerSet) -> Vec<Diagnostic> {
    let value = answers.get(spec.step, spec.field);
    match spec.kind {
        FieldKind::Single => validate_single(spec, value),
        FieldKind::Multi => validate_multi(spec, value, answers),
    }
}

fn validate_single(spec: &FieldSpec, value: Option<&AnswerValue>) -> Vec<Diagnostic> {
    match value {
        Some(AnswerValue::Single(selected)) if !selected.trim().is_empty() => {
            if spec.has_option(selected) {
                vec![]
            } else {
                vec![error(
                    "validation/unknown-option",
                    spec.step,
                    spec.field,
                    "Vui lòng chọn một độ tuổi hợp lệ từ danh sách",
                )]
            }
        }
        _ => vec![error(
            "validation/required",
            spec.step,
            spec.field,
            "Vui lòng chọn độ tuổi của bạn",
        )],
    }
}

fn validate_multi(
    spec: &FieldSpec,
    value: Option<&AnswerValue>,
    answers: &AnswerSet,
) -> Vec<Diagnostic> {
    let key = spec.key();
    let Some(messages) = MULTI_MESSAGES.iter().find(|m| m.key == key) else {
        return vec![];
    };

    let Some(value) = value.filter(|v| v.is_populated()) else {
        return vec![error(
            "validation/at-least-one",
            spec.step,
            spec.field,
            messages.at_least_one,
        )];
    };

    let other_selected = spec.other.is_some_and(|other| value.contains(other));
    match spec.other_detail {
        Some(detail) if other_selected && blank(answers.text(spec.step, detail)) => {
            vec![error(
                "validation/describe-other",
                spec.step,
                detail,
                messages.describe_other,
            )]
        }
        _ => vec![],
    }
}

fn blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn error(rule: &str, step: &str, field: &str, message: &str) -> Diagnostic {
    Diagnostic {
        rule: rule.to_string(),
        severity: Severity::Error,
        category: Category::Validation,
        message: message.to_string(),
        help: "Complete the answer before moving to the next step.".to_string(),
        field: format!("{step}.{field}"),
    }
}
