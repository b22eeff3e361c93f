//! Data-quality checks over the static tables and over submitted answers.
//!
//! Nothing here changes how a score is computed: an option missing from the
//! table still scores 0. These checks only surface such gaps.

use crate::answers::AnswerSet;
use crate::diagnostic::{Category, Diagnostic, Severity};
use crate::table::{DeductionTable, FieldKind, FieldSpec};
use crate::tier::Tier;

pub fn lint_table(table: &DeductionTable) -> Vec<Diagnostic> {
    table.fields().iter().flat_map(lint_field).collect()
}

fn lint_field(spec: &FieldSpec) -> Vec<Diagnostic> {
    let key = spec.key();
    let mut out = Vec::new();

    for (i, option) in spec.options.iter().enumerate() {
        if spec.options[..i].iter().any(|o| o.value == option.value) {
            out.push(finding(
                "table/duplicate-option",
                Severity::Error,
                Category::Table,
                &key,
                format!("Option \"{}\" is declared more than once", option.value),
                "Remove the duplicate entry; only the first one is ever scored.",
            ));
        }
    }

    if spec.kind == FieldKind::Single {
        if spec.normal.is_some() || spec.other.is_some() {
            out.push(finding(
                "table/single-with-sentinel",
                Severity::Warning,
                Category::Table,
                &key,
                "Single-select field declares sentinel options".to_string(),
                "Sentinels only matter for checkbox groups; drop them here.",
            ));
        }
        return out;
    }

    match spec.normal {
        None => out.push(finding(
            "table/normal-missing",
            Severity::Warning,
            Category::Table,
            &key,
            "Checkbox group has no \"nothing applies\" option".to_string(),
            "Declare a normal sentinel so respondents can answer the step.",
        )),
        Some(normal) if !spec.has_option(normal) => out.push(finding(
            "table/normal-missing",
            Severity::Error,
            Category::Table,
            &key,
            format!("Normal sentinel \"{normal}\" is not among the options"),
            "Add the sentinel to the option list with 0 points.",
        )),
        Some(normal) if spec.points(normal) != 0 => out.push(finding(
            "table/normal-not-zero",
            Severity::Error,
            Category::Table,
            &key,
            format!("Normal sentinel \"{normal}\" deducts {} points", spec.points(normal)),
            "The normal sentinel must be worth 0 points.",
        )),
        Some(_) => {}
    }

    match spec.other {
        None => {}
        Some(other) if !spec.has_option(other) => out.push(finding(
            "table/other-missing",
            Severity::Error,
            Category::Table,
            &key,
            format!("Other sentinel \"{other}\" is not among the options"),
            "Add the sentinel to the option list with a fixed point value.",
        )),
        Some(other) if spec.points(other) == 0 => out.push(finding(
            "table/other-zero",
            Severity::Warning,
            Category::Table,
            &key,
            format!("Other sentinel \"{other}\" deducts no points"),
            "Give the other sentinel a fixed non-zero deduction.",
        )),
        Some(_) => {}
    }

    if spec.other.is_some() && spec.other_detail.is_none() {
        out.push(finding(
            "table/other-without-detail",
            Severity::Info,
            Category::Table,
            &key,
            "Other sentinel has no free-text detail field".to_string(),
            "Name the field that holds the respondent's description.",
        ));
    }
    out
}

/// Every score from 0 to 100 must fall in exactly one tier.
pub fn lint_tiers(tiers: &[Tier]) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for score in 0..=100u32 {
        let matching: Vec<&Tier> = tiers.iter().filter(|t| t.contains(score)).collect();
        match matching.len() {
            1 => {}
            0 => out.push(finding(
                "tiers/gap",
                Severity::Error,
                Category::Tiers,
                "tiers",
                format!("Score {score} matches no tier"),
                "Extend a neighbouring tier so the range 0-100 is covered.",
            )),
            _ => out.push(finding(
                "tiers/overlap",
                Severity::Error,
                Category::Tiers,
                "tiers",
                format!(
                    "Score {score} matches {} tiers: {}",
                    matching.len(),
                    matching
                        .iter()
                        .map(|t| t.key.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                "Make tier ranges disjoint.",
            )),
        }
    }
    out
}

pub fn lint_answers(table: &DeductionTable, answers: &AnswerSet) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for spec in table.fields() {
        let Some(value) = answers.get(spec.step, spec.field) else {
            continue;
        };
        let key = spec.key();
        let selected = value.selected();

        for option in &selected {
            if !spec.has_option(option) {
                out.push(finding(
                    "answers/unknown-option",
                    Severity::Warning,
                    Category::Answers,
                    &key,
                    format!("\"{option}\" is not in the deduction table and scores 0"),
                    "Add the option to the table or fix the submitted label.",
                ));
            }
        }

        if selected.len() > 1 {
            for sentinel in [spec.normal, spec.other].into_iter().flatten() {
                if selected.contains(&sentinel) {
                    out.push(finding(
                        "answers/sentinel-combined",
                        Severity::Warning,
                        Category::Answers,
                        &key,
                        format!("\"{sentinel}\" is selected together with other options"),
                        "Sentinel options are exclusive; resubmit through the toggle rules.",
                    ));
                }
            }
        }
    }
    out
}

fn finding(
    rule: &str,
    severity: Severity,
    category: Category,
    field: &str,
    message: String,
    help: &str,
) -> Diagnostic {
    Diagnostic {
        rule: rule.to_string(),
        severity,
        category,
        message,
        help: help.to_string(),
        field: field.to_string(),
    }
}
