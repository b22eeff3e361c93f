use serde::Serialize;

use crate::diagnostic::{Diagnostic, Severity};
use crate::engine::{EngineResult, Failure};
use crate::scoring::Deduction;

use super::Reporter;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    summary: SummaryJson,
    results: Vec<ResultJson<'a>>,
    failures: &'a [Failure],
}

#[derive(Serialize)]
struct SummaryJson {
    files_scanned: usize,
    scored: usize,
    below_threshold: usize,
    lowest_score: Option<u32>,
}

#[derive(Serialize)]
struct ResultJson<'a> {
    source: &'a str,
    score: ScoreJson<'a>,
    tier: TierJson,
    errors: usize,
    warnings: usize,
    diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct ScoreJson<'a> {
    value: u32,
    max: u32,
    deductions: &'a [Deduction],
}

#[derive(Serialize)]
struct TierJson {
    key: String,
    label: String,
    range: String,
    severity_rank: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    advice: Option<String>,
}

impl Reporter for JsonReporter {
    fn format(&self, result: &EngineResult, _verbose: bool) -> String {
        let results = result
            .reports
            .iter()
            .map(|report| ResultJson {
                source: &report.source,
                score: ScoreJson {
                    value: report.score.current_score,
                    max: report.score.max_score,
                    deductions: &report.score.deductions,
                },
                tier: TierJson {
                    key: report.tier.key.to_string(),
                    label: report.tier.label.to_string(),
                    range: report.tier.range_label(),
                    severity_rank: report.tier.severity_rank,
                    advice: result.show_advice.then(|| report.tier.advice.to_string()),
                },
                errors: count(&report.diagnostics, Severity::Error),
                warnings: count(&report.diagnostics, Severity::Warning),
                diagnostics: &report.diagnostics,
            })
            .collect();

        let output = JsonOutput {
            version: env!("CARGO_PKG_VERSION"),
            summary: SummaryJson {
                files_scanned: result.files_scanned,
                scored: result.reports.len(),
                below_threshold: result.below_threshold().len(),
                lowest_score: result
                    .reports
                    .iter()
                    .map(|r| r.score.current_score)
                    .min(),
            },
            results,
            failures: &result.failures,
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

fn count(diagnostics: &[Diagnostic], severity: Severity) -> usize {
    diagnostics.iter().filter(|d| d.severity == severity).count()
}
