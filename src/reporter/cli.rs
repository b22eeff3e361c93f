use owo_colors::OwoColorize;

use crate::diagnostic::Severity;
use crate::engine::{EngineResult, SurveyReport};
use crate::tier::TierKey;

use super::Reporter;

pub struct CliReporter;

impl Reporter for CliReporter {
    fn format(&self, result: &EngineResult, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\n  {} v{}\n",
            "hormone-check".bold(),
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str(&format!(
            "  {} file(s) scanned, {} scored\n",
            result.files_scanned,
            result.reports.len()
        ));

        for report in &result.reports {
            format_report(&mut out, report, verbose, result.show_advice);
        }

        if !result.failures.is_empty() {
            out.push_str(&format!(
                "\n  {} {} {}\n",
                "──".dimmed(),
                "Unreadable",
                "─".repeat(40).dimmed()
            ));
            for failure in &result.failures {
                out.push_str(&format!(
                    "  {}  {}\n         {}\n",
                    "ERROR".red().bold(),
                    failure.source,
                    failure.error
                ));
            }
        }
        out.push('\n');
        out
    }
}

fn format_report(out: &mut String, report: &SurveyReport, verbose: bool, advice: bool) {
    let title = &report.source;
    out.push_str(&format!(
        "\n  {} {} {}\n",
        "──".dimmed(),
        title,
        "─".repeat(50 - title.chars().count().min(49)).dimmed()
    ));

    let value = report.score.current_score.to_string();
    let score_colored = match report.tier.key {
        TierKey::Stable => value.green().to_string(),
        TierKey::Moderate => value.yellow().to_string(),
        TierKey::High => value.bright_red().to_string(),
        TierKey::Critical => value.red().bold().to_string(),
    };
    out.push_str(&format!(
        "  Score: {} / {} - {}\n",
        score_colored, report.score.max_score, report.tier.label
    ));

    for deduction in &report.score.deductions {
        out.push_str(&format!(
            "  {} {}  {}\n",
            format!("-{:>2}", deduction.points).red(),
            deduction.step.dimmed(),
            deduction.option
        ));
    }

    for d in &report.diagnostics {
        if d.severity == Severity::Info && !verbose {
            continue;
        }
        let severity_str = match d.severity {
            Severity::Error => "ERROR".red().bold().to_string(),
            Severity::Warning => " WARN".yellow().to_string(),
            Severity::Info => " INFO".blue().to_string(),
        };
        out.push_str(&format!(
            "  {}  {} {}\n",
            severity_str,
            d.field.dimmed(),
            d.message
        ));
        if verbose {
            out.push_str(&format!("         {}: {}\n", "Help".cyan(), d.help));
        }
    }

    if advice {
        out.push_str(&format!("\n  {}\n", report.tier.banner.italic()));
        if verbose {
            out.push_str(&format!("  {}: {}\n", "Advice".cyan(), report.tier.advice));
        }
    }
}
