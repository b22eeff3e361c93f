use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

use hormone_check::diagnostic::{has_errors, Diagnostic, Severity};
use hormone_check::lint::{lint_table, lint_tiers};
use hormone_check::reporter::{cli::CliReporter, json::JsonReporter, score_only, Reporter};
use hormone_check::table::DeductionTable;
use hormone_check::tier::TIERS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Cli,
    Json,
}

#[derive(Parser)]
#[command(
    name = "hormone-check",
    version,
    about = "Score hormonal health survey answers"
)]
struct Cli {
    /// Answers JSON file, or a directory of them (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Cli)]
    format: Format,

    /// Only output the score(s) (0-100)
    #[arg(long)]
    score: bool,

    /// Show help text for findings and the full advice paragraph
    #[arg(long, short)]
    verbose: bool,

    /// Lint the built-in deduction and tier tables instead of scoring
    #[arg(long)]
    check_table: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = hormone_check::telemetry::init(hormone_check::telemetry::DEFAULT_FILTER) {
        eprintln!("Warning: {e}");
    }

    if cli.check_table {
        let mut findings = lint_table(&DeductionTable::standard());
        findings.extend(lint_tiers(&TIERS));
        print_findings(&findings, cli.format);
        process::exit(if has_errors(&findings) { 1 } else { 0 });
    }

    let result = match hormone_check::engine::run(&cli.path) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let output = if cli.score {
        score_only(&result)
    } else {
        match cli.format {
            Format::Cli => CliReporter.format(&result, cli.verbose),
            Format::Json => JsonReporter.format(&result, cli.verbose),
        }
    };
    print!("{output}");

    let below = result.below_threshold();
    if !below.is_empty() {
        for report in &below {
            eprintln!(
                "{} scored {} (below {})",
                report.source, report.score.current_score, result.fail_below
            );
        }
        process::exit(1);
    }
    if !result.failures.is_empty() {
        process::exit(1);
    }
}

fn print_findings(findings: &[Diagnostic], format: Format) {
    match format {
        Format::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(findings).unwrap_or_else(|_| "[]".to_string())
            );
        }
        Format::Cli => {
            if findings.is_empty() {
                println!("Tables OK");
            }
            for d in findings {
                let severity = match d.severity {
                    Severity::Error => "ERROR",
                    Severity::Warning => " WARN",
                    Severity::Info => " INFO",
                };
                println!("{severity}  {}  {}", d.field, d.message);
            }
        }
    }
}
