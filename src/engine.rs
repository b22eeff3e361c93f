use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::answers::AnswerSet;
use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::error::Error;
use crate::lint::lint_answers;
use crate::scoring::{compute_score, Score};
use crate::table::DeductionTable;
use crate::tier::Tier;
use crate::validate::validate_all;

/// Scoring result for one answers file.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    pub source: String,
    pub score: Score,
    pub tier: &'static Tier,
    pub diagnostics: Vec<Diagnostic>,
}

impl SurveyReport {
    pub fn from_answers(source: impl Into<String>, answers: &AnswerSet) -> Self {
        let table = DeductionTable::standard();
        let score = compute_score(answers);
        let tier = score.tier();
        let mut diagnostics = validate_all(answers);
        diagnostics.extend(lint_answers(&table, answers));
        SurveyReport {
            source: source.into(),
            score,
            tier,
            diagnostics,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub source: String,
    pub error: String,
}

pub struct EngineResult {
    pub reports: Vec<SurveyReport>,
    pub failures: Vec<Failure>,
    pub files_scanned: usize,
    pub fail_below: u32,
    pub show_advice: bool,
}

impl EngineResult {
    /// Reports scoring under the configured CI threshold.
    pub fn below_threshold(&self) -> Vec<&SurveyReport> {
        self.reports
            .iter()
            .filter(|r| r.score.current_score < self.fail_below)
            .collect()
    }
}

/// Scores an answers file, or every `*.json` file under a directory.
pub fn run(path: &Path) -> Result<EngineResult, Error> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let root = if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };
    let config = Config::load(&root)?;

    let files = if path.is_dir() {
        discover_files(&root, &config)
    } else {
        vec![path.to_path_buf()]
    };
    let files_scanned = files.len();
    tracing::debug!(files = files_scanned, root = %root.display(), "scoring answers");

    let outcomes: Vec<Result<SurveyReport, Failure>> = files
        .par_iter()
        .map(|file| {
            let source = display_name(&root, file);
            match load_answers(file) {
                Ok(answers) => Ok(SurveyReport::from_answers(source, &answers)),
                Err(e) => {
                    tracing::warn!("skipping {source}: {e}");
                    Err(Failure {
                        source,
                        error: e.to_string(),
                    })
                }
            }
        })
        .collect();

    let mut reports = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(failure) => failures.push(failure),
        }
    }

    Ok(EngineResult {
        reports,
        failures,
        files_scanned,
        fail_below: config.ci.fail_below,
        show_advice: config.report.advice,
    })
}

pub fn load_answers(file: &Path) -> Result<AnswerSet, Error> {
    let contents = std::fs::read_to_string(file).map_err(|source| Error::Io {
        path: file.to_path_buf(),
        source,
    })?;
    AnswerSet::from_json(&contents).map_err(|source| Error::Json {
        path: file.to_path_buf(),
        source,
    })
}

pub fn discover_files(root: &Path, config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk_dir(root, root, config, &mut files);
    files.sort();
    files
}

fn walk_dir(root: &Path, dir: &Path, config: &Config, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), "cannot read directory: {e}");
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'))
            {
                continue;
            }
            walk_dir(root, &path, config, files);
        } else if path.extension().is_some_and(|ext| ext == "json")
            && !config.is_file_ignored(root, &path)
        {
            files.push(path);
        }
    }
}

fn display_name(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .to_string_lossy()
        .replace('\\', "/")
}
