pub mod cli;
pub mod json;

use crate::engine::EngineResult;

pub trait Reporter {
    fn format(&self, result: &EngineResult, verbose: bool) -> String;
}

/// One score per line, in report order.
pub fn score_only(result: &EngineResult) -> String {
    result
        .reports
        .iter()
        .map(|r| format!("{}\n", r.score.current_score))
        .collect()
}
