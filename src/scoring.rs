use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::answers::AnswerSet;
use crate::table::{DeductionTable, FieldSpec};
use crate::tier::{classify, Tier};

pub const INITIAL_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deduction {
    pub step: String,
    pub option: String,
    pub points: u32,
    pub timestamp: DateTime<Utc>,
}

impl Deduction {
    fn same_entry(&self, other: &Deduction) -> bool {
        self.step == other.step && self.option == other.option && self.points == other.points
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    pub current_score: u32,
    pub max_score: u32,
    pub deductions: Vec<Deduction>,
}

impl Default for Score {
    fn default() -> Self {
        Score::initial()
    }
}

impl Score {
    /// The score before any answer has been given.
    pub fn initial() -> Self {
        Score {
            current_score: INITIAL_SCORE,
            max_score: INITIAL_SCORE,
            deductions: vec![],
        }
    }

    pub fn tier(&self) -> &'static Tier {
        classify(self.current_score)
    }

    pub fn total_deducted(&self) -> u32 {
        self.deductions.iter().map(|d| d.points).sum()
    }

    /// Equality ignoring deduction timestamps.
    pub fn same_outcome(&self, other: &Score) -> bool {
        self.current_score == other.current_score
            && self.max_score == other.max_score
            && self.deductions.len() == other.deductions.len()
            && self
                .deductions
                .iter()
                .zip(&other.deductions)
                .all(|(a, b)| a.same_entry(b))
    }
}

/// A deduction that was not present in the previous score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeductionEvent {
    pub points: u32,
    pub step: String,
    pub option: String,
}

pub fn compute_score(answers: &AnswerSet) -> Score {
    compute_score_at(&DeductionTable::standard(), answers, Utc::now())
}

/// Full recompute of the score from `answers`; nothing carries over from
/// earlier calls, so revisiting a step never double counts.
pub fn compute_score_at(
    table: &DeductionTable,
    answers: &AnswerSet,
    at: DateTime<Utc>,
) -> Score {
    let mut current_score = INITIAL_SCORE;
    let mut deductions = Vec::new();

    for spec in table.fields() {
        let Some(value) = answers.get(spec.step, spec.field) else {
            continue;
        };
        if !value.is_populated() {
            continue;
        }

        let selected = canonical_order(spec, value.selected());
        let points: u32 = selected.iter().map(|option| spec.points(option)).sum();
        if points == 0 {
            continue;
        }

        current_score = current_score.saturating_sub(points);
        deductions.push(Deduction {
            step: spec.step.to_string(),
            option: selected.join(", "),
            points,
            timestamp: at,
        });
    }

    Score {
        current_score,
        max_score: INITIAL_SCORE,
        deductions,
    }
}

// Table order first, unknown options after in the order given.
fn canonical_order<'a>(spec: &FieldSpec, mut selected: Vec<&'a str>) -> Vec<&'a str> {
    selected.sort_by_key(|option| spec.position(option).unwrap_or(usize::MAX));
    selected
}

/// Deductions in `current` whose `(step, option, points)` does not appear in
/// `previous`. Deductions that disappeared produce nothing.
pub fn new_deductions(previous: &Score, current: &Score) -> Vec<DeductionEvent> {
    current
        .deductions
        .iter()
        .filter(|d| !previous.deductions.iter().any(|p| p.same_entry(d)))
        .map(|d| DeductionEvent {
            points: d.points,
            step: d.step.clone(),
            option: d.option.clone(),
        })
        .collect()
}
