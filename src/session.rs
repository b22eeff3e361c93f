//! Explicit state for one respondent working through the survey.
//!
//! A session is created when the survey starts and owns everything that
//! changes while it is filled in: the answers, the last computed score and
//! step progress. Completing it freezes the answers; `reset` starts over.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::answers::{AnswerSet, AnswerValue};
use crate::error::SessionError;
use crate::scoring::{compute_score_at, new_deductions, DeductionEvent, Score};
use crate::table::{DeductionTable, FieldKind};
use crate::tier::Tier;
use crate::validate::{validate_step_with, STEPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub id: &'static str,
    pub name: &'static str,
    pub status: StepStatus,
}

const STEP_NAMES: [&str; 6] = [
    "Thông tin cơ bản",
    "Độ tuổi",
    "Dấu hiệu thể chất",
    "Dấu hiệu tâm lý",
    "Yếu tố nguy cơ",
    "Thuốc đang sử dụng",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    steps: Vec<Step>,
    current: usize,
}

impl Default for StepProgress {
    fn default() -> Self {
        let steps = STEPS
            .into_iter()
            .zip(STEP_NAMES)
            .enumerate()
            .map(|(i, (id, name))| Step {
                id,
                name,
                status: if i == 0 {
                    StepStatus::Current
                } else {
                    StepStatus::Upcoming
                },
            })
            .collect();
        StepProgress { steps, current: 0 }
    }
}

impl StepProgress {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.steps[self.current].status = StepStatus::Complete;
        self.current += 1;
        self.steps[self.current].status = StepStatus::Current;
        true
    }

    fn retreat(&mut self) -> bool {
        self.go_to(self.current.wrapping_sub(1))
    }

    /// Only earlier steps can be revisited; everything after the target
    /// becomes upcoming again.
    fn go_to(&mut self, index: usize) -> bool {
        if index >= self.current {
            return false;
        }
        for step in &mut self.steps[index + 1..] {
            step.status = StepStatus::Upcoming;
        }
        self.steps[index].status = StepStatus::Current;
        self.current = index;
        true
    }

    fn complete_all(&mut self) {
        for step in &mut self.steps {
            step.status = StepStatus::Complete;
        }
    }
}

/// The frozen result of a completed survey, ready to hand to a persistence
/// collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyOutcome {
    pub answers: AnswerSet,
    pub score: Score,
    pub tier: &'static Tier,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SurveySession {
    table: DeductionTable,
    answers: AnswerSet,
    score: Score,
    progress: StepProgress,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Default for SurveySession {
    fn default() -> Self {
        Self::start()
    }
}

impl SurveySession {
    pub fn start() -> Self {
        Self::with_table(DeductionTable::standard())
    }

    pub fn with_table(table: DeductionTable) -> Self {
        SurveySession {
            table,
            answers: AnswerSet::new(),
            score: Score::initial(),
            progress: StepProgress::default(),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn tier(&self) -> &'static Tier {
        self.score.tier()
    }

    pub fn progress(&self) -> &StepProgress {
        &self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Sets a field outright, e.g. a text input or the age radio group.
    pub fn set_value(
        &mut self,
        step: &str,
        field: &str,
        value: impl Into<AnswerValue>,
    ) -> Result<Vec<DeductionEvent>, SessionError> {
        self.ensure_open()?;
        self.answers.set(step, field, value);
        Ok(self.rescore())
    }

    pub fn clear_value(
        &mut self,
        step: &str,
        field: &str,
    ) -> Result<Vec<DeductionEvent>, SessionError> {
        self.ensure_open()?;
        self.answers.remove(step, field);
        Ok(self.rescore())
    }

    /// Applies a click on `option` in a checkbox group, honouring sentinel
    /// exclusivity. Fields unknown to the table toggle as plain checkboxes.
    pub fn toggle_option(
        &mut self,
        step: &str,
        field: &str,
        option: &str,
    ) -> Result<Vec<DeductionEvent>, SessionError> {
        self.ensure_open()?;

        let current: Vec<String> = match self.answers.get(step, field) {
            Some(AnswerValue::Multi(values)) => values.clone(),
            Some(AnswerValue::Single(value)) if !value.is_empty() => vec![value.clone()],
            _ => vec![],
        };

        let next = match self.table.field_for(step, field) {
            Some(spec) if spec.kind == FieldKind::Single => AnswerValue::from(option),
            Some(spec) => {
                let other_involved = spec
                    .other
                    .is_some_and(|other| other == option || current.iter().any(|v| v == other));
                if let (true, Some(detail)) = (other_involved, spec.other_detail) {
                    self.answers.remove(step, detail);
                }
                AnswerValue::Multi(spec.toggle(&current, option))
            }
            None => {
                let mut next = current;
                if let Some(pos) = next.iter().position(|v| v == option) {
                    next.remove(pos);
                } else {
                    next.push(option.to_string());
                }
                AnswerValue::Multi(next)
            }
        };

        self.answers.set(step, field, next);
        Ok(self.rescore())
    }

    /// Moves forward once the current step validates.
    pub fn next_step(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        let step = self.progress.current().id;
        let problems = validate_step_with(&self.table, &self.answers, step);
        if !problems.is_empty() {
            return Err(SessionError::Validation(problems));
        }
        self.progress.advance();
        Ok(())
    }

    pub fn back(&mut self) -> bool {
        !self.is_complete() && self.progress.retreat()
    }

    pub fn go_to(&mut self, step: &str) -> Result<bool, SessionError> {
        self.ensure_open()?;
        let index = self
            .progress
            .steps()
            .iter()
            .position(|s| s.id == step)
            .ok_or_else(|| SessionError::NoSuchStep(step.to_string()))?;
        Ok(self.progress.go_to(index))
    }

    /// Validates every step and freezes the session.
    pub fn complete(&mut self) -> Result<SurveyOutcome, SessionError> {
        self.ensure_open()?;
        let problems: Vec<_> = STEPS
            .iter()
            .flat_map(|step| validate_step_with(&self.table, &self.answers, step))
            .collect();
        if !problems.is_empty() {
            return Err(SessionError::Validation(problems));
        }

        let completed_at = Utc::now();
        self.completed_at = Some(completed_at);
        self.progress.complete_all();
        tracing::info!(
            score = self.score.current_score,
            tier = %self.tier().key,
            "survey completed"
        );

        Ok(SurveyOutcome {
            answers: self.answers.clone(),
            score: self.score.clone(),
            tier: self.tier(),
            started_at: self.started_at,
            completed_at,
        })
    }

    /// Discards all answers and starts a fresh survey.
    pub fn reset(&mut self) {
        *self = Self::with_table(self.table);
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.is_complete() {
            Err(SessionError::Completed)
        } else {
            Ok(())
        }
    }

    fn rescore(&mut self) -> Vec<DeductionEvent> {
        let next = compute_score_at(&self.table, &self.answers, Utc::now());
        let events = new_deductions(&self.score, &next);
        for event in &events {
            tracing::debug!(step = %event.step, points = event.points, "new deduction");
        }
        if !self.score.same_outcome(&next) {
            self.score = next;
        }
        events
    }
}
