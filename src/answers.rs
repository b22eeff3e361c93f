use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single answer: one selected option, or the set of options ticked in a
/// checkbox group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    /// Whether the answer contributes anything: a non-blank string or a
    /// non-empty list.
    pub fn is_populated(&self) -> bool {
        match self {
            AnswerValue::Single(value) => !value.trim().is_empty(),
            AnswerValue::Multi(values) => !values.is_empty(),
        }
    }

    /// Selected options with duplicates removed, first occurrence wins.
    pub fn selected(&self) -> Vec<&str> {
        match self {
            AnswerValue::Single(value) if value.trim().is_empty() => vec![],
            AnswerValue::Single(value) => vec![value.as_str()],
            AnswerValue::Multi(values) => {
                let mut out: Vec<&str> = Vec::with_capacity(values.len());
                for value in values {
                    if !out.contains(&value.as_str()) {
                        out.push(value);
                    }
                }
                out
            }
        }
    }

    pub fn contains(&self, option: &str) -> bool {
        match self {
            AnswerValue::Single(value) => value == option,
            AnswerValue::Multi(values) => values.iter().any(|v| v == option),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Single(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Single(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        AnswerValue::Multi(values)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        AnswerValue::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Survey responses keyed by step id (`"step3"`) and field name.
///
/// Both levels are sorted maps, so two answer sets holding the same
/// responses compare and iterate identically no matter in which order the
/// fields were filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    steps: BTreeMap<String, BTreeMap<String, AnswerValue>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn get(&self, step: &str, field: &str) -> Option<&AnswerValue> {
        self.steps.get(step).and_then(|fields| fields.get(field))
    }

    /// Looks up a `"stepN.field"` key.
    pub fn get_key(&self, key: &str) -> Option<&AnswerValue> {
        let (step, field) = key.split_once('.')?;
        self.get(step, field)
    }

    /// Convenience accessor for a single-valued text answer.
    pub fn text(&self, step: &str, field: &str) -> Option<&str> {
        match self.get(step, field) {
            Some(AnswerValue::Single(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn set(&mut self, step: &str, field: &str, value: impl Into<AnswerValue>) {
        self.steps
            .entry(step.to_string())
            .or_default()
            .insert(field.to_string(), value.into());
    }

    pub fn remove(&mut self, step: &str, field: &str) -> Option<AnswerValue> {
        let fields = self.steps.get_mut(step)?;
        let removed = fields.remove(field);
        if fields.is_empty() {
            self.steps.remove(step);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.steps.values().all(|fields| fields.is_empty())
    }

    /// Iterates `(step, field, value)` in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &AnswerValue)> {
        self.steps.iter().flat_map(|(step, fields)| {
            fields
                .iter()
                .map(move |(field, value)| (step.as_str(), field.as_str(), value))
        })
    }
}
