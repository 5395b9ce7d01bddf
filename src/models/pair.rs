use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A single start/end time pair as entered by the user.
///
/// Each field is either empty or an "HH:MM" string. Fields keep whatever the
/// user typed: invalid values stay displayed and editable, they are only
/// skipped by the duration calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePair {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl TimePair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Start => self.start = value.into(),
            Field::End => self.end = value.into(),
        }
    }
}

/// Selector for one side of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    End,
}

impl Field {
    /// Parse a user-supplied selector ("start" / "end", case-insensitive,
    /// "s" / "e" accepted as shorthand).
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.to_lowercase().as_str() {
            "start" | "s" => Ok(Field::Start),
            "end" | "e" => Ok(Field::End),
            other => Err(AppError::InvalidField(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Start => "start",
            Field::End => "end",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Baseline state: one empty pair, so the form is never without a row.
pub fn single_empty_pair() -> Vec<TimePair> {
    vec![TimePair::default()]
}
