//! Scripted backend for running interviews without user interaction.
//!
//! `ScriptedBackend` answers every field from a pre-seeded map, which makes
//! it possible to test interview-driven types without any I/O. Seeded values
//! still pass through the fields' validation rules, so a script that violates
//! a bound fails the collection instead of smuggling an invalid value in.

use std::collections::HashMap;

use crate::{Answer, Answers, Interview, ParseError, PromptBackend};

/// A backend that answers fields from pre-configured values.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    answers: HashMap<String, Answer>,
}

/// Error type for `ScriptedBackend`.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedError {
    #[error("missing scripted answer for field '{0}'")]
    MissingAnswer(String),

    #[error("scripted answer for '{key}' has type {actual}, field expects {expected}")]
    KindMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("scripted answer for '{key}' is invalid: {source}")]
    Invalid { key: String, source: ParseError },
}

impl ScriptedBackend {
    /// Create a new empty scripted backend.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    /// Add an answer for a given field key.
    pub fn with_answer(mut self, key: impl Into<String>, value: impl Into<Answer>) -> Self {
        self.answers.insert(key.into(), value.into());
        self
    }

    /// Add a string answer.
    pub fn with_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_answer(key, Answer::Text(value.into()))
    }

    /// Add an integer answer.
    pub fn with_int(self, key: impl Into<String>, value: i64) -> Self {
        self.with_answer(key, Answer::Int(value))
    }

    /// Add a float answer.
    pub fn with_float(self, key: impl Into<String>, value: f64) -> Self {
        self.with_answer(key, Answer::Float(value))
    }

    /// Add a boolean answer.
    pub fn with_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.with_answer(key, Answer::Bool(value))
    }
}

impl PromptBackend for ScriptedBackend {
    type Error = ScriptedError;

    fn collect(&mut self, interview: &Interview) -> Result<Answers, Self::Error> {
        let mut collected = Answers::new();

        for field in interview.fields() {
            let Some(answer) = self.answers.get(field.key()) else {
                return Err(ScriptedError::MissingAnswer(field.key().to_string()));
            };
            if !field.kind().matches(answer) {
                return Err(ScriptedError::KindMismatch {
                    key: field.key().to_string(),
                    expected: field.kind().type_name(),
                    actual: answer.type_name(),
                });
            }
            field
                .validate(answer)
                .map_err(|source| ScriptedError::Invalid {
                    key: field.key().to_string(),
                    source,
                })?;
            collected.insert(field.key(), answer.clone());
        }

        Ok(collected)
    }
}
