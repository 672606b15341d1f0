use std::collections::HashMap;

use crate::Answer;

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("missing answer for field '{0}'")]
    Missing(String),

    #[error("answer for '{key}' has type {actual}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Collected answers from an interview, keyed by field key.
///
/// Interviews are a flat sequence of fields, so keys are plain strings
/// (the `Field::key` of each field).
#[derive(Debug, Clone, Default)]
pub struct Answers {
    values: HashMap<String, Answer>,
}

impl Answers {
    /// Create a new empty answers collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer under the given key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Answer>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get an answer under the given key.
    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.values.get(key)
    }

    /// Check if an answer exists under the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get an iterator over all key-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Typed accessors ===

    /// Get a string answer under the given key.
    pub fn get_text(&self, key: &str) -> Result<&str, AnswerError> {
        match self.get(key) {
            Some(Answer::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.to_string(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.to_string())),
        }
    }

    /// Get an integer answer under the given key.
    pub fn get_int(&self, key: &str) -> Result<i64, AnswerError> {
        match self.get(key) {
            Some(Answer::Int(i)) => Ok(*i),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.to_string(),
                expected: "Int",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.to_string())),
        }
    }

    /// Get a float answer under the given key.
    pub fn get_float(&self, key: &str) -> Result<f64, AnswerError> {
        match self.get(key) {
            Some(Answer::Float(f)) => Ok(*f),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.to_string(),
                expected: "Float",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.to_string())),
        }
    }

    /// Get a boolean answer under the given key.
    pub fn get_bool(&self, key: &str) -> Result<bool, AnswerError> {
        match self.get(key) {
            Some(Answer::Bool(b)) => Ok(*b),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.to_string(),
                expected: "Bool",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.to_string())),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (String, Answer);
    type IntoIter = std::collections::hash_map::IntoIter<String, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a String, &'a Answer);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
