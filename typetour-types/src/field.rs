use crate::{Answer, ParseError};

/// A single field in an interview.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The key under which this field's answer is stored in `Answers`.
    key: String,

    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of field (determines parsing and validation).
    kind: FieldKind,
}

impl Field {
    /// Create a new field with the given key, prompt, and kind.
    pub fn new(key: impl Into<String>, prompt: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
            kind,
        }
    }

    /// Create a text field (non-empty after trimming).
    pub fn text(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(key, prompt, FieldKind::Text)
    }

    /// Create an unbounded integer field.
    pub fn int(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(key, prompt, FieldKind::Int(IntField::default()))
    }

    /// Create an integer field with inclusive bounds.
    pub fn int_in(key: impl Into<String>, prompt: impl Into<String>, min: i64, max: i64) -> Self {
        Self::new(
            key,
            prompt,
            FieldKind::Int(IntField::with_bounds(Some(min), Some(max))),
        )
    }

    /// Create a floating-point field (any finite decimal number).
    pub fn float(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(key, prompt, FieldKind::Float)
    }

    /// Create a yes/no confirmation field.
    pub fn confirm(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(key, prompt, FieldKind::Confirm)
    }

    /// Get the answer key for this field.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the field kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Parse one line of input according to this field's kind.
    ///
    /// The line is trimmed before validation.
    pub fn parse(&self, line: &str) -> Result<Answer, ParseError> {
        self.kind.parse(line)
    }

    /// Validate an already-typed answer against this field's kind.
    ///
    /// Used by backends that receive typed values instead of text lines.
    /// Kind mismatches are the caller's concern; this checks the value rules
    /// only (non-empty text, integer bounds, float finiteness).
    pub fn validate(&self, answer: &Answer) -> Result<(), ParseError> {
        self.kind.validate(answer)
    }
}

/// The kind of field, determining how input lines are interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text input, rejected when empty after trimming.
    Text,

    /// Integer input with optional inclusive min/max bounds.
    Int(IntField),

    /// Floating-point input; any finite, optionally signed decimal number.
    Float,

    /// Yes/no confirmation from a fixed case-insensitive token set.
    Confirm,
}

impl FieldKind {
    /// Get the kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Int(_) => "Int",
            Self::Float => "Float",
            Self::Confirm => "Confirm",
        }
    }

    /// Parse one trimmed line of input into an answer of this kind.
    pub fn parse(&self, line: &str) -> Result<Answer, ParseError> {
        let input = line.trim();
        match self {
            Self::Text => {
                if input.is_empty() {
                    Err(ParseError::Empty)
                } else {
                    Ok(Answer::Text(input.to_string()))
                }
            }
            Self::Int(bounds) => {
                let value: i64 = input.parse().map_err(|_| ParseError::InvalidNumber {
                    input: input.to_string(),
                })?;
                bounds.check(value)?;
                Ok(Answer::Int(value))
            }
            Self::Float => {
                let value: f64 = input.parse().map_err(|_| ParseError::InvalidNumber {
                    input: input.to_string(),
                })?;
                // "inf" and "NaN" parse, but are not decimal text.
                if !value.is_finite() {
                    return Err(ParseError::InvalidNumber {
                        input: input.to_string(),
                    });
                }
                Ok(Answer::Float(value))
            }
            Self::Confirm => match input.to_lowercase().as_str() {
                "yes" | "y" | "true" | "1" => Ok(Answer::Bool(true)),
                "no" | "n" | "false" | "0" => Ok(Answer::Bool(false)),
                _ => Err(ParseError::InvalidToken {
                    input: input.to_string(),
                }),
            },
        }
    }

    /// Validate a typed answer against this kind's value rules.
    pub fn validate(&self, answer: &Answer) -> Result<(), ParseError> {
        match (self, answer) {
            (Self::Text, Answer::Text(s)) => {
                if s.trim().is_empty() {
                    Err(ParseError::Empty)
                } else {
                    Ok(())
                }
            }
            (Self::Int(bounds), Answer::Int(value)) => bounds.check(*value),
            (Self::Float, Answer::Float(value)) => {
                if value.is_finite() {
                    Ok(())
                } else {
                    Err(ParseError::InvalidNumber {
                        input: value.to_string(),
                    })
                }
            }
            // Kind mismatches are rejected by the caller before this point.
            _ => Ok(()),
        }
    }

    /// Check whether a typed answer matches this kind at all.
    pub fn matches(&self, answer: &Answer) -> bool {
        matches!(
            (self, answer),
            (Self::Text, Answer::Text(_))
                | (Self::Int(_), Answer::Int(_))
                | (Self::Float, Answer::Float(_))
                | (Self::Confirm, Answer::Bool(_))
        )
    }
}

/// Bounds configuration for an integer field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntField {
    /// Optional inclusive minimum value.
    pub min: Option<i64>,

    /// Optional inclusive maximum value.
    pub max: Option<i64>,
}

impl IntField {
    /// Create with bounds.
    pub fn with_bounds(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Check a value against the bounds.
    pub fn check(&self, value: i64) -> Result<(), ParseError> {
        if let Some(min) = self.min
            && value < min
        {
            return Err(ParseError::BelowMinimum { value, min });
        }
        if let Some(max) = self.max
            && value > max
        {
            return Err(ParseError::AboveMaximum { value, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_trims_and_rejects_empty() {
        let field = Field::text("name", "Name:");
        assert_eq!(
            field.parse("  Alice \n").unwrap(),
            Answer::Text("Alice".to_string())
        );
        assert_eq!(field.parse("   \n"), Err(ParseError::Empty));
    }

    #[test]
    fn int_respects_bounds() {
        let field = Field::int_in("age", "Age:", 0, 150);
        assert_eq!(field.parse("30").unwrap(), Answer::Int(30));
        assert_eq!(field.parse("0").unwrap(), Answer::Int(0));
        assert_eq!(field.parse("150").unwrap(), Answer::Int(150));
        assert_eq!(
            field.parse("-5"),
            Err(ParseError::BelowMinimum { value: -5, min: 0 })
        );
        assert_eq!(
            field.parse("200"),
            Err(ParseError::AboveMaximum {
                value: 200,
                max: 150
            })
        );
    }

    #[test]
    fn int_rejects_unparseable() {
        let field = Field::int("count", "Count:");
        assert!(matches!(
            field.parse("abc"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert_eq!(field.parse("-42").unwrap(), Answer::Int(-42));
    }

    #[test]
    fn float_accepts_signed_and_fractional() {
        let field = Field::float("favorite", "Favorite:");
        assert_eq!(field.parse("3.5").unwrap(), Answer::Float(3.5));
        assert_eq!(field.parse("-2.25").unwrap(), Answer::Float(-2.25));
        assert_eq!(field.parse("7").unwrap(), Answer::Float(7.0));
    }

    #[test]
    fn float_rejects_non_finite() {
        let field = Field::float("favorite", "Favorite:");
        assert!(matches!(
            field.parse("abc"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            field.parse("inf"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            field.parse("NaN"),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn confirm_token_table() {
        let field = Field::confirm("likes", "Like it?");
        for token in ["yes", "y", "true", "1", "YES", "Y", "True"] {
            assert_eq!(field.parse(token).unwrap(), Answer::Bool(true), "{token}");
        }
        for token in ["no", "n", "false", "0", "NO", "N", "False"] {
            assert_eq!(field.parse(token).unwrap(), Answer::Bool(false), "{token}");
        }
        assert!(matches!(
            field.parse("maybe"),
            Err(ParseError::InvalidToken { .. })
        ));
    }

    #[test]
    fn validate_typed_answers() {
        let age = Field::int_in("age", "Age:", 0, 150);
        assert!(age.validate(&Answer::Int(30)).is_ok());
        assert!(age.validate(&Answer::Int(200)).is_err());

        let name = Field::text("name", "Name:");
        assert!(name.validate(&Answer::Text("Alice".into())).is_ok());
        assert_eq!(
            name.validate(&Answer::Text("  ".into())),
            Err(ParseError::Empty)
        );
    }

    #[test]
    fn kind_matching() {
        let field = Field::confirm("likes", "Like it?");
        assert!(field.kind().matches(&Answer::Bool(true)));
        assert!(!field.kind().matches(&Answer::Int(1)));
    }
}
