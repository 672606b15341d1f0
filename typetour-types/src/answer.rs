/// A single answer collected during an interview.
///
/// This is the value stored in `Answers` for each completed field.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// A string value (from Text fields).
    Text(String),

    /// An integer value (from Int fields).
    Int(i64),

    /// A floating-point value (from Float fields).
    Float(f64),

    /// A boolean value (from Confirm fields).
    Bool(bool),
}

impl Answer {
    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Bool(_) => "Bool",
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for Answer {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Answer {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Answer {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        assert_eq!(Answer::Text("hi".into()).as_text(), Some("hi"));
        assert_eq!(Answer::Int(7).as_int(), Some(7));
        assert_eq!(Answer::Float(2.5).as_float(), Some(2.5));
        assert_eq!(Answer::Bool(true).as_bool(), Some(true));
    }

    #[test]
    fn accessors_reject_other_kinds() {
        assert_eq!(Answer::Int(7).as_text(), None);
        assert_eq!(Answer::Text("7".into()).as_int(), None);
        assert_eq!(Answer::Bool(true).as_float(), None);
        assert_eq!(Answer::Float(1.0).as_bool(), None);
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Answer::from("hi"), Answer::Text("hi".to_string()));
        assert_eq!(Answer::from("hi".to_string()), Answer::Text("hi".to_string()));
        assert_eq!(Answer::from(7i32), Answer::Int(7));
        assert_eq!(Answer::from(7i64), Answer::Int(7));
        assert_eq!(Answer::from(2.5), Answer::Float(2.5));
        assert_eq!(Answer::from(true), Answer::Bool(true));
    }

    #[test]
    fn type_names() {
        assert_eq!(Answer::Text(String::new()).type_name(), "Text");
        assert_eq!(Answer::Int(0).type_name(), "Int");
        assert_eq!(Answer::Float(0.0).type_name(), "Float");
        assert_eq!(Answer::Bool(false).type_name(), "Bool");
    }
}
