use crate::Field;

/// The top-level structure containing all fields of an interview.
///
/// An interview is an ordered sequence of fields, each acquired through its
/// own validate-retry loop, optionally framed by prelude and epilogue text.
#[derive(Debug, Clone, Default)]
pub struct Interview {
    /// Optional text printed before the first field.
    prelude: Option<String>,

    /// The fields, asked in order.
    fields: Vec<Field>,

    /// Optional text printed after the last field.
    epilogue: Option<String>,
}

impl Interview {
    /// Create a new interview with the given fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            prelude: None,
            fields,
            epilogue: None,
        }
    }

    /// Set the prelude text.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue text.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the prelude text, if any.
    pub fn prelude(&self) -> Option<&str> {
        self.prelude.as_deref()
    }

    /// Get the epilogue text, if any.
    pub fn epilogue(&self) -> Option<&str> {
        self.epilogue.as_deref()
    }

    /// Get the fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the interview has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
