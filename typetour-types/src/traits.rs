use crate::{Answers, Interview};

/// Trait for backend implementations that collect interview answers.
///
/// Backends receive an `Interview` and return `Answers`. They decide how the
/// fields are presented (console prompts, scripted answers in tests) and
/// handle field validation internally in retry loops where they can.
pub trait PromptBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Collect an answer for every field of the interview.
    ///
    /// Recoverable validation failures are handled internally — this only
    /// returns once all fields are valid, or on backend failure.
    fn collect(&mut self, interview: &Interview) -> Result<Answers, Self::Error>;
}
