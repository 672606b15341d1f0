/// The recoverable, per-field validation error taxonomy.
///
/// Every variant is recovered locally by re-prompting; nothing here ever
/// terminates an interview. The `Display` text of each variant is the
/// user-facing message body, which backends prefix and print.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Input was empty after trimming surrounding whitespace.
    #[error("input cannot be empty")]
    Empty,

    /// Input could not be parsed as a number of the requested kind,
    /// or parsed to a non-finite float.
    #[error("'{input}' is not a valid number")]
    InvalidNumber { input: String },

    /// A parsed integer fell below the field's minimum.
    #[error("{value} is too small (minimum is {min})")]
    BelowMinimum { value: i64, min: i64 },

    /// A parsed integer exceeded the field's maximum.
    #[error("{value} is too large (maximum is {max})")]
    AboveMaximum { value: i64, max: i64 },

    /// Input was not one of the recognized yes/no tokens.
    #[error("'{input}' is not a valid yes/no response")]
    InvalidToken { input: String },
}
