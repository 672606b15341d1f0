//! Core types for typetour interviews.
//!
//! This crate provides the foundational types for defining and running
//! line-oriented interviews:
//! - `Interview` - The top-level sequence of fields with prelude/epilogue
//! - `Field` and `FieldKind` - Individual fields and their validation rules
//! - `Answer` and `Answers` - Collected values and keyed access to them
//! - `PromptBackend` trait - For implementing collection backends
//! - `ScriptedBackend` - Pre-seeded answers for tests, no user interaction

mod answer;
pub use answer::Answer;

mod answers;
pub use answers::{AnswerError, Answers};

mod error;
pub use error::ParseError;

mod field;
pub use field::{Field, FieldKind, IntField};

mod interview;
pub use interview::Interview;

mod traits;
pub use traits::PromptBackend;

mod scripted;
pub use scripted::{ScriptedBackend, ScriptedError};
