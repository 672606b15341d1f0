//! # typetour-console
//!
//! Line-oriented console backend for typetour interviews.
//!
//! `ConsoleBackend` runs the field-acquisition loop over any
//! `BufRead`/`Write` pair: print the prompt, read one line, trim it,
//! parse it according to the field's kind, and either store the answer or
//! print an error line and re-prompt. Production code passes locked
//! stdin/stdout; tests pass in-memory buffers and assert on the exact bytes.

mod backend;
pub use backend::{ConsoleBackend, ConsoleError};
