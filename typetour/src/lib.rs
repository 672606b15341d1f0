//! # typetour
//!
//! An interactive console tour of Rust's primitive data types.
//!
//! The program runs in three phases: a deterministic showcase of the
//! primitive type categories, a four-field interview with per-field
//! validation and retry, and a summary of values derived from the answers.
//! All I/O goes through the reader/writer pair handed to [`run`], so tests
//! drive the whole program with in-memory buffers.

mod profile;
pub use profile::UserProfile;

mod showcase;

use std::io::{BufRead, Write};

use typetour_console::ConsoleBackend;
use typetour_types::PromptBackend;

/// Run the complete demo against the given input/output pair.
pub fn run(reader: impl BufRead, mut writer: impl Write) -> anyhow::Result<()> {
    showcase::print(&mut writer)?;

    let interview = UserProfile::interview();
    let mut backend = ConsoleBackend::new(reader, &mut writer);
    let answers = backend.collect(&interview)?;
    drop(backend);

    let profile = UserProfile::from_answers(&answers)?;
    profile.print_summary(&mut writer)?;

    Ok(())
}
