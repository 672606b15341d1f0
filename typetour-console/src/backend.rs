//! Console backend implementation for the PromptBackend trait.

use std::io::{BufRead, Write};

use thiserror::Error;
use typetour_types::{Answer, Answers, Field, Interview, ParseError, PromptBackend};

/// How many consecutive failed reads are tolerated before the interview is
/// abandoned. A closed stdin would otherwise re-prompt forever.
const DEFAULT_MAX_READ_FAILURES: u32 = 5;

/// Error type for the console backend.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Writing a prompt or message failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream stopped yielding lines.
    #[error("input closed after {attempts} consecutive failed reads")]
    InputClosed { attempts: u32 },
}

/// Console backend for plain line-oriented prompts.
///
/// Each field is re-prompted until a line parses, so `collect` only returns
/// once every answer is valid (or the input stream dies). Prompts are written
/// without a trailing newline and flushed before reading; validation failures
/// are reported as `❌ Error:` lines.
#[derive(Debug)]
pub struct ConsoleBackend<R, W> {
    reader: R,
    writer: W,
    max_read_failures: u32,
}

impl<R: BufRead, W: Write> ConsoleBackend<R, W> {
    /// Create a new console backend over the given reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_read_failures: DEFAULT_MAX_READ_FAILURES,
        }
    }

    /// Set how many consecutive failed reads are tolerated before the
    /// interview is abandoned with `ConsoleError::InputClosed`.
    pub fn with_max_read_failures(mut self, limit: u32) -> Self {
        self.max_read_failures = limit;
        self
    }

    /// Ask a single field until a valid answer is read.
    ///
    /// A successful read resets the failure counter, so only an input source
    /// that stops yielding lines altogether can abandon the interview.
    fn ask_field(&mut self, field: &Field) -> Result<Answer, ConsoleError> {
        let mut failed_reads = 0u32;
        loop {
            write!(self.writer, "{} ", field.prompt())?;
            self.writer.flush()?;

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    failed_reads += 1;
                    if failed_reads >= self.max_read_failures {
                        return Err(ConsoleError::InputClosed {
                            attempts: failed_reads,
                        });
                    }
                    writeln!(self.writer, "❌ Error reading input. Please try again.")?;
                }
                Ok(_) => {
                    failed_reads = 0;
                    match field.parse(&line) {
                        Ok(answer) => return Ok(answer),
                        Err(err) => self.report(&err)?,
                    }
                }
            }
        }
    }

    /// Print a validation failure and let the caller re-prompt.
    fn report(&mut self, err: &ParseError) -> Result<(), ConsoleError> {
        writeln!(self.writer, "❌ Error: {err}. Please try again.")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> PromptBackend for ConsoleBackend<R, W> {
    type Error = ConsoleError;

    fn collect(&mut self, interview: &Interview) -> Result<Answers, ConsoleError> {
        if let Some(prelude) = interview.prelude() {
            writeln!(self.writer, "{prelude}")?;
        }

        let mut answers = Answers::new();
        for field in interview.fields() {
            let answer = self.ask_field(field)?;
            answers.insert(field.key(), answer);
        }

        if let Some(epilogue) = interview.epilogue() {
            writeln!(self.writer, "{epilogue}")?;
        }

        Ok(answers)
    }
}
