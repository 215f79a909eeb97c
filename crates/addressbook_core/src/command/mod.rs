//! Console command handlers.
//!
//! # Responsibility
//! - Translate prompted console input into service calls.
//! - Format service results for the terminal.
//!
//! # Invariants
//! - Handlers only talk to the user through `Console`, so tests can drive
//!   them with in-memory readers and writers.
//! - Store failures abort the current command and propagate to the caller.

use crate::repo::contact_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

mod add;
mod delete;
mod list;
mod search;

pub use add::run_add;
pub use delete::{resolve_choice, run_delete, InvalidChoiceError};
pub use list::run_list;
pub use search::run_search;

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug)]
pub enum CommandError {
    Repo(RepoError),
    Io(io::Error),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<io::Error> for CommandError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Line-oriented console over any reader/writer pair.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Writes `label` without a newline, then reads one line.
    ///
    /// Returns `None` at end of input. The trailing line break is stripped;
    /// other whitespace is preserved.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn out(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
