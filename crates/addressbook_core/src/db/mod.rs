//! SQLite storage bootstrap and the `person` table schema.
//!
//! # Responsibility
//! - Open short-lived SQLite connections for address book operations.
//! - Create the `person` table on demand.
//!
//! # Invariants
//! - Every store operation releases its connection before returning,
//!   on success and on error.
//! - Writes are committed before the operation returns.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod schema;
mod store;

pub use store::Store;

/// Store file used when no `--db` path is given.
pub const DEFAULT_DB_PATH: &str = "./contacts.db";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The store file cannot be opened or is not a SQLite database.
    Connection {
        path: PathBuf,
        source: rusqlite::Error,
    },
    /// Malformed statement or constraint violation.
    Query(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection { path, source } => {
                write!(f, "cannot open store `{}`: {source}", path.display())
            }
            Self::Query(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connection { source, .. } => Some(source),
            Self::Query(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}
