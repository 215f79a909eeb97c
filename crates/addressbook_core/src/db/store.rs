//! File-backed store with one connection per operation.
//!
//! # Responsibility
//! - Open (and create if absent) the SQLite file at a configured path.
//! - Run single write statements in a committed transaction.
//! - Run read statements and map every row through a caller-supplied closure.
//!
//! # Invariants
//! - Connections are scoped to a single call and dropped on every exit path.
//! - A file that exists but is not a SQLite database is reported as
//!   `DbError::Connection`, never as a query error.

use super::schema::TABLE_EXISTS_SQL;
use super::{DbError, DbResult};
use log::{debug, error, info};
use rusqlite::{Connection, Params, Row};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the on-disk address book.
///
/// Holds only the path; each operation connects, works and disconnects.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens the store at `path` and verifies it is usable.
    ///
    /// # Errors
    /// - `DbError::Connection` when the file cannot be opened or created, or
    ///   when it is not a SQLite database.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let started_at = Instant::now();
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        info!("event=store_open module=db status=start");

        match store.connect() {
            Ok(_conn) => {
                info!(
                    "event=store_open module=db status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=store_open module=db status=error duration_ms={} error_code=store_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection to the store file.
    pub fn connect(&self) -> DbResult<Connection> {
        let conn = Connection::open(&self.path).map_err(|source| self.connection_error(source))?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|source| self.connection_error(source))?;
        // Opening is lazy; touching the header is what detects a non-database file.
        conn.query_row("PRAGMA schema_version;", [], |row| row.get::<_, i64>(0))
            .map_err(|source| self.connection_error(source))?;
        debug!("event=db_connect module=db status=ok");
        Ok(conn)
    }

    /// Returns whether a table called `name` exists. Never writes.
    pub fn table_exists(&self, name: &str) -> DbResult<bool> {
        let conn = self.connect()?;
        let exists: i64 = conn.query_row(TABLE_EXISTS_SQL, [name], |row| row.get(0))?;
        Ok(exists == 1)
    }

    /// Runs one write statement, commits it and returns the affected row count.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> DbResult<usize> {
        let started_at = Instant::now();
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let changed = match tx.execute(sql, params) {
            Ok(changed) => changed,
            Err(err) => {
                error!(
                    "event=db_execute module=db status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };
        tx.commit()?;
        debug!(
            "event=db_execute module=db status=ok changed={} duration_ms={}",
            changed,
            started_at.elapsed().as_millis()
        );
        Ok(changed)
    }

    /// Runs one read statement and maps each row in store order.
    pub fn query<T, P, F>(&self, sql: &str, params: P, map_row: F) -> DbResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let started_at = Instant::now();
        let conn = self.connect()?;
        let rows = {
            let mut stmt = conn.prepare(sql)?;
            let mapped = stmt.query_map(params, map_row)?;
            mapped.collect::<rusqlite::Result<Vec<T>>>()?
        };
        debug!(
            "event=db_query module=db status=ok rows={} duration_ms={}",
            rows.len(),
            started_at.elapsed().as_millis()
        );
        Ok(rows)
    }

    fn connection_error(&self, source: rusqlite::Error) -> DbError {
        DbError::Connection {
            path: self.path.clone(),
            source,
        }
    }
}
