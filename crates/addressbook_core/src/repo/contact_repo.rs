//! Contact repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide typed insert/list/delete APIs over the `person` table.
//! - Keep SQL text inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Contact::validate()` before any SQL runs.
//! - Every user-supplied value is a bound parameter.
//! - Reads and deletes against a store without `person` behave as empty.

use crate::db::schema::{CREATE_PERSON_TABLE_SQL, PERSON_TABLE};
use crate::db::{DbError, Store};
use crate::model::contact::{Contact, ContactValidationError};
use log::info;
use rusqlite::{params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT
    name,
    job,
    company,
    email,
    phone,
    address
FROM person
ORDER BY rowid ASC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Query(value))
    }
}

/// Outcome of a successful write, rendered as the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Registered,
    /// `rows` may be zero; the message does not change.
    Deleted { rows: usize },
}

impl Display for Confirmation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registered => write!(f, "Contact registered successfully!"),
            Self::Deleted { .. } => write!(f, "Contact deleted successfully!"),
        }
    }
}

/// Repository interface for contact storage.
pub trait ContactRepository {
    fn table_exists(&self, table: &str) -> RepoResult<bool>;
    fn ensure_table(&self) -> RepoResult<()>;
    fn insert_contact(&self, contact: &Contact) -> RepoResult<Confirmation>;
    fn list_contacts(&self) -> RepoResult<Vec<Contact>>;
    fn delete_by_name(&self, name: &str) -> RepoResult<Confirmation>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'store> {
    store: &'store Store,
}

impl<'store> SqliteContactRepository<'store> {
    pub fn new(store: &'store Store) -> Self {
        Self { store }
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn table_exists(&self, table: &str) -> RepoResult<bool> {
        Ok(self.store.table_exists(table)?)
    }

    fn ensure_table(&self) -> RepoResult<()> {
        if !self.table_exists(PERSON_TABLE)? {
            self.store.execute(CREATE_PERSON_TABLE_SQL, [])?;
            info!("event=table_create module=repo status=ok table={PERSON_TABLE}");
        }
        Ok(())
    }

    fn insert_contact(&self, contact: &Contact) -> RepoResult<Confirmation> {
        contact.validate()?;
        self.ensure_table()?;

        self.store.execute(
            "INSERT INTO person (
                name,
                job,
                company,
                email,
                phone,
                address
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                contact.name.as_str(),
                contact.job.as_str(),
                contact.company.as_str(),
                contact.email.as_str(),
                contact.phone.as_str(),
                contact.address.as_str(),
            ],
        )?;

        Ok(Confirmation::Registered)
    }

    fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        if !self.table_exists(PERSON_TABLE)? {
            return Ok(Vec::new());
        }
        Ok(self.store.query(CONTACT_SELECT_SQL, [], parse_contact_row)?)
    }

    fn delete_by_name(&self, name: &str) -> RepoResult<Confirmation> {
        if !self.table_exists(PERSON_TABLE)? {
            return Ok(Confirmation::Deleted { rows: 0 });
        }
        let rows = self
            .store
            .execute("DELETE FROM person WHERE name = ?1;", [name])?;
        Ok(Confirmation::Deleted { rows })
    }
}

fn parse_contact_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    // Only `name` is NOT NULL; rows written by other tools may leave the rest null.
    let optional = |column: &str| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
    };

    Ok(Contact {
        name: row.get("name")?,
        job: optional("job")?,
        company: optional("company")?,
        email: optional("email")?,
        phone: optional("phone")?,
        address: optional("address")?,
    })
}
