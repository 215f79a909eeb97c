//! Fixed schema of the `person` table.
//!
//! There is no migration registry: the table is created once, on the first
//! write against a fresh store, and never altered afterwards.

/// Name of the single table holding contacts.
pub const PERSON_TABLE: &str = "person";

/// Column widths are a convention only; SQLite does not enforce `CHAR(50)`.
pub const CREATE_PERSON_TABLE_SQL: &str = "CREATE TABLE person (
    name TEXT NOT NULL,
    job CHAR(50),
    company CHAR(50),
    email CHAR(50),
    phone CHAR(50),
    address CHAR(50)
);";

pub const TABLE_EXISTS_SQL: &str = "SELECT EXISTS(
    SELECT 1
    FROM sqlite_master
    WHERE type = 'table' AND name = ?1
);";
