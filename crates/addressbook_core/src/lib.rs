//! Core domain logic for the address book.
//! This crate owns the store, the contact rules and the console handlers.

pub mod command;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::{
    resolve_choice, run_add, run_delete, run_list, run_search, CommandError, CommandResult,
    Console, InvalidChoiceError,
};
pub use db::{DbError, DbResult, Store, DEFAULT_DB_PATH};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{title_case, Contact, ContactValidationError};
pub use repo::contact_repo::{
    Confirmation, ContactRepository, RepoError, RepoResult, SqliteContactRepository,
};
pub use service::contact_service::ContactService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
