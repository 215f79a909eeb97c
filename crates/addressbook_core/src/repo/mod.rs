//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from services and command handlers.
//!
//! # Invariants
//! - Repository writes enforce `Contact::validate()` before persistence.

pub mod contact_repo;
