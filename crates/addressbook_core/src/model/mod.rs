//! Domain model for address book entries.
//!
//! # Invariants
//! - A contact is identified by its name only; duplicates are allowed.

pub mod contact;
