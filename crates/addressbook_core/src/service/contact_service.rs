//! Contact use-case service.
//!
//! # Responsibility
//! - Provide register/list/search/delete entry points for command handlers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Search results keep store order; no extra sorting.
//! - Delete removes rows whose name equals the argument exactly.

use crate::model::contact::Contact;
use crate::repo::contact_repo::{Confirmation, ContactRepository, RepoResult};
use log::info;

/// Use-case service wrapper for contact operations.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one contact, creating the table on first use.
    pub fn register(&self, contact: &Contact) -> RepoResult<Confirmation> {
        let confirmation = self.repo.insert_contact(contact)?;
        info!("event=contact_register module=service status=ok");
        Ok(confirmation)
    }

    /// Returns every stored contact in store order.
    pub fn list(&self) -> RepoResult<Vec<Contact>> {
        self.repo.list_contacts()
    }

    /// Returns contacts whose name contains the title-cased `query`.
    pub fn search(&self, query: &str) -> RepoResult<Vec<Contact>> {
        let found: Vec<Contact> = self
            .repo
            .list_contacts()?
            .into_iter()
            .filter(|contact| contact.name_matches(query))
            .collect();
        info!(
            "event=contact_search module=service status=ok hits={}",
            found.len()
        );
        Ok(found)
    }

    /// Deletes every contact named exactly `name`.
    pub fn delete_by_name(&self, name: &str) -> RepoResult<Confirmation> {
        let confirmation = self.repo.delete_by_name(name)?;
        if let Confirmation::Deleted { rows } = confirmation {
            info!("event=contact_delete module=service status=ok rows={rows}");
        }
        Ok(confirmation)
    }
}
