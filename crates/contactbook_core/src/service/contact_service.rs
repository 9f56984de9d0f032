//! Contact use-case service.
//!
//! # Responsibility
//! - Provide the four record operations as a plain functional interface,
//!   independent of any presentation technology.
//! - Delegate persistence to the repository contract.
//!
//! # Invariants
//! - No automatic change notification: callers re-list after mutations to
//!   keep any displayed view consistent.

use crate::model::contact::{Contact, ContactDraft, RecordId};
use crate::repo::contact_repo::{ContactRepository, RepoResult};

/// Use-case service wrapper for contact CRUD operations.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a contact from raw form fields.
    ///
    /// # Contract
    /// - `age` must already be a validated integer by the time this is called.
    /// - Returns the storage-assigned record id on success.
    /// - Returns `EmailTaken` when the email duplicates an existing record.
    pub fn create_contact(
        &self,
        name: impl Into<String>,
        age: i64,
        email: impl Into<String>,
    ) -> RepoResult<RecordId> {
        let draft = ContactDraft::new(name, age, email);
        self.repo.create_contact(&draft)
    }

    /// Replaces all mutable fields of an existing contact.
    ///
    /// Returns repository-level not-found, email-taken, or validation errors
    /// unchanged.
    pub fn update_contact(&self, contact: &Contact) -> RepoResult<()> {
        self.repo.update_contact(contact)
    }

    /// Loads one contact by id, e.g. to pre-fill an edit form.
    pub fn get_contact(&self, id: RecordId) -> RepoResult<Option<Contact>> {
        self.repo.get_contact(id)
    }

    /// Returns a fresh full snapshot of all contacts in insertion order.
    pub fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        self.repo.list_contacts()
    }

    /// Permanently deletes one contact by id.
    pub fn delete_contact(&self, id: RecordId) -> RepoResult<()> {
        self.repo.delete_contact(id)
    }
}
