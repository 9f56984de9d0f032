//! Contact domain model.
//!
//! # Responsibility
//! - Define the persisted `Contact` read model and the `ContactDraft` input
//!   shape used on the create path.
//! - Provide the validation rules callers must pass before persistence.
//!
//! # Invariants
//! - `id` is storage-assigned, stable, and never reused for another record.
//! - `name` and `email` are non-empty after trimming.
//! - `age` intentionally carries no range check; "parses as an integer" is
//!   the whole contract.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by storage (`INTEGER PRIMARY KEY AUTOINCREMENT`).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// Validation failure raised before any SQL statement is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// `name` is empty or whitespace-only.
    EmptyName,
    /// `email` is empty or whitespace-only.
    EmptyEmail,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name must not be empty"),
            Self::EmptyEmail => write!(f, "contact email must not be empty"),
        }
    }
}

impl Error for ContactValidationError {}

/// Persisted contact record.
///
/// The shape mirrors the `records` table one-to-one; there are no derived or
/// optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Storage-assigned stable ID.
    pub id: RecordId,
    /// Display name. Non-empty.
    pub name: String,
    /// Age in years. Deliberately unbounded.
    pub age: i64,
    /// Contact email. Non-empty and unique across all records.
    pub email: String,
}

impl Contact {
    /// Validates field-level rules shared with `ContactDraft`.
    ///
    /// # Errors
    /// - `EmptyName` when `name` trims to empty.
    /// - `EmptyEmail` when `email` trims to empty.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        validate_fields(&self.name, &self.email)
    }
}

/// Create-side input for a new contact. Storage assigns the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    /// Display name. Non-empty.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Contact email. Non-empty; uniqueness is enforced by storage.
    pub email: String,
}

impl ContactDraft {
    /// Builds a draft from raw field values.
    ///
    /// This constructor does not validate; call `validate()` before handing
    /// the draft to a repository (repositories re-check regardless).
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Validates field-level rules.
    ///
    /// # Errors
    /// - `EmptyName` when `name` trims to empty.
    /// - `EmptyEmail` when `email` trims to empty.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        validate_fields(&self.name, &self.email)
    }

    /// Promotes a draft to a full record once storage has assigned an id.
    pub fn into_contact(self, id: RecordId) -> Contact {
        Contact {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}

fn validate_fields(name: &str, email: &str) -> Result<(), ContactValidationError> {
    if name.trim().is_empty() {
        return Err(ContactValidationError::EmptyName);
    }
    if email.trim().is_empty() {
        return Err(ContactValidationError::EmptyEmail);
    }
    Ok(())
}
