//! Use-case services for presentation-layer callers.
//!
//! # Responsibility
//! - Provide stable entry points a form/table UI can call directly.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - Services remain storage-agnostic and display-agnostic.

pub mod contact_service;
