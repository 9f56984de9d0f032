//! Domain model for contact records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by all persistence paths.
//! - Own caller-side validation rules applied before any SQL runs.
//!
//! # Invariants
//! - Every persisted record is identified by a storage-assigned `RecordId`.
//! - Deletion is permanent; no tombstones or versioning exist.

pub mod contact;
