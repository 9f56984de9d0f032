//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the contact CRUD contract independent of any presentation layer.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must validate field rules before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `EmailTaken`) in
//!   addition to DB transport errors.

pub mod contact_repo;
