//! Domain model for quote records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one quote-centric shape for store, transfer and sync paths.
//!
//! # Invariants
//! - Quote identity is structural (`text` + `category` exact equality).
//! - Deletion does not exist in this domain; quotes are only ever appended.

pub mod quote;
