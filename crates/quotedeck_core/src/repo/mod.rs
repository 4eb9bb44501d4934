//! Persistence layer: key-value state port and the quote store built on it.
//!
//! # Responsibility
//! - Define the storage-agnostic state port used by all persistence.
//! - Keep SQLite details inside the core persistence boundary.
//!
//! # Invariants
//! - Every write rewrites the full value for its key; last writer wins.
//! - Store APIs return semantic errors (`Validation`, `InvalidData`) in
//!   addition to DB transport errors.

pub mod quote_store;
pub mod state_repo;
