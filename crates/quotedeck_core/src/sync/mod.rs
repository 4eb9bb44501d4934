//! Remote synchronization: capability trait, HTTP adapter and engine.
//!
//! # Responsibility
//! - Define the remote source contract used by the sync engine.
//! - Run the fetch/merge/push sequence with degrade-on-failure semantics.
//!
//! # Invariants
//! - Network sub-failures never fail the overall sync; they degrade to an
//!   empty candidate set or `push_succeeded = false`.
//! - Push always uploads the entire current local list and is never rolled
//!   back or retried.

pub mod engine;
pub mod remote;
