//! Fetch/merge/push sync engine.
//!
//! # Responsibility
//! - Reconcile the local quote store against a remote source.
//! - Express the degrade-on-failure policy as explicit `Result` branching.
//!
//! # Invariants
//! - The three phases always run in sequence, with no retries.
//! - Fetch failure degrades to an empty candidate set; it is logged, never
//!   escalated.
//! - Push is attempted regardless of fetch/merge results and its failure is
//!   never rolled back.

use crate::repo::quote_store::QuoteStore;
use crate::repo::state_repo::{RepoResult, StateStore};
use crate::sync::remote::RemoteQuoteSource;
use log::{info, warn};

/// Result summary of one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Number of remote quotes newly appended by the merge phase.
    pub added_count: usize,
    /// Whether the push phase got a success status from the remote.
    pub push_succeeded: bool,
}

/// Sync engine over an injected remote source.
pub struct SyncEngine<R: RemoteQuoteSource> {
    remote: R,
}

impl<R: RemoteQuoteSource> SyncEngine<R> {
    /// Creates an engine using the provided remote source.
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    /// Runs fetch, merge and push once against `store`.
    ///
    /// Network sub-failures degrade (empty fetch result, `push_succeeded =
    /// false`) rather than failing the run. The duplicate check runs against
    /// the store state at merge time, so unrelated mutations between fetch
    /// and merge stay safe.
    ///
    /// # Errors
    /// - Persistence failures from the merge phase propagate; nothing else
    ///   does.
    pub fn sync<S: StateStore>(&self, store: &mut QuoteStore<S>) -> RepoResult<SyncOutcome> {
        info!("event=sync_run module=sync status=start");

        let candidates = match self.remote.fetch_remote() {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(
                    "event=sync_fetch module=sync status=degraded error={}",
                    err
                );
                Vec::new()
            }
        };

        let added_count = store.merge(candidates)?;

        let push_succeeded = match self.remote.push_remote(store.all()) {
            Ok(()) => true,
            Err(err) => {
                warn!("event=sync_push module=sync status=degraded error={}", err);
                false
            }
        };

        info!(
            "event=sync_run module=sync status=ok added={} push_ok={}",
            added_count, push_succeeded
        );
        Ok(SyncOutcome {
            added_count,
            push_succeeded,
        })
    }
}
