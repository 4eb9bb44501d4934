//! Core domain logic for QuoteDeck.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod sync;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::quote::{seed_quotes, Quote, QuoteValidationError, ALL_CATEGORIES};
pub use repo::quote_store::{QuoteStore, StoreError};
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateStore, StateStore, QUOTES_KEY, SELECTED_CATEGORY_KEY,
};
pub use service::quote_service::{
    derive_categories, PickError, QuotePicker, RandomSource, ThreadRngSource,
};
pub use service::transfer_service::{
    export_quotes, import_quotes, TransferError, EXPORT_FILE_NAME,
};
pub use sync::engine::{SyncEngine, SyncOutcome};
pub use sync::remote::{
    HttpRemoteSource, NetworkError, RemoteQuoteSource, DEFAULT_ENDPOINT, REMOTE_FETCH_LIMIT,
    SERVER_CATEGORY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
