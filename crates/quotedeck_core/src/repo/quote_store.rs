//! Authoritative quote list with a persisted mirror.
//!
//! # Responsibility
//! - Own the in-memory quote list and keep it mirrored to the state port.
//! - Enforce duplicate suppression on every batch append path.
//!
//! # Invariants
//! - Every mutating operation rewrites the full persisted list.
//! - `merge` never appends an identity-duplicate, including duplicates
//!   within the candidate batch itself.
//! - The persisted category filter defaults to `"all"`.

use crate::model::quote::{seed_quotes, Quote, QuoteValidationError, ALL_CATEGORIES};
use crate::repo::state_repo::{
    RepoError, RepoResult, StateStore, QUOTES_KEY, SELECTED_CATEGORY_KEY,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for quote store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Manual add input failed validation; the list is unchanged.
    Validation(QuoteValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<QuoteValidationError> for StoreError {
    fn from(value: QuoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// In-memory quote list backed by a key-value state port.
#[derive(Debug)]
pub struct QuoteStore<S: StateStore> {
    port: S,
    quotes: Vec<Quote>,
}

impl<S: StateStore> QuoteStore<S> {
    /// Loads the store from persisted state.
    ///
    /// When no `quotes` value exists yet, the built-in seed list is adopted
    /// and persisted immediately, matching first-launch behavior.
    ///
    /// # Errors
    /// - `RepoError::InvalidData` when the persisted value is not a JSON
    ///   array of quote objects.
    pub fn load(port: S) -> RepoResult<Self> {
        let store = match port.load(QUOTES_KEY)? {
            Some(raw) => {
                let quotes: Vec<Quote> = serde_json::from_str(&raw).map_err(|err| {
                    RepoError::InvalidData(format!("quote list is not valid JSON: {err}"))
                })?;
                Self { port, quotes }
            }
            None => {
                let mut store = Self {
                    port,
                    quotes: seed_quotes(),
                };
                store.persist()?;
                store
            }
        };

        info!(
            "event=store_load module=repo status=ok count={}",
            store.quotes.len()
        );
        Ok(store)
    }

    /// Returns the current list in insertion order.
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    /// Appends one manually entered quote after trimming validation.
    ///
    /// The add path does not suppress duplicates; only batch paths do.
    ///
    /// # Errors
    /// - `StoreError::Validation` when either field is blank after trimming;
    ///   the list and persisted state are untouched.
    pub fn add(&mut self, text: &str, category: &str) -> Result<&Quote, StoreError> {
        let quote = Quote::from_input(text, category)?;
        self.quotes.push(quote);
        self.persist()?;

        info!(
            "event=quote_add module=repo status=ok count={}",
            self.quotes.len()
        );
        Ok(self.quotes.last().expect("just pushed"))
    }

    /// Appends every complete, non-duplicate candidate and persists once.
    ///
    /// The duplicate check runs against the live list as candidates are
    /// accepted, so a batch cannot introduce duplicates against itself.
    /// Incomplete candidates are skipped silently. Returns the number of
    /// quotes appended.
    pub fn merge(&mut self, candidates: Vec<Quote>) -> RepoResult<usize> {
        let mut appended = 0;
        for candidate in candidates {
            if !candidate.is_complete() {
                continue;
            }
            if self.quotes.iter().any(|q| q.same_identity(&candidate)) {
                continue;
            }
            self.quotes.push(candidate);
            appended += 1;
        }

        if appended > 0 {
            self.persist()?;
        }

        info!(
            "event=quote_merge module=repo status=ok appended={} count={}",
            appended,
            self.quotes.len()
        );
        Ok(appended)
    }

    /// Reads the persisted category filter, defaulting to `"all"`.
    pub fn selected_category(&self) -> RepoResult<String> {
        Ok(self
            .port
            .load(SELECTED_CATEGORY_KEY)?
            .unwrap_or_else(|| ALL_CATEGORIES.to_string()))
    }

    /// Persists the category filter choice.
    pub fn set_selected_category(&mut self, category: &str) -> RepoResult<()> {
        self.port.save(SELECTED_CATEGORY_KEY, category)
    }

    fn persist(&mut self) -> RepoResult<()> {
        let raw = serde_json::to_string(&self.quotes)
            .map_err(|err| RepoError::InvalidData(format!("quote list serialization: {err}")))?;
        self.port.save(QUOTES_KEY, &raw)
    }
}
