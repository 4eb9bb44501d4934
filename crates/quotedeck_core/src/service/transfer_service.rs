//! JSON export and import of the quote list.
//!
//! # Responsibility
//! - Serialize the full list to a pretty-printed JSON array payload.
//! - Merge an external JSON payload into the store.
//!
//! # Invariants
//! - Export of an empty list is refused, never an empty-array file.
//! - A payload whose top level is not an array aborts with no partial
//!   effect.
//! - Malformed entries are skipped silently, not reported individually.

use crate::model::quote::Quote;
use crate::repo::quote_store::QuoteStore;
use crate::repo::state_repo::{RepoError, StateStore};
use log::info;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default file name suggested for exported payloads.
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Error for export/import operations.
#[derive(Debug)]
pub enum TransferError {
    /// Export refused because the list is empty.
    Empty,
    /// Payload is unparsable or its top level is not an array.
    Format(String),
    /// Persistence-layer failure while appending survivors.
    Store(RepoError),
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no quotes to export"),
            Self::Format(message) => write!(f, "invalid quote payload: {message}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TransferError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

/// Serializes the full list as a pretty-printed JSON array (2-space indent).
///
/// # Errors
/// - `TransferError::Empty` when the list has no quotes; nothing is written
///   in that case.
pub fn export_quotes(quotes: &[Quote]) -> Result<String, TransferError> {
    if quotes.is_empty() {
        return Err(TransferError::Empty);
    }

    let payload = serde_json::to_string_pretty(quotes)
        .map_err(|err| TransferError::Format(err.to_string()))?;

    info!(
        "event=quote_export module=service status=ok count={}",
        quotes.len()
    );
    Ok(payload)
}

/// Parses `payload` and merges its well-formed entries into `store`.
///
/// Entries missing a field, with a non-string field, or with an empty field
/// are skipped. Survivors flow through [`QuoteStore::merge`], which drops
/// identity-duplicates against the live list and within the batch, then
/// persists once. Returns the number of quotes appended.
///
/// # Errors
/// - `TransferError::Format` when the payload does not parse or its top
///   level is not an array; the store is untouched.
pub fn import_quotes<S: StateStore>(
    payload: &str,
    store: &mut QuoteStore<S>,
) -> Result<usize, TransferError> {
    let parsed: Value = serde_json::from_str(payload)
        .map_err(|err| TransferError::Format(err.to_string()))?;

    let entries = match parsed {
        Value::Array(entries) => entries,
        other => {
            return Err(TransferError::Format(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )));
        }
    };

    let candidates: Vec<Quote> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    let appended = store.merge(candidates)?;
    info!(
        "event=quote_import module=service status=ok appended={}",
        appended
    );
    Ok(appended)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
