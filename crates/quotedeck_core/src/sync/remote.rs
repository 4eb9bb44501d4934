//! Remote quote source contract and blocking HTTP adapter.
//!
//! # Responsibility
//! - Express fetch/push as an explicit capability interface.
//! - Map remote records onto the local quote shape.
//!
//! # Invariants
//! - Fetched quotes always carry the fixed `"server"` category.
//! - At most [`REMOTE_FETCH_LIMIT`] records are taken per fetch.
//! - Push sends the full list as `{"quotes": [...]}` with a JSON
//!   content type; only the response status decides success.

use crate::model::quote::Quote;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Fixed synthetic category applied to every fetched remote record.
pub const SERVER_CATEGORY: &str = "server";
/// Maximum number of remote records adopted per fetch.
pub const REMOTE_FETCH_LIMIT: usize = 5;
/// Default remote endpoint (mock quote API).
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Network/transport error for remote calls.
#[derive(Debug)]
pub enum NetworkError {
    /// Request could not be sent or the connection failed.
    Transport(reqwest::Error),
    /// Remote answered with a non-success status.
    Status(u16),
    /// Response body did not match the expected shape.
    Payload(String),
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Status(code) => write!(f, "remote answered with status {code}"),
            Self::Payload(message) => write!(f, "unexpected remote payload: {message}"),
        }
    }
}

impl Error for NetworkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Capability interface for the remote quote endpoint.
///
/// The engine depends only on this trait, so tests drive sync with scripted
/// sources instead of a live server.
pub trait RemoteQuoteSource {
    /// Fetches up to [`REMOTE_FETCH_LIMIT`] quotes with the `"server"`
    /// category.
    fn fetch_remote(&self) -> Result<Vec<Quote>, NetworkError>;

    /// Uploads the entire local list, best effort, one way.
    fn push_remote(&self, quotes: &[Quote]) -> Result<(), NetworkError>;
}

/// Record shape exposed by the remote endpoint; only `title` is used.
#[derive(Debug, Deserialize)]
struct RemoteRecord {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Serialize)]
struct PushBody<'a> {
    quotes: &'a [Quote],
}

/// Blocking HTTP implementation of [`RemoteQuoteSource`].
pub struct HttpRemoteSource {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpRemoteSource {
    /// Creates a source against the given endpoint URL.
    ///
    /// # Errors
    /// - `NetworkError::Transport` when the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, NetworkError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Creates a source against [`DEFAULT_ENDPOINT`].
    pub fn with_default_endpoint() -> Result<Self, NetworkError> {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl RemoteQuoteSource for HttpRemoteSource {
    fn fetch_remote(&self) -> Result<Vec<Quote>, NetworkError> {
        let response = self.client.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let records: Vec<RemoteRecord> = response
            .json()
            .map_err(|err| NetworkError::Payload(err.to_string()))?;

        Ok(records
            .into_iter()
            .take(REMOTE_FETCH_LIMIT)
            .map(|record| Quote::new(record.title, SERVER_CATEGORY))
            .collect())
    }

    fn push_remote(&self, quotes: &[Quote]) -> Result<(), NetworkError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PushBody { quotes })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }
        Ok(())
    }
}
