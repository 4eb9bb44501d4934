//! Key-value state port and SQLite implementation.
//!
//! # Responsibility
//! - Provide a minimal string-keyed, string-valued persistence contract.
//! - Implement that contract over the `app_state` table.
//!
//! # Invariants
//! - `save` replaces the whole value for a key; there is no delta write.
//! - Keys used by core are the constants exported from this module.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// State key holding the serialized quote list.
pub const QUOTES_KEY: &str = "quotes";
/// State key holding the persisted category filter.
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic persistence error for state read/write operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted state: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage port for string-keyed application state.
///
/// The quote store talks only to this trait, so tests can swap in any
/// backend without touching business logic.
pub trait StateStore {
    fn load(&self, key: &str) -> RepoResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed state store over the `app_state` table.
#[derive(Debug)]
pub struct SqliteStateStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateStore for SqliteStateStore<'_> {
    fn load(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2);",
            params![key, value],
        )?;
        Ok(())
    }
}
