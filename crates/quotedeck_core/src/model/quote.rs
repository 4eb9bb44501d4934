//! Quote domain model.
//!
//! # Responsibility
//! - Define the canonical quote record shared by store, transfer and sync.
//! - Provide input validation for the manual add path.
//! - Provide the built-in seed list used when no persisted state exists.
//!
//! # Invariants
//! - Two quotes are the same iff `text` and `category` are both exactly
//!   equal. No normalization, no synthetic identifier.
//! - `category` is case-preserved end to end.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Synthetic category value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Validation error for manually entered quote fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteValidationError {
    /// Text is empty after trimming.
    EmptyText,
    /// Category is empty after trimming.
    EmptyCategory,
}

impl Display for QuoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "quote text must not be empty"),
            Self::EmptyCategory => write!(f, "quote category must not be empty"),
        }
    }
}

impl Error for QuoteValidationError {}

/// Canonical quote record.
///
/// Identity is structural: the pair `(text, category)` is the whole identity.
/// Whitespace and case variants are distinct quotes on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote body, non-empty for any quote produced by core operations.
    pub text: String,
    /// User-chosen category label, case-preserved.
    pub category: String,
}

impl Quote {
    /// Creates a quote from already-validated fields.
    ///
    /// Import and sync paths use this after their own completeness checks.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Creates a quote from raw user input, trimming both fields.
    ///
    /// # Errors
    /// - `EmptyText` when `text` is blank after trimming.
    /// - `EmptyCategory` when `category` is blank after trimming.
    pub fn from_input(text: &str, category: &str) -> Result<Self, QuoteValidationError> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() {
            return Err(QuoteValidationError::EmptyText);
        }
        if category.is_empty() {
            return Err(QuoteValidationError::EmptyCategory);
        }
        Ok(Self::new(text, category))
    }

    /// Returns whether both fields are non-empty as-is (no trimming).
    ///
    /// Batch paths (import, sync merge) skip incomplete records silently
    /// instead of failing the batch.
    pub fn is_complete(&self) -> bool {
        !self.text.is_empty() && !self.category.is_empty()
    }

    /// Returns whether `other` is an identity-duplicate of this quote.
    pub fn same_identity(&self, other: &Quote) -> bool {
        self.text == other.text && self.category == other.category
    }
}

/// Returns the built-in seed list persisted on first launch.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only way to do great work is to love what you do.",
            "motivation",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "life",
        ),
        Quote::new(
            "Innovation distinguishes between a leader and a follower.",
            "innovation",
        ),
        Quote::new(
            "Your time is limited, don't waste it living someone else's life.",
            "life",
        ),
    ]
}
