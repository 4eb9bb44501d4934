//! Category derivation and random quote selection.
//!
//! # Responsibility
//! - Derive the category index from the current quote list.
//! - Pick a uniformly random quote from a category-filtered view.
//! - Keep the most recently shown quote in a session-scoped slot.
//!
//! # Invariants
//! - Category order is first-occurrence order, never sorted, with a
//!   synthetic `"all"` entry prepended.
//! - Filtering uses exact category equality; `"all"` disables filtering.
//! - The last-shown slot is in-memory only and dies with the picker.

use crate::model::quote::{Quote, ALL_CATEGORIES};
use log::info;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Derives the distinct category list in first-occurrence order.
///
/// Always prepends `"all"` as the no-filter entry. Pure; recomputed after
/// every list mutation rather than maintained incrementally.
pub fn derive_categories(quotes: &[Quote]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for quote in quotes {
        if !categories[1..].iter().any(|c| c == &quote.category) {
            categories.push(quote.category.clone());
        }
    }
    categories
}

/// Error for random selection over an empty filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    /// No quote matches the requested filter.
    NoQuotes { filter: String },
}

impl Display for PickError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoQuotes { filter } => {
                write!(f, "no quotes available for category `{filter}`")
            }
        }
    }
}

impl Error for PickError {}

/// Source of uniform random indices.
///
/// Injected so the uniform-draw property is testable deterministically;
/// production uses [`ThreadRngSource`] and makes no reproducibility promise.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG backed random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Random quote selector with a session-scoped last-shown slot.
pub struct QuotePicker<R: RandomSource> {
    rng: R,
    last_shown: Option<Quote>,
}

impl Default for QuotePicker<ThreadRngSource> {
    fn default() -> Self {
        Self::new(ThreadRngSource)
    }
}

impl<R: RandomSource> QuotePicker<R> {
    /// Creates a picker using the provided random source.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            last_shown: None,
        }
    }

    /// Picks one quote uniformly from the filtered view of `quotes`.
    ///
    /// `filter == "all"` selects over the entire list; any other value
    /// selects over quotes whose category matches exactly.
    ///
    /// # Side effects
    /// - The chosen quote is cached as last shown for this session.
    ///
    /// # Errors
    /// - `PickError::NoQuotes` when the filtered view is empty.
    pub fn pick(&mut self, quotes: &[Quote], filter: &str) -> Result<Quote, PickError> {
        let filtered: Vec<&Quote> = if filter == ALL_CATEGORIES {
            quotes.iter().collect()
        } else {
            quotes.iter().filter(|q| q.category == filter).collect()
        };

        if filtered.is_empty() {
            return Err(PickError::NoQuotes {
                filter: filter.to_string(),
            });
        }

        let index = self.rng.pick_index(filtered.len());
        let chosen = filtered[index].clone();
        self.last_shown = Some(chosen.clone());

        info!(
            "event=quote_pick module=service status=ok filter={} pool={}",
            filter,
            filtered.len()
        );
        Ok(chosen)
    }

    /// Returns the most recently shown quote for this session, if any.
    pub fn last_shown(&self) -> Option<&Quote> {
        self.last_shown.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_categories, PickError, QuotePicker, RandomSource};
    use crate::model::quote::{seed_quotes, Quote};

    struct FixedSource(usize);

    impl RandomSource for FixedSource {
        fn pick_index(&mut self, len: usize) -> usize {
            self.0 % len
        }
    }

    #[test]
    fn derive_categories_preserves_first_occurrence_order() {
        let categories = derive_categories(&seed_quotes());
        assert_eq!(categories, vec!["all", "motivation", "life", "innovation"]);
    }

    #[test]
    fn derive_categories_on_empty_list_is_just_all() {
        assert_eq!(derive_categories(&[]), vec!["all"]);
    }

    #[test]
    fn pick_all_draws_from_whole_list() {
        let quotes = seed_quotes();
        let mut picker = QuotePicker::new(FixedSource(2));

        let chosen = picker.pick(&quotes, "all").unwrap();
        assert_eq!(chosen, quotes[2]);
        assert_eq!(picker.last_shown(), Some(&quotes[2]));
    }

    #[test]
    fn pick_filter_only_returns_matching_category() {
        let quotes = seed_quotes();
        let mut picker = QuotePicker::new(FixedSource(1));

        let chosen = picker.pick(&quotes, "life").unwrap();
        assert_eq!(chosen.category, "life");
    }

    #[test]
    fn pick_empty_filter_fails_without_touching_last_shown() {
        let quotes = vec![Quote::new("A", "x")];
        let mut picker = QuotePicker::new(FixedSource(0));

        let err = picker.pick(&quotes, "missing").unwrap_err();
        assert_eq!(
            err,
            PickError::NoQuotes {
                filter: "missing".to_string()
            }
        );
        assert!(picker.last_shown().is_none());
    }

    #[test]
    fn filter_matching_is_case_sensitive() {
        let quotes = vec![Quote::new("A", "Life")];
        let mut picker = QuotePicker::new(FixedSource(0));

        assert!(picker.pick(&quotes, "life").is_err());
        assert!(picker.pick(&quotes, "Life").is_ok());
    }
}
