// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query controller policy.
//!
//! [`crate::search`] answers "what matches?"; this module answers "what
//! should the dropdown do?". It owns the minimum-length gate, the result
//! cap, and the placeholder catalog, and folds the index lifecycle
//! ([`crate::store::IndexState`]) into a single [`SearchOutcome`] the
//! presenter can render without any further decisions.
//!
//! Debounce timing is part of the same policy surface
//! ([`QueryConfig::debounce_ms`]) but the actual timer lives with the DOM
//! bindings in `wasm`; there is nothing asynchronous here.

use crate::search::search;
use crate::store::{IndexState, IndexStore};
use crate::types::ScoredResult;

// =============================================================================
// CONFIG
// =============================================================================

/// Tunable controller policy. The defaults are the widget's shipped behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Queries shorter than this (in characters, after trimming) hide the
    /// dropdown instead of searching.
    pub min_query_len: usize,
    /// Maximum number of results shown in the dropdown.
    pub max_results: usize,
    /// Keystroke debounce window in milliseconds.
    pub debounce_ms: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            min_query_len: 2,
            max_results: 8,
            debounce_ms: 300,
        }
    }
}

// =============================================================================
// OUTCOMES
// =============================================================================

/// A non-result state the dropdown renders as a single inert row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// The index fetch has not resolved yet.
    Loading,
    /// The index fetch failed; searching will not work on this page view.
    Unavailable,
    /// The index is ready but nothing scored above zero.
    NoMatches,
}

impl PlaceholderKind {
    /// Headline shown in place of an article title.
    pub fn title(self) -> &'static str {
        match self {
            PlaceholderKind::Loading => "Search index loading...",
            PlaceholderKind::Unavailable => "Search unavailable",
            PlaceholderKind::NoMatches => "No results found",
        }
    }

    /// Body text shown in place of an article excerpt.
    pub fn excerpt(self) -> &'static str {
        match self {
            PlaceholderKind::Loading => "Please wait a moment and try again.",
            PlaceholderKind::Unavailable => {
                "The search index could not be loaded. Reload the page to retry."
            }
            PlaceholderKind::NoMatches => "Try different keywords or browse our categories.",
        }
    }
}

/// What the dropdown should do after a query evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Close the dropdown and clear its contents.
    Hidden,
    /// Show a single placeholder row.
    Placeholder(PlaceholderKind),
    /// Show these results, already capped to [`QueryConfig::max_results`].
    Results(Vec<ScoredResult>),
}

/// Evaluate a raw input value against the store.
///
/// The length gate counts characters of the trimmed query, so `" a "` is one
/// character and hides the dropdown. A query that passes the gate but
/// tokenizes to nothing (for example `"a b"`) reaches the index and comes
/// back as [`PlaceholderKind::NoMatches`] - the user asked a question and
/// deserves an answer row, not a silent close.
pub fn evaluate(store: &IndexStore, query: &str, config: &QueryConfig) -> SearchOutcome {
    if query.trim().chars().count() < config.min_query_len {
        return SearchOutcome::Hidden;
    }

    match store.state() {
        IndexState::Loading => SearchOutcome::Placeholder(PlaceholderKind::Loading),
        IndexState::Unavailable => SearchOutcome::Placeholder(PlaceholderKind::Unavailable),
        IndexState::Ready(index) => {
            let mut results = search(index, query);
            if results.is_empty() {
                return SearchOutcome::Placeholder(PlaceholderKind::NoMatches);
            }
            results.truncate(config.max_results);
            SearchOutcome::Results(results)
        }
    }
}
