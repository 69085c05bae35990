// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading and lifecycle.
//!
//! The index is fetched exactly once at startup and the store remembers how
//! that turned out. Until the fetch resolves the store is `Loading`; after it
//! resolves it is either `Ready` with the parsed index or `Unavailable`.
//! There is no retry - a failed load stays failed until the page reloads.
//!
//! Load failures are reported to the console as a warning and otherwise
//! degrade to placeholder behavior in the query layer. They are never
//! surfaced to the user as an error.
//!
//! # Invariants
//!
//! - The store resolves at most once: the first call to [`IndexStore::resolve`]
//!   wins and later calls are ignored.
//! - `Ready` always holds an index that passed [`parse_index`]; there is no
//!   way to observe a half-parsed index.

use std::fmt;
use std::path::Path;

use crate::types::{Article, ArticleIndex};

// =============================================================================
// ERRORS
// =============================================================================

/// Why an index failed to load.
#[derive(Debug)]
pub enum IndexError {
    /// The index file could not be read from disk.
    Io(std::io::Error),
    /// The index could not be fetched over HTTP.
    Fetch(String),
    /// The payload was not a JSON array of articles.
    Parse(serde_json::Error),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Io(err) => write!(f, "failed to read index file: {}", err),
            IndexError::Fetch(msg) => write!(f, "failed to fetch index: {}", msg),
            IndexError::Parse(err) => write!(f, "invalid index JSON: {}", err),
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::Io(err) => Some(err),
            IndexError::Fetch(_) => None,
            IndexError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for IndexError {
    fn from(err: std::io::Error) -> Self {
        IndexError::Io(err)
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        IndexError::Parse(err)
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Parse the index payload: a JSON array of article objects.
///
/// Missing optional fields default per [`Article`]; unknown fields are
/// ignored. An empty array is a valid (empty) index, distinct from a parse
/// failure.
pub fn parse_index(json: &str) -> Result<ArticleIndex, IndexError> {
    let articles: Vec<Article> = serde_json::from_str(json)?;
    Ok(ArticleIndex::from_articles(articles))
}

/// Read and parse an index file from disk (CLI path).
pub fn load_index_file<P: AsRef<Path>>(path: P) -> Result<ArticleIndex, IndexError> {
    let raw = std::fs::read_to_string(path)?;
    parse_index(&raw)
}

// =============================================================================
// STORE
// =============================================================================

/// Lifecycle state of the one-shot index load.
#[derive(Debug, Clone, Default)]
pub enum IndexState {
    /// The fetch has not resolved yet.
    #[default]
    Loading,
    /// The fetch resolved and the payload parsed.
    Ready(ArticleIndex),
    /// The fetch or parse failed; there will be no retry.
    Unavailable,
}

/// Holds the index through its load lifecycle.
///
/// Created in `Loading`, resolved exactly once, read-only afterwards.
#[derive(Debug, Default)]
pub struct IndexStore {
    state: IndexState,
}

impl IndexStore {
    /// Create a store in the `Loading` state.
    pub fn new() -> Self {
        IndexStore::default()
    }

    /// Create a store that is already `Ready` (CLI and tests, where the
    /// index is loaded synchronously before any query runs).
    pub fn ready(index: ArticleIndex) -> Self {
        IndexStore {
            state: IndexState::Ready(index),
        }
    }

    /// Record the outcome of the load. The first resolution wins; a second
    /// call is ignored.
    pub fn resolve(&mut self, result: Result<ArticleIndex, IndexError>) {
        if !matches!(self.state, IndexState::Loading) {
            return;
        }
        self.state = match result {
            Ok(index) => IndexState::Ready(index),
            Err(_) => IndexState::Unavailable,
        };
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &IndexState {
        &self.state
    }

    /// The loaded index, if the load has succeeded.
    pub fn index(&self) -> Option<&ArticleIndex> {
        match &self.state {
            IndexState::Ready(index) => Some(index),
            _ => None,
        }
    }

    /// True while the load has not resolved.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, IndexState::Loading)
    }

    /// True once the load has failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.state, IndexState::Unavailable)
    }
}
