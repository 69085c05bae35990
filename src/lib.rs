//! In-browser article search for static sites.
//!
//! sift ships a prebuilt JSON article index to the browser and answers
//! queries entirely client-side: no search server, no network round trip per
//! keystroke. The same crate compiles to WASM for the browser widget and to
//! a native binary for querying and inspecting index files from the
//! terminal.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  store.rs  │────▶│  search.rs  │────▶│  query.rs   │
//! │ (index load│     │ (normalize, │     │ (gate, cap, │
//! │  lifecycle)│     │ score, rank)│     │ placeholder)│
//! └────────────┘     └─────────────┘     └─────────────┘
//!        │                  │                   │
//!        ▼                  ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     render.rs                       │
//! │     (escape_html, RenderEntry, dropdown markup)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The `wasm` module (feature `wasm`) wires this pipeline into DOM events
//! with a debounced controller; the `sift` binary wires it to a terminal.
//!
//! # Usage
//!
//! ```ignore
//! use sift::{evaluate, parse_index, IndexStore, QueryConfig, SearchOutcome};
//!
//! let store = IndexStore::ready(parse_index(&json)?);
//! match evaluate(&store, "rust", &QueryConfig::default()) {
//!     SearchOutcome::Results(results) => { /* show the dropdown */ }
//!     SearchOutcome::Placeholder(kind) => { /* show kind.title() */ }
//!     SearchOutcome::Hidden => { /* close the dropdown */ }
//! }
//! ```

// Module declarations
mod query;
mod render;
mod scoring;
mod search;
mod store;
mod types;
mod utils;

pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use query::{evaluate, PlaceholderKind, QueryConfig, SearchOutcome};
pub use render::{escape_html, render_entries, RenderEntry, EXCERPT_MAX_CHARS, PLACEHOLDER_HREF};
pub use scoring::{
    score_article, term_score, EXCERPT_WEIGHT, MAX_TERM_SCORE, TAG_WEIGHT, TITLE_WEIGHT,
    TITLE_WORD_BONUS,
};
pub use search::search;
pub use store::{load_index_file, parse_index, IndexError, IndexState, IndexStore};
pub use types::{Article, ArticleIndex, ArticleText, ScoredResult};
pub use utils::{contains_whole_word, normalize, tokenize};
