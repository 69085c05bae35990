//! Query execution: normalize, tokenize, score, rank.
//!
//! This is the synchronous core of the widget. It has no opinion about
//! debouncing, result limits, or placeholders - that policy lives in
//! [`crate::query`]. Given an index and a raw query string it returns every
//! matching article, ranked.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - Results are sorted by score descending; equal scores order by ascending
//!   `article_id`, so the same index and query always produce the same list.
//! - Zero-score articles never appear in the output.
//! - The result list is NOT truncated here. Callers that show a dropdown cap
//!   it themselves ([`crate::query::QueryConfig::max_results`]).

use crate::scoring::score_article;
use crate::types::{ArticleIndex, ScoredResult};
use crate::utils::{normalize, tokenize};

/// Run a raw query against the index.
///
/// The query is normalized the same way the index text was, then split into
/// terms of two or more characters. A query with no usable terms (empty,
/// whitespace, or single-character words only) matches nothing.
pub fn search(index: &ArticleIndex, query: &str) -> Vec<ScoredResult> {
    let normalized = normalize(query);
    let terms = tokenize(&normalized);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredResult> = index
        .texts()
        .iter()
        .enumerate()
        .filter_map(|(article_id, text)| {
            let score = score_article(text, &terms);
            (score > 0).then_some(ScoredResult { article_id, score })
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.article_id.cmp(&b.article_id))
    });

    results
}
