// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the article index.
//!
//! An index is a flat JSON array of articles produced by the site build and
//! fetched once per page load. Articles are stored alongside a pre-normalized
//! text view so scoring never re-lowercases field content on every keystroke.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ArticleIndex**: `articles.len() = texts.len()`, and `texts[i]` is the
//!   normalized view of `articles[i]`. The only constructor derives both from
//!   the same source, so the pairing cannot drift.
//!
//! - **ScoredResult**: `article_id < index.len()`. Results are produced by
//!   scoring an index and consumed against the same index in the same call
//!   chain; they are never persisted.

use serde::{Deserialize, Serialize};

use crate::utils::normalize;

// =============================================================================
// ARTICLE
// =============================================================================

/// One searchable article record as delivered in the index file.
///
/// Unknown fields in the JSON are ignored; `excerpt` and `tags` default to
/// empty when absent, `channel` to none. Everything except `url` is display
/// text - `url` is the navigation target and is never rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Tags/labels for categorization
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
    /// Channel for display grouping (e.g. "Engineering", "Adventures")
    #[serde(default)]
    pub channel: Option<String>,
}

/// Normalized text view of an [`Article`], computed once at load time.
///
/// Scoring only ever looks at these three strings. Tags are joined with a
/// single space and normalized as one string - a space-free term can only
/// match inside a single tag, so the join is equivalent to checking each tag
/// on its own.
#[derive(Debug, Clone)]
pub struct ArticleText {
    pub title: String,
    pub excerpt: String,
    pub tags: String,
}

impl ArticleText {
    /// Build the normalized view of an article.
    pub fn from_article(article: &Article) -> Self {
        ArticleText {
            title: normalize(&article.title),
            excerpt: normalize(&article.excerpt),
            tags: normalize(&article.tags.join(" ")),
        }
    }
}

// =============================================================================
// INDEX
// =============================================================================

/// The in-memory article index: raw articles plus their normalized views.
///
/// Immutable after construction. Insertion order is preserved because it is
/// the ranking tie-break, but results are never displayed in index order.
#[derive(Debug, Clone, Default)]
pub struct ArticleIndex {
    articles: Vec<Article>,
    texts: Vec<ArticleText>,
}

impl ArticleIndex {
    /// Build an index from parsed articles, deriving the normalized views.
    pub fn from_articles(articles: Vec<Article>) -> Self {
        let texts = articles.iter().map(ArticleText::from_article).collect();
        ArticleIndex { articles, texts }
    }

    /// Number of articles in the index.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// True when the index holds no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// The raw articles, in index order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// The normalized text views, in index order.
    pub fn texts(&self) -> &[ArticleText] {
        &self.texts
    }

    /// Look up an article by position.
    pub fn get(&self, article_id: usize) -> Option<&Article> {
        self.articles.get(article_id)
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// An article reference with its relevance score for one query.
///
/// `article_id` indexes into the [`ArticleIndex`] the result came from.
/// Scores are non-negative integers, additive across terms and fields;
/// a result only exists when the score is positive. Serializes with
/// camelCase keys (`articleId`) for the widget's JS-facing results API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub article_id: usize,
    pub score: u32,
}
