//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Article, ArticleIndex};

/// Create a minimal article: title and url only.
///
/// This is the canonical implementation used across all tests.
pub fn make_article(title: &str, url: &str) -> Article {
    Article {
        title: title.to_string(),
        excerpt: String::new(),
        tags: vec![],
        url: url.to_string(),
        channel: None,
    }
}

/// Create an article with every field specified.
pub fn make_article_full(
    title: &str,
    excerpt: &str,
    tags: &[&str],
    url: &str,
    channel: Option<&str>,
) -> Article {
    Article {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        url: url.to_string(),
        channel: channel.map(String::from),
    }
}

/// Build an index from explicit articles.
pub fn make_index_from(articles: Vec<Article>) -> ArticleIndex {
    ArticleIndex::from_articles(articles)
}

/// The canonical three-article test index: two rust articles, one go.
pub fn make_index() -> ArticleIndex {
    make_index_from(vec![
        make_article_full(
            "Rust Basics",
            "Learn the borrow checker without tears.",
            &["rust", "beginners"],
            "/rust-basics",
            Some("Tutorials"),
        ),
        make_article_full(
            "Go Routines",
            "Concurrency patterns in Go.",
            &["go", "concurrency"],
            "/go-routines",
            None,
        ),
        make_article_full(
            "Async Rust Deep Dive",
            "Futures, executors, and the rust async runtime.",
            &["rust", "async"],
            "/async-rust",
            Some("Deep Dives"),
        ),
    ])
}

/// The canonical index as its on-disk JSON payload.
pub fn make_index_json() -> String {
    serde_json::to_string(make_index().articles()).unwrap()
}
