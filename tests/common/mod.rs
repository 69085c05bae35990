//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sift::{parse_index, Article, ArticleIndex};
use std::fs;
use std::path::PathBuf;

// Re-export canonical test utilities from sift::testing
pub use sift::testing::{make_article, make_article_full, make_index, make_index_from};

// ============================================================================
// FIXTURES
// ============================================================================

/// Path to the committed article fixture, relative to the crate root.
pub const ARTICLES_FIXTURE: &str = "fixtures/articles.json";

/// Load the committed article fixture.
pub fn load_fixture_index() -> ArticleIndex {
    let json = fs::read_to_string(ARTICLES_FIXTURE).expect("Failed to read articles fixture");
    parse_index(&json).expect("Fixture JSON should parse")
}

/// Write `json` to a file in a fresh temp directory.
///
/// Returns the TempDir (to keep it alive) and the file path.
pub fn write_index_file(json: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("index.json");
    fs::write(&path, json).expect("Failed to write index file");
    (dir, path)
}

// ============================================================================
// INDEX BUILDERS
// ============================================================================

/// Build an index whose articles carry the given titles and nothing else.
pub fn index_with_titles(titles: &[&str]) -> ArticleIndex {
    let articles: Vec<Article> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| make_article(title, &format!("/article-{}", i)))
        .collect();
    make_index_from(articles)
}

/// Reverse of `sift::escape_html`, for checks on rendered markup.
/// `&amp;` must be decoded last or escaped entities would decode twice.
pub fn unescape_html(escaped: &str) -> String {
    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
