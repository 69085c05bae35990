// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API to verify it never
//! panics, never returns out-of-range article ids, and never violates the
//! ranking invariants. If your search widget crashes on emoji or null
//! bytes, you have a bad day.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::{normalize, search, tokenize, Article, ArticleIndex, MAX_TERM_SCORE};
use std::sync::OnceLock;

fn corpus() -> Vec<Article> {
    let rows: &[(&str, &str, &[&str], &str, Option<&str>)] = &[
        (
            "Understanding Ownership in Rust",
            "Move semantics, borrowing, and lifetimes.",
            &["rust", "ownership"],
            "/ownership",
            Some("Engineering"),
        ),
        (
            "Zero-Copy Parsing Tricks",
            "Parsing network protocols without allocating.",
            &["rust", "parsing"],
            "/zero-copy",
            Some("Engineering"),
        ),
        ("A Weekend in Tōkyō", "Ramen and transit cards.", &["travel"], "/tokyo", None),
        ("Benchmarks & Lies", "<b>Numbers</b> that mislead.", &["benchmarks"], "/lies", None),
        ("Café Reviews: 2024", "Espresso notes from the road.", &[], "/cafes", Some("Notes")),
        ("日本語のタイトル", "Multibyte text end to end.", &["unicode"], "/ja", None),
        ("", "An article with an empty title.", &["edge"], "/empty", None),
        ("aaaaaaaa aaaa aa", "a aa aaa aaaa", &["aa"], "/aaa", None),
    ];

    rows.iter()
        .map(|(title, excerpt, tags, url, channel)| Article {
            title: (*title).to_string(),
            excerpt: (*excerpt).to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            url: (*url).to_string(),
            channel: channel.map(String::from),
        })
        .collect()
}

fuzz_target!(|query: &[u8]| {
    static INDEX: OnceLock<ArticleIndex> = OnceLock::new();
    let index = INDEX.get_or_init(|| ArticleIndex::from_articles(corpus()));

    // Convert to string, handling invalid UTF-8
    let query_str = match std::str::from_utf8(query) {
        Ok(s) => s.to_string(),
        Err(_) => String::from_utf8_lossy(query).into_owned(),
    };

    // Cap query length to avoid timeouts (in chars, not bytes)
    let query_str: String = query_str.chars().take(200).collect();

    // INVARIANT 1: search() never panics.
    let results = search(index, &query_str);

    // INVARIANT 2: Every article id is in range, every score positive.
    for result in &results {
        assert!(
            result.article_id < index.len(),
            "Result article_id {} out of bounds (index len = {})",
            result.article_id,
            index.len()
        );
        assert!(result.score > 0, "Zero-score result for '{}'", query_str);
    }

    // INVARIANT 3: No duplicate article ids.
    let mut seen = std::collections::HashSet::new();
    for result in &results {
        assert!(
            seen.insert(result.article_id),
            "Duplicate article_id {} in results",
            result.article_id
        );
    }

    // INVARIANT 4: Sorted by score descending, index order on ties.
    for i in 1..results.len() {
        let correct_order = results[i - 1].score > results[i].score
            || (results[i - 1].score == results[i].score
                && results[i - 1].article_id < results[i].article_id);
        assert!(
            correct_order,
            "Results not correctly sorted at {}: ({}, {}) before ({}, {})",
            i,
            results[i - 1].article_id,
            results[i - 1].score,
            results[i].article_id,
            results[i].score
        );
    }

    // INVARIANT 5: Scores are bounded by the per-term maximum.
    let normalized = normalize(&query_str);
    let term_count = tokenize(&normalized).len() as u32;
    for result in &results {
        assert!(
            result.score <= term_count * MAX_TERM_SCORE,
            "Score {} exceeds {} terms * max {}",
            result.score,
            term_count,
            MAX_TERM_SCORE
        );
    }

    // INVARIANT 6: Queries with no usable terms return nothing.
    if term_count == 0 {
        assert!(
            results.is_empty(),
            "Termless query '{}' returned {} results",
            query_str,
            results.len()
        );
    }

    // INVARIANT 7: Searches are deterministic.
    let rerun = search(index, &query_str);
    assert_eq!(results, rerun, "Same query returned different results");
});
