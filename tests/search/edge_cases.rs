//! Edge cases around tokenization, normalization, and empty inputs.

use super::common::{index_with_titles, load_fixture_index, make_index_from};
use sift::{search, ArticleIndex};

// ============================================================================
// EMPTY INPUTS
// ============================================================================

#[test]
fn test_empty_index_returns_nothing() {
    let index = ArticleIndex::default();
    assert!(search(&index, "rust").is_empty());
}

#[test]
fn test_empty_and_whitespace_queries_return_nothing() {
    let index = load_fixture_index();
    assert!(search(&index, "").is_empty());
    assert!(search(&index, "   ").is_empty());
    assert!(search(&index, "\t\n").is_empty());
}

#[test]
fn test_zero_article_index_parses_and_searches() {
    let index = make_index_from(vec![]);
    assert!(index.is_empty());
    assert!(search(&index, "anything").is_empty());
}

// ============================================================================
// TERM FILTERING
// ============================================================================

#[test]
fn test_single_char_terms_are_dropped() {
    let index = load_fixture_index();
    // "a" appears in several titles but is too short to be a term.
    assert!(search(&index, "a").is_empty());
    assert!(search(&index, "a b c").is_empty());
}

#[test]
fn test_single_char_terms_do_not_dilute_real_terms() {
    let index = load_fixture_index();
    let alone = search(&index, "rust");
    let padded = search(&index, "a rust b");
    assert_eq!(alone, padded);
}

#[test]
fn test_multibyte_chars_count_as_one() {
    let index = index_with_titles(&["Čaj time"]);
    // "č" is a single char (two bytes): still too short to be a term.
    assert!(search(&index, "č").is_empty());
    // Two chars pass the term filter.
    assert_eq!(search(&index, "ča").len(), 1);
}

// ============================================================================
// NORMALIZATION
// ============================================================================

#[test]
fn test_matching_is_case_insensitive() {
    let index = load_fixture_index();
    assert_eq!(search(&index, "RUST"), search(&index, "rust"));
    assert_eq!(search(&index, "RuSt"), search(&index, "rust"));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_ascii_query_matches_accented_title() {
    let index = load_fixture_index();
    let results = search(&index, "tokyo");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].article_id, 2, "Should match 'A Weekend in Tōkyō'");
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_accented_query_matches_accented_title() {
    let index = load_fixture_index();
    assert_eq!(search(&index, "tōkyō"), search(&index, "tokyo"));
}

#[test]
fn test_substring_matches_across_punctuation() {
    let index = load_fixture_index();
    // "rust-flavored" in an excerpt still contains the substring "rust".
    let ids: Vec<usize> = search(&index, "rust").iter().map(|r| r.article_id).collect();
    assert!(ids.contains(&7));
}

// ============================================================================
// MISSES
// ============================================================================

#[test]
fn test_unmatched_query_returns_nothing() {
    let index = load_fixture_index();
    assert!(search(&index, "quaternion").is_empty());
}

#[test]
fn test_zero_scores_never_surface() {
    let index = load_fixture_index();
    for result in search(&index, "rust") {
        assert!(result.score > 0);
    }
}
