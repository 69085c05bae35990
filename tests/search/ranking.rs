//! Ranking tests for the weighted field scorer.
//!
//! Tests that:
//! - Title matches outrank excerpt and tag matches
//! - The whole-word bonus orders exact titles above partial ones
//! - Multi-term queries accumulate per-term scores

use super::common::{load_fixture_index, make_article_full, make_index_from};
use sift::{search, EXCERPT_WEIGHT, TAG_WEIGHT, TITLE_WEIGHT, TITLE_WORD_BONUS};

// ============================================================================
// FIELD WEIGHT ORDERING
// ============================================================================

#[test]
fn test_title_match_outranks_excerpt_match() {
    let index = make_index_from(vec![
        make_article_full("Daily Notes", "all about gardening", &[], "/notes", None),
        make_article_full("Gardening 101", "daily notes", &[], "/gardening", None),
    ]);

    let results = search(&index, "gardening");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].article_id, 1, "Title match should rank first");
    assert_eq!(results[0].score, TITLE_WEIGHT + TITLE_WORD_BONUS);
    assert_eq!(results[1].score, EXCERPT_WEIGHT);
}

#[test]
fn test_tag_match_outranks_excerpt_match() {
    let index = make_index_from(vec![
        make_article_full("First", "about compilers", &[], "/first", None),
        make_article_full("Second", "", &["compilers"], "/second", None),
    ]);

    let results = search(&index, "compilers");
    assert_eq!(results[0].article_id, 1);
    assert_eq!(results[0].score, TAG_WEIGHT);
    assert_eq!(results[1].score, EXCERPT_WEIGHT);
}

#[test]
fn test_title_outranks_excerpt_and_tags_combined() {
    let index = make_index_from(vec![
        make_article_full("Unrelated", "pure espresso talk", &["espresso"], "/combined", None),
        make_article_full("Espressonomics", "", &[], "/title-only", None),
    ]);

    let results = search(&index, "espresso");
    // Title substring alone (no whole-word bonus for "Espressonomics")
    // still beats excerpt plus tag together.
    assert_eq!(results[0].article_id, 1);
    assert_eq!(results[0].score, TITLE_WEIGHT);
    assert_eq!(results[1].score, EXCERPT_WEIGHT + TAG_WEIGHT);
}

#[test]
fn test_whole_word_bonus_orders_exact_titles_first() {
    let index = make_index_from(vec![
        make_article_full("Golang Tips", "", &[], "/golang", None),
        make_article_full("Go Tips", "", &[], "/go", None),
    ]);

    let results = search(&index, "go");
    assert_eq!(results[0].article_id, 1, "Exact word should beat partial word");
    assert_eq!(results[0].score, TITLE_WEIGHT + TITLE_WORD_BONUS);
    assert_eq!(results[1].score, TITLE_WEIGHT);
}

// ============================================================================
// MULTI-TERM ACCUMULATION
// ============================================================================

#[test]
fn test_multi_term_scores_accumulate_per_article() {
    let index = load_fixture_index();

    // "Zero-Copy Parsing Tricks" matches "rust" (excerpt + tag) and
    // "parsing" (title + word + tag); "Understanding Ownership in Rust"
    // only matches "rust". The combined query must flip their order.
    let rust_only = search(&index, "rust");
    assert_eq!(rust_only[0].article_id, 0);

    let combined = search(&index, "rust parsing");
    assert_eq!(combined[0].article_id, 1);
    assert_eq!(combined[1].article_id, 0);
    assert!(combined[0].score > rust_only[0].score);
}

#[test]
fn test_every_term_scores_independently() {
    let index = load_fixture_index();

    // No article matches both terms, so the combined result set is the
    // union of the single-term result sets with unchanged scores.
    let baking = search(&index, "sourdough");
    let travel = search(&index, "ramen");
    let combined = search(&index, "sourdough ramen");

    assert_eq!(combined.len(), baking.len() + travel.len());
    for result in baking.iter().chain(travel.iter()) {
        assert!(combined
            .iter()
            .any(|c| c.article_id == result.article_id && c.score == result.score));
    }
}

// ============================================================================
// FIXTURE RANKING
// ============================================================================

#[test]
fn test_fixture_rust_ranking() {
    let index = load_fixture_index();
    let results = search(&index, "rust");

    let ids: Vec<usize> = results.iter().map(|r| r.article_id).collect();
    // Title+word+tag (20) > excerpt+tag (8) > excerpt only (3).
    assert_eq!(ids, vec![0, 1, 7]);
    assert_eq!(results[0].score, TITLE_WEIGHT + TITLE_WORD_BONUS + TAG_WEIGHT);
    assert_eq!(results[1].score, EXCERPT_WEIGHT + TAG_WEIGHT);
    assert_eq!(results[2].score, EXCERPT_WEIGHT);
}

#[test]
fn test_fixture_title_match_ranks_first() {
    let index = load_fixture_index();
    let results = search(&index, "parsing");

    assert!(!results.is_empty(), "Should find 'parsing' in the fixture");
    assert_eq!(results[0].article_id, 1, "Doc with title match should rank first");
}
