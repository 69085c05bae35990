//! Relevance scoring for search results.
//!
//! Every query term is scored independently against every article field and
//! the contributions sum. All weights are small integers, so scores are exact
//! and total ordering never depends on float rounding.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## TITLE_DOMINANCE
//! The weights MUST satisfy:
//!
//! ```text
//! TITLE_WEIGHT > EXCERPT_WEIGHT + TAG_WEIGHT
//! ```
//!
//! With current values: `10 > 3 + 5 = 8` ✓
//!
//! A single-term title match always outranks the same term matching in both
//! the excerpt and the tags. This is what keeps title hits at the top of the
//! dropdown. The inequality is checked at compile time below.
//!
//! ## WORD_BONUS_REQUIRES_SUBSTRING
//! The whole-word bonus is only reachable from inside the title-substring
//! branch. A term that is a whole word of the title is necessarily a
//! substring of it, so the bonus always stacks on top of [`TITLE_WEIGHT`],
//! never replaces it.

use crate::types::ArticleText;
use crate::utils::contains_whole_word;

/// Title contains the term as a substring.
pub const TITLE_WEIGHT: u32 = 10;

/// Title contains the term as a whole word (stacks with [`TITLE_WEIGHT`]).
pub const TITLE_WORD_BONUS: u32 = 5;

/// Excerpt contains the term as a substring.
pub const EXCERPT_WEIGHT: u32 = 3;

/// Any tag contains the term as a substring.
pub const TAG_WEIGHT: u32 = 5;

// INVARIANT: TITLE_DOMINANCE
const _: () = {
    assert!(TITLE_WEIGHT > EXCERPT_WEIGHT + TAG_WEIGHT);
};

/// Maximum score a single term can contribute to one article.
pub const MAX_TERM_SCORE: u32 = TITLE_WEIGHT + TITLE_WORD_BONUS + EXCERPT_WEIGHT + TAG_WEIGHT;

/// Score one normalized term against one article's normalized text.
///
/// `term` and `text` must come from the same normalization pass
/// ([`crate::utils::normalize`]); mixing raw and normalized strings here
/// silently misses matches.
pub fn term_score(text: &ArticleText, term: &str) -> u32 {
    let mut score = 0;

    if text.title.contains(term) {
        score += TITLE_WEIGHT;
        // INVARIANT: WORD_BONUS_REQUIRES_SUBSTRING
        if contains_whole_word(&text.title, term) {
            score += TITLE_WORD_BONUS;
        }
    }

    if text.excerpt.contains(term) {
        score += EXCERPT_WEIGHT;
    }

    if text.tags.contains(term) {
        score += TAG_WEIGHT;
    }

    score
}

/// Score a full query (already normalized and tokenized) against one article.
///
/// Terms are independent: the total is the sum of [`term_score`] over every
/// term, so repeating a term counts it twice, exactly like typing it twice.
pub fn score_article(text: &ArticleText, terms: &[&str]) -> u32 {
    terms.iter().map(|term| term_score(text, term)).sum()
}
