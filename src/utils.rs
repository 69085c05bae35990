//! Shared text normalization.
//!
//! Article fields are folded once at index load, queries on every
//! evaluation, both through the same [`normalize`]. Scoring is plain
//! substring containment over the folded strings, so everything about
//! match behavior (case, accents, whitespace) is decided here and
//! nowhere else.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a string into its matchable form: strip accents, lowercase, and
/// collapse whitespace runs to single spaces.
///
/// Accent stripping works on the decomposed (NFD) form, dropping combining
/// marks and keeping base letters, so "café", "Café", and "cafe\u{301}"
/// all fold to "cafe". A query typed without accents still finds the
/// accented title, and the other way around.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Matchable form without the unicode-normalization tables: lowercase and
/// whitespace collapsing only.
///
/// The browser bundle ships this variant to keep decomposition data out of
/// the WASM binary; accented queries there have to match the article's own
/// spelling.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// True for the combining marks that NFD splits off accented letters.
///
/// Deliberately these four blocks rather than all of category Mn: they
/// cover Latin, Greek, and Cyrillic diacritics, and leave marks that carry
/// meaning on their own (Arabic harakat, Indic matras) attached.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split a normalized query into search terms.
///
/// Terms are whitespace-delimited tokens with more than one character.
/// Single-character tokens are dropped: they match almost everything and
/// produce noise rather than relevance.
///
/// # Invariant
///
/// Every returned term satisfies `term.chars().count() > 1`. Length is
/// counted in Unicode scalar values, not bytes, so "日本" (two chars,
/// six bytes) is a valid term while "é" (one char, two bytes) is not.
pub fn tokenize(normalized_query: &str) -> Vec<&str> {
    normalized_query
        .split(' ')
        .filter(|term| term.chars().count() > 1)
        .collect()
}

/// Check whether `term` occurs as a whole whitespace-delimited word in `text`.
///
/// Exact token equality, not substring: "go" is a whole word of "go routines"
/// but not of "golang tips".
pub fn contains_whole_word(text: &str, term: &str) -> bool {
    text.split_whitespace().any(|word| word == term)
}
