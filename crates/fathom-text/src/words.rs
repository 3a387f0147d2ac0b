//! Candidate word extraction and acceptance filters.
//!
//! Words are found in already lowercased text. A word starts with a letter
//! and continues with letters, apostrophes and hyphens (`twice`, `i'd`,
//! `non-plussed`). Tokens such as `k12`, `&` or `x.y.z` never produce a
//! candidate, or produce only fragments that the filters drop.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z][-'a-z]*\b").expect("valid regex literal"));

static VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]").expect("valid regex literal"));

static VALID_HYPHENATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,}-[a-z]{2,}$").expect("valid regex literal"));

/// Candidate words, left to right and non-overlapping.
///
/// Expects lowercased input; uppercase letters never start or extend a word.
pub fn candidate_words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Whether a candidate word is counted.
///
/// Words without a vowel are taken to be acronyms or initialisms (`bbc`,
/// `nsw`). This does not catch acronyms that happen to contain a vowel
/// (`gpo`).
/// Hyphenated words are kept only in the `be-bop` shape: two or more
/// letters on each side of a single hyphen.
pub fn is_accepted(word: &str) -> bool {
    if !VOWEL.is_match(word) {
        return false;
    }
    if word.contains('-') && !VALID_HYPHENATION.is_match(word) {
        return false;
    }
    true
}

/// Whether an accepted word counts as complex for the Fog index.
///
/// Hyphenated compounds are never complex.
pub fn is_complex(word: &str, syllables: usize) -> bool {
    syllables > 2 && !word.contains('-')
}
