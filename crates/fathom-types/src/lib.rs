//! # fathom-types
//!
//! **Tier 0 (Core Types)**
//!
//! Data types shared by the fathom microcrates: the [`Stats`] accumulator
//! filled by the text analyzer and the [`ReadabilityReport`] derived from it.
//!
//! ## What belongs here
//! * Pure data structs with Serde derive
//! * Accumulation primitives that keep the `Stats` invariants
//! * Stability markers (`SCHEMA_VERSION`)
//!
//! ## What does NOT belong here
//! * Tokenization or syllable heuristics
//! * Readability formulas
//! * File I/O

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The current schema version for serialized reports.
pub const SCHEMA_VERSION: u32 = 1;

/// Running word, sentence and syllable counts for a body of text.
///
/// `Stats` is an accumulator: every analysis call adds to it and nothing
/// ever decreases. The invariants below hold for any sequence of
/// accumulation calls:
///
/// * `word_count` equals the sum of all `unique_words` values.
/// * `complex_word_count <= word_count`.
///
/// Deserialization checks both invariants and rejects input that breaks
/// either one.
///
/// Concurrent mutation is not supported; own one `Stats` per analysis
/// session or synchronize writes externally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatsRepr")]
pub struct Stats {
    word_count: usize,
    sentence_count: usize,
    syllable_count: usize,
    complex_word_count: usize,
    text_line_count: usize,
    blank_line_count: usize,
    unique_words: BTreeMap<String, usize>,
}

impl Stats {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of detected sentence terminators.
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Sum of the per-word syllable estimates.
    pub fn syllable_count(&self) -> usize {
        self.syllable_count
    }

    /// Number of accepted, non-hyphenated words with more than two syllables.
    pub fn complex_word_count(&self) -> usize {
        self.complex_word_count
    }

    /// Lines with visible content seen by the line-based entry points.
    pub fn text_line_count(&self) -> usize {
        self.text_line_count
    }

    /// Empty or whitespace-only lines seen by the line-based entry points.
    pub fn blank_line_count(&self) -> usize {
        self.blank_line_count
    }

    /// Occurrence count per accepted (lowercase) word.
    pub fn unique_words(&self) -> &BTreeMap<String, usize> {
        &self.unique_words
    }

    /// Number of distinct accepted words.
    pub fn unique_word_count(&self) -> usize {
        self.unique_words.len()
    }

    /// Occurrences of a single word (0 when never seen).
    pub fn occurrences(&self, word: &str) -> usize {
        self.unique_words.get(word).copied().unwrap_or(0)
    }

    /// Record one accepted word.
    ///
    /// `complex` marks the word as counting towards the Fog index.
    pub fn record_word(&mut self, word: &str, syllables: usize, complex: bool) {
        *self.unique_words.entry(word.to_string()).or_insert(0) += 1;
        self.word_count += 1;
        self.syllable_count += syllables;
        if complex {
            self.complex_word_count += 1;
        }
    }

    /// Add detected sentence terminators.
    pub fn add_sentences(&mut self, count: usize) {
        self.sentence_count += count;
    }

    /// Record one input line, blank or not.
    pub fn record_line(&mut self, blank: bool) {
        if blank {
            self.blank_line_count += 1;
        } else {
            self.text_line_count += 1;
        }
    }

    /// True when nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
            && self.sentence_count == 0
            && self.text_line_count == 0
            && self.blank_line_count == 0
    }
}

/// Why a deserialized `Stats` was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("word_count {word_count} does not match the {unique_total} recorded word occurrences")]
    WordCountMismatch {
        word_count: usize,
        unique_total: usize,
    },

    #[error("complex_word_count {complex_word_count} exceeds word_count {word_count}")]
    ComplexExceedsWords {
        complex_word_count: usize,
        word_count: usize,
    },
}

/// Wire shape of [`Stats`], checked before it becomes one.
#[derive(Deserialize)]
struct StatsRepr {
    word_count: usize,
    sentence_count: usize,
    syllable_count: usize,
    complex_word_count: usize,
    #[serde(default)]
    text_line_count: usize,
    #[serde(default)]
    blank_line_count: usize,
    #[serde(default)]
    unique_words: BTreeMap<String, usize>,
}

impl TryFrom<StatsRepr> for Stats {
    type Error = StatsError;

    fn try_from(repr: StatsRepr) -> Result<Self, Self::Error> {
        // saturate so an overflowing total is still reported as a mismatch
        let unique_total = repr
            .unique_words
            .values()
            .fold(0usize, |acc, n| acc.saturating_add(*n));
        if unique_total != repr.word_count {
            return Err(StatsError::WordCountMismatch {
                word_count: repr.word_count,
                unique_total,
            });
        }
        if repr.complex_word_count > repr.word_count {
            return Err(StatsError::ComplexExceedsWords {
                complex_word_count: repr.complex_word_count,
                word_count: repr.word_count,
            });
        }
        Ok(Self {
            word_count: repr.word_count,
            sentence_count: repr.sentence_count,
            syllable_count: repr.syllable_count,
            complex_word_count: repr.complex_word_count,
            text_line_count: repr.text_line_count,
            blank_line_count: repr.blank_line_count,
            unique_words: repr.unique_words,
        })
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats:[words: {}, sentences: {}, text: {}, blank: {}, syllables: {}, complex: {}]",
            self.word_count,
            self.sentence_count,
            self.text_line_count,
            self.blank_line_count,
            self.syllable_count,
            self.complex_word_count
        )
    }
}

/// Readability scores and the ratios they are built from.
///
/// Values are unrounded. A zero word or sentence count yields infinite or
/// NaN entries; `serde_json` writes those as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub schema_version: u32,
    /// Accepted words divided by detected sentences.
    pub words_per_sentence: f64,
    /// Share of complex words, as a percentage of all words.
    pub percent_complex_words: f64,
    /// Average syllables per accepted word.
    pub syllables_per_word: f64,
    /// Gunning Fog index (years of formal education).
    pub fog: f64,
    /// Flesch reading ease (higher is easier).
    pub flesch: f64,
    /// Flesch-Kincaid grade level.
    pub kincaid: f64,
}
