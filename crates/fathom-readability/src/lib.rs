//! # fathom-readability
//!
//! **Tier 2 (Scoring)**
//!
//! Readability indices over accumulated text statistics.
//!
//! All functions are pure and use `f64` division. The divisor of each ratio
//! (`sentence_count` or `word_count`) is expected to be non-zero; when it is
//! zero the result is infinite or NaN and no error is raised.
//!
//! ```
//! use fathom_readability::{FogBand, fog, round_f64};
//! use fathom_types::Stats;
//!
//! let mut stats = Stats::new();
//! stats.record_word("readable", 3, true);
//! stats.record_word("text", 1, false);
//! stats.add_sentences(1);
//! // (2 words per sentence + 50% complex) * 0.4
//! assert_eq!(round_f64(fog(&stats), 3), 20.8);
//! assert_eq!(FogBand::for_score(fog(&stats)), FogBand::Unreadable);
//! ```

use fathom_types::{ReadabilityReport, SCHEMA_VERSION, Stats};

/// Accepted words per detected sentence.
pub fn words_per_sentence(stats: &Stats) -> f64 {
    stats.word_count() as f64 / stats.sentence_count() as f64
}

/// Complex words as a percentage of all words.
pub fn percent_complex_words(stats: &Stats) -> f64 {
    (stats.complex_word_count() as f64 / stats.word_count() as f64) * 100.0
}

/// Average syllables per word.
pub fn syllables_per_word(stats: &Stats) -> f64 {
    stats.syllable_count() as f64 / stats.word_count() as f64
}

/// Gunning Fog index.
///
/// ( words_per_sentence + percent_complex_words ) * 0.4
///
/// The number of years of formal education a reader of average
/// intelligence needs to understand the text on first reading.
/// See [`FogBand`] for the usual interpretation.
pub fn fog(stats: &Stats) -> f64 {
    (words_per_sentence(stats) + percent_complex_words(stats)) * 0.4
}

/// Flesch reading ease.
///
/// 206.835 - (1.015 * words_per_sentence) - (84.6 * syllables_per_word)
///
/// Rated on a 100 point scale; higher is easier. 60 to 70 is considered
/// optimal.
pub fn flesch(stats: &Stats) -> f64 {
    206.835 - (1.015 * words_per_sentence(stats)) - (84.6 * syllables_per_word(stats))
}

/// Flesch-Kincaid grade level.
///
/// (11.8 * syllables_per_word) + (0.39 * words_per_sentence) - 15.59
///
/// A U.S. school grade: 8.0 means an eighth grader can follow the text.
/// 7.0 to 8.0 is considered optimal.
pub fn kincaid(stats: &Stats) -> f64 {
    (11.8 * syllables_per_word(stats)) + (0.39 * words_per_sentence(stats)) - 15.59
}

/// Collect every score and ratio into one serializable report.
pub fn readability_report(stats: &Stats) -> ReadabilityReport {
    ReadabilityReport {
        schema_version: SCHEMA_VERSION,
        words_per_sentence: words_per_sentence(stats),
        percent_complex_words: percent_complex_words(stats),
        syllables_per_word: syllables_per_word(stats),
        fog: fog(stats),
        flesch: flesch(stats),
        kincaid: kincaid(stats),
    }
}

/// Conventional reading of a Fog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogBand {
    /// Below 10.
    Childish,
    /// 10 to below 12.
    Acceptable,
    /// 12 to below 14.
    Ideal,
    /// 14 to below 18.
    Difficult,
    /// 18 and above.
    Unreadable,
}

impl FogBand {
    /// Classify a Fog score. NaN is treated as unreadable.
    pub fn for_score(score: f64) -> Self {
        if score.is_nan() || score >= 18.0 {
            FogBand::Unreadable
        } else if score >= 14.0 {
            FogBand::Difficult
        } else if score >= 12.0 {
            FogBand::Ideal
        } else if score >= 10.0 {
            FogBand::Acceptable
        } else {
            FogBand::Childish
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FogBand::Childish => "childish",
            FogBand::Acceptable => "acceptable",
            FogBand::Ideal => "ideal",
            FogBand::Difficult => "difficult",
            FogBand::Unreadable => "unreadable",
        }
    }
}

/// Round for display. Scores themselves are never rounded.
pub fn round_f64(val: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (val * factor).round() / factor
}
