//! # fathom-text
//!
//! **Tier 2 (Analysis)**
//!
//! Tokenizes English text into words and sentence terminators and
//! accumulates the counts into a [`Stats`].
//!
//! Each string is lowercased and trimmed. Candidate words are filtered
//! (see [`words`]), counted, and passed to the syllable estimator.
//! Sentence terminators are counted on the same string independently of
//! which words were accepted (see [`sentences`]).
//!
//! ```
//! use fathom_text::analyze_text;
//!
//! let stats = analyze_text("This is a sentence.  This is another sentence.");
//! assert_eq!(stats.word_count(), 8);
//! assert_eq!(stats.sentence_count(), 2);
//! assert_eq!(stats.complex_word_count(), 1);
//! ```

pub mod lines;
pub mod sentences;
pub mod words;

use std::io::{self, BufRead};
use std::sync::LazyLock;

use fathom_settings::AnalyzerSettings;
use fathom_types::Stats;
use tracing::{debug, trace};

pub use lines::LossyLines;
pub use sentences::SentenceDetector;

static DEFAULT_ANALYZER: LazyLock<TextAnalyzer> = LazyLock::new(TextAnalyzer::default);

/// Fills [`Stats`] from text.
///
/// Holds only compiled, immutable configuration, so one analyzer can be
/// shared across threads. The `Stats` it writes into cannot.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    sentences: SentenceDetector,
}

impl TextAnalyzer {
    pub fn new(settings: &AnalyzerSettings) -> Self {
        Self {
            sentences: SentenceDetector::new(settings),
        }
    }

    /// Analyze `text` into `stats`, or into a fresh aggregate when `None`.
    pub fn analyze(&self, stats: Option<Stats>, text: &str) -> Stats {
        let mut stats = stats.unwrap_or_default();
        self.analyze_into(&mut stats, text);
        stats
    }

    /// Add the words, syllables and sentences of `text` to `stats`.
    pub fn analyze_into(&self, stats: &mut Stats, text: &str) {
        let text = text.to_lowercase();
        let text = text.trim();

        let words_before = stats.word_count();
        for word in words::candidate_words(text) {
            if !words::is_accepted(word) {
                continue;
            }
            let syllables = fathom_syllable::estimate(word);
            stats.record_word(word, syllables, words::is_complex(word, syllables));
        }

        let sentences = self.sentences.count(text);
        stats.add_sentences(sentences);

        trace!(
            words = stats.word_count() - words_before,
            sentences,
            "analyzed text"
        );
    }

    /// Analyze every line of `reader` into `stats`.
    ///
    /// Lines end at `\n`, `\r\n` or `\r` and are analyzed one at a time, so
    /// a sentence that wraps across a line break is only counted where its
    /// terminator sits. Each line is also recorded as a text or blank line.
    /// Invalid UTF-8 is replaced, not rejected. The first read error is
    /// returned as is; whatever was accumulated before it stays in `stats`.
    pub fn analyze_lines<R: BufRead>(&self, stats: &mut Stats, reader: R) -> io::Result<()> {
        let mut lines = LossyLines::new(reader);
        let mut count = 0usize;
        for line in lines.by_ref() {
            let line = line?;
            stats.record_line(line.trim().is_empty());
            self.analyze_into(stats, &line);
            count += 1;
        }
        debug!(
            lines = count,
            lossy = lines.lossy_chunks(),
            words = stats.word_count(),
            sentences = stats.sentence_count(),
            "analyzed lines"
        );
        Ok(())
    }

    /// Analyze every line of `reader` into a fresh aggregate.
    pub fn analyze_reader<R: BufRead>(&self, reader: R) -> io::Result<Stats> {
        let mut stats = Stats::new();
        self.analyze_lines(&mut stats, reader)?;
        Ok(stats)
    }

    pub fn sentence_detector(&self) -> &SentenceDetector {
        &self.sentences
    }
}

/// Analyze a single string with the default settings.
pub fn analyze_text(text: &str) -> Stats {
    DEFAULT_ANALYZER.analyze(None, text)
}

/// Accumulate a string into existing stats with the default settings.
pub fn analyze_into(stats: &mut Stats, text: &str) {
    DEFAULT_ANALYZER.analyze_into(stats, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_paragraph() {
        let stats = analyze_text("This is a sentence.  This is another sentence.");
        assert_eq!(stats.sentence_count(), 2);
        assert_eq!(stats.word_count(), 8);
        assert_eq!(stats.complex_word_count(), 1);
        assert_eq!(stats.syllable_count(), 12);
        assert_eq!(stats.occurrences("sentence"), 2);
    }

    #[test]
    fn absent_aggregate_starts_fresh() {
        let analyzer = TextAnalyzer::default();
        let stats = analyzer.analyze(None, "Hello there.");
        assert_eq!(stats.word_count(), 2);
        let stats = analyzer.analyze(Some(stats), "Hello again.");
        assert_eq!(stats.word_count(), 4);
        assert_eq!(stats.occurrences("hello"), 2);
        assert_eq!(stats.sentence_count(), 2);
    }

    #[test]
    fn empty_input_contributes_nothing() {
        let stats = analyze_text("   ");
        assert!(stats.is_empty());
    }
}
