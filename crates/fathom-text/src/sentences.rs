//! Sentence terminator counting.
//!
//! A terminator is `.`, `!` or `?` between word boundaries, optionally
//! surrounded by whitespace. Periods that close a known abbreviation
//! (`mr.`, `etc.`) are removed first so they do not end a sentence.
//!
//! A terminator at the very end of the string is found by a second,
//! end-anchored pattern and counted in addition to the mid-text scan.

use std::sync::LazyLock;

use fathom_settings::AnalyzerSettings;
use regex::{NoExpand, Regex};
use tracing::warn;

static END_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\s*[.!?]\s*\b").expect("valid regex literal"));

static END_SENTENCE_END_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\s*[.!?]\s*$").expect("valid regex literal"));

#[derive(Debug, Clone)]
struct AbbreviationRule {
    pattern: Regex,
    replacement: String,
}

/// Counts sentence terminators using a fixed abbreviation table.
#[derive(Debug, Clone)]
pub struct SentenceDetector {
    abbreviations: Vec<AbbreviationRule>,
    strip_quotes: bool,
}

impl Default for SentenceDetector {
    fn default() -> Self {
        Self::new(&AnalyzerSettings::default())
    }
}

impl SentenceDetector {
    /// Build a detector from settings. Abbreviations are lowercased.
    pub fn new(settings: &AnalyzerSettings) -> Self {
        let abbreviations = settings
            .normalized_abbreviations()
            .into_iter()
            .filter_map(|abbrev| {
                let source = format!(r"\s{}\.\s", regex::escape(&abbrev));
                match Regex::new(&source) {
                    Ok(pattern) => Some(AbbreviationRule {
                        pattern,
                        replacement: format!("{abbrev} "),
                    }),
                    Err(err) => {
                        warn!(abbreviation = %abbrev, error = %err, "skipping abbreviation");
                        None
                    }
                }
            })
            .collect();

        Self {
            abbreviations,
            strip_quotes: settings.strip_quotes,
        }
    }

    /// Number of abbreviation rules in use.
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Rewrite `" <abbrev>. "` to `"<abbrev> "` for every table entry, in
    /// table order, then drop quotes when configured to.
    pub fn prepare(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.abbreviations {
            if rule.pattern.is_match(&out) {
                out = rule
                    .pattern
                    .replace_all(&out, NoExpand(&rule.replacement))
                    .into_owned();
            }
        }
        if self.strip_quotes {
            out.retain(|c| c != '"' && c != '\'');
        }
        out
    }

    /// Count sentence terminators in lowercased, trimmed text.
    pub fn count(&self, text: &str) -> usize {
        let prepared = self.prepare(text);
        let mut count = END_SENTENCE.find_iter(&prepared).count();
        // final sentence, with no following words
        if END_SENTENCE_END_LINE.is_match(&prepared) {
            count += 1;
        }
        count
    }
}
