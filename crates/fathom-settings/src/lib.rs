//! # fathom-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Settings consumed by the text analyzer. Everything here is plain data with
//! Serde derive so callers can keep the configuration in a TOML file.
//!
//! ## What does NOT belong here
//! * File I/O (the façade reads files and hands the text to [`AnalyzerSettings::from_toml_str`])
//! * Regex compilation

use serde::{Deserialize, Serialize};

/// Abbreviations whose trailing period does not end a sentence.
///
/// Personal titles, then commercial suffixes, then general abbreviations.
/// Entries are lowercase because they are matched against lowercased text.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    // personal titles
    "mr", "mrs", "m", "dr", "prof", "det", "insp",
    // commercial
    "pty", "plc", "ltd", "inc",
    // other
    "etc", "vs",
];

/// Analyzer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    /// Abbreviations suppressed before sentence detection, applied in order.
    pub abbreviations: Vec<String>,

    /// Remove `"` and `'` before counting sentence terminators.
    ///
    /// Off by default: quotes are left in place, so a terminator directly
    /// followed by a closing quote is not counted mid-line.
    pub strip_quotes: bool,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            abbreviations: default_abbreviations(),
            strip_quotes: false,
        }
    }
}

impl AnalyzerSettings {
    /// Parse settings from TOML. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Abbreviations lowercased, trimmed, with empty entries and a trailing
    /// period dropped, in their configured order.
    pub fn normalized_abbreviations(&self) -> Vec<String> {
        self.abbreviations
            .iter()
            .map(|a| a.trim().trim_end_matches('.').to_lowercase())
            .filter(|a| !a.is_empty())
            .collect()
    }
}

/// The built-in abbreviation table as owned strings.
pub fn default_abbreviations() -> Vec<String> {
    DEFAULT_ABBREVIATIONS.iter().map(|a| a.to_string()).collect()
}
