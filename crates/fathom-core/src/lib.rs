//! # fathom-core
//!
//! **Tier 3 (Façade)**
//!
//! This crate is the **primary library interface** for `fathom`.
//! It wires the text analyzer to the readability formulas and adds the
//! file, reader and settings entry points.
//!
//! If you are embedding `fathom` into another Rust application, depend on this
//! crate. The tier crates are re-exported as modules for callers that need
//! the lower-level pieces.
//!
//! ## Example
//!
//! ```
//! use fathom_core::{analyze_str, readability_report};
//!
//! let stats = analyze_str("This is a sentence.  This is another sentence.");
//! let report = readability_report(&stats);
//! assert_eq!(stats.word_count(), 8);
//! assert!((report.fog - 6.6).abs() < 1e-9);
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

// Re-export tiers for convenience
pub use fathom_readability as readability;
pub use fathom_settings as settings;
pub use fathom_syllable as syllable;
pub use fathom_text as text;
pub use fathom_types as types;

pub use fathom_readability::readability_report;
pub use fathom_settings::AnalyzerSettings;
pub use fathom_text::TextAnalyzer;
pub use fathom_types::{ReadabilityReport, Stats};

/// Analyze a string with the default settings.
pub fn analyze_str(text: &str) -> Stats {
    fathom_text::analyze_text(text)
}

/// Analyze a string with custom settings.
///
/// Builds a fresh [`TextAnalyzer`]; reuse one directly when analyzing many
/// strings with the same settings.
pub fn analyze_str_with(settings: &AnalyzerSettings, text: &str) -> Stats {
    TextAnalyzer::new(settings).analyze(None, text)
}

/// Analyze text from any reader, line by line, with the default settings.
///
/// Line counts are filled in addition to the word and sentence counts.
/// Invalid UTF-8 is decoded lossily; only read errors fail.
pub fn analyze_reader<R: Read>(reader: R) -> Result<Stats> {
    read_with(&TextAnalyzer::default(), reader).context("Failed to read text")
}

/// Analyze text from any reader, line by line, with custom settings.
pub fn analyze_reader_with<R: Read>(settings: &AnalyzerSettings, reader: R) -> Result<Stats> {
    read_with(&TextAnalyzer::new(settings), reader).context("Failed to read text")
}

/// Analyze an in-memory buffer, line by line.
pub fn analyze_bytes(bytes: &[u8]) -> Result<Stats> {
    analyze_reader(bytes)
}

/// Analyze a text file, line by line, with the default settings.
pub fn analyze_path(path: &Path) -> Result<Stats> {
    path_with(&TextAnalyzer::default(), path)
}

/// Analyze a text file, line by line, with custom settings.
///
/// Pairs with [`load_settings`].
pub fn analyze_path_with(settings: &AnalyzerSettings, path: &Path) -> Result<Stats> {
    path_with(&TextAnalyzer::new(settings), path)
}

fn read_with<R: Read>(analyzer: &TextAnalyzer, reader: R) -> std::io::Result<Stats> {
    analyzer.analyze_reader(BufReader::new(reader))
}

fn path_with(analyzer: &TextAnalyzer, path: &Path) -> Result<Stats> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let stats =
        read_with(analyzer, file).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), words = stats.word_count(), "analyzed file");
    Ok(stats)
}

/// Load analyzer settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<AnalyzerSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let settings = AnalyzerSettings::from_toml_str(&content)
        .with_context(|| format!("Failed to parse settings {}", path.display()))?;
    debug!(
        path = %path.display(),
        abbreviations = settings.abbreviations.len(),
        strip_quotes = settings.strip_quotes,
        "loaded settings"
    );
    Ok(settings)
}
