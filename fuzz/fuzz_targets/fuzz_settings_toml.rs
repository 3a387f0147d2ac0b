//! Fuzz target for settings TOML parsing.
//!
//! Tests `AnalyzerSettings::from_toml_str()` with arbitrary input, then
//! builds an analyzer from whatever parsed, since user-supplied
//! abbreviations end up inside regex patterns.

#![no_main]
use fathom_settings::AnalyzerSettings;
use fathom_text::TextAnalyzer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(settings) = AnalyzerSettings::from_toml_str(s) {
        let analyzer = TextAnalyzer::new(&settings);
        assert!(analyzer.sentence_detector().abbreviation_count() <= settings.abbreviations.len());
        let _ = analyzer.analyze(None, "ask dr. smith. then leave.");
    }
});
