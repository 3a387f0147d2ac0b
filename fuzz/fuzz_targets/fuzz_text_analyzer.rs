//! Fuzz target for the text analyzer.
//!
//! Feeds arbitrary text through `analyze_text()` in one piece and split at
//! a byte offset, then checks the aggregate invariants and that scoring
//! never panics.

#![no_main]
use fathom_readability::readability_report;
use fathom_text::{TextAnalyzer, analyze_text};
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let stats = analyze_text(text);
    let total: usize = stats.unique_words().values().sum();
    assert_eq!(total, stats.word_count(), "unique words out of sync");
    assert!(stats.complex_word_count() <= stats.word_count());
    assert!(stats.syllable_count() >= stats.word_count());

    // Accumulation never decreases any count.
    let analyzer = TextAnalyzer::default();
    let split = text
        .char_indices()
        .map(|(i, _)| i)
        .nth(text.chars().count() / 2)
        .unwrap_or(0);
    let (head, tail) = text.split_at(split);
    let first = analyzer.analyze(None, head);
    let both = analyzer.analyze(Some(first.clone()), tail);
    assert!(both.word_count() >= first.word_count());
    assert!(both.sentence_count() >= first.sentence_count());
    assert!(both.syllable_count() >= first.syllable_count());

    let _ = readability_report(&stats);
});
