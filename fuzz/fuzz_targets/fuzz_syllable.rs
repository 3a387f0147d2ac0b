//! Fuzz target for the syllable estimator.
//!
//! Tests `estimate()` and `estimate_detailed()` with arbitrary words for
//! panics and the 0-for-empty / at-least-1 contract.

#![no_main]
use fathom_syllable::{estimate, estimate_detailed};
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_SIZE: usize = 4 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(word) = std::str::from_utf8(data) else {
        return;
    };

    let n = estimate(word);
    if word.is_empty() {
        assert_eq!(n, 0);
    } else {
        assert!(n >= 1, "non-empty word must have a syllable");
    }

    let detail = estimate_detailed(word);
    assert_eq!(detail.syllables, n, "detailed and plain estimate differ");
    assert_eq!(estimate(word), n, "estimate is not deterministic");
});
