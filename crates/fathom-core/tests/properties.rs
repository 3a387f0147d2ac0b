use fathom_core::{analyze_bytes, analyze_str};
use proptest::prelude::*;

proptest! {
    #[test]
    fn single_line_bytes_match_str(text in "[a-zA-Z .!?',-]{0,80}") {
        let from_str = analyze_str(&text);
        let from_bytes = analyze_bytes(text.as_bytes()).expect("utf-8 input");
        prop_assert_eq!(from_bytes.word_count(), from_str.word_count());
        prop_assert_eq!(from_bytes.sentence_count(), from_str.sentence_count());
        prop_assert_eq!(from_bytes.syllable_count(), from_str.syllable_count());
        prop_assert_eq!(from_bytes.unique_words(), from_str.unique_words());
    }

    #[test]
    fn line_counts_cover_every_line(lines in prop::collection::vec("[a-z .]{0,20}", 0..10)) {
        let text: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let stats = analyze_bytes(text.as_bytes()).expect("utf-8 input");
        prop_assert_eq!(stats.text_line_count() + stats.blank_line_count(), lines.len());
        let blanks = lines.iter().filter(|l| l.trim().is_empty()).count();
        prop_assert_eq!(stats.blank_line_count(), blanks);
    }
}
