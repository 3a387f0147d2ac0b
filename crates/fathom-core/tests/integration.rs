//! File, reader and settings entry points.

use std::fs;

use fathom_core::{
    AnalyzerSettings, analyze_path, analyze_path_with, analyze_reader, analyze_str_with,
    load_settings, readability_report,
};
use tempfile::tempdir;

#[test]
fn analyze_path_reads_every_line() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sample.txt");
    fs::write(&path, "This is a sentence.\n\nThis is another sentence.\n").expect("write");

    let stats = analyze_path(&path).expect("analyze file");
    assert_eq!(stats.word_count(), 8);
    assert_eq!(stats.sentence_count(), 2);
    assert_eq!(stats.complex_word_count(), 1);
    assert_eq!(stats.text_line_count(), 2);
    assert_eq!(stats.blank_line_count(), 1);

    let report = readability_report(&stats);
    assert!((report.fog - 6.6).abs() < 1e-9);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nope.txt");
    let err = analyze_path(&path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Failed to open"), "got: {msg}");
    assert!(msg.contains("nope.txt"));
}

#[test]
fn badly_encoded_file_is_still_analyzed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"the caf\xe9 is nice.\rsee you there.\r").expect("write");

    let stats = analyze_path(&path).expect("lossy decode");
    assert_eq!(stats.text_line_count(), 2);
    assert_eq!(stats.sentence_count(), 2);
    assert_eq!(stats.word_count(), 7);
}

#[cfg(unix)]
#[test]
fn unreadable_path_reports_a_read_error() {
    // a directory opens on unix but fails on read
    let dir = tempdir().expect("tempdir");
    let err = analyze_path(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"), "got: {err}");
}

#[test]
fn reader_entry_point_accepts_any_read() {
    let stats = analyze_reader(&b"One line here.\nAnd another one.\n"[..]).expect("read");
    assert_eq!(stats.sentence_count(), 2);
    assert_eq!(stats.text_line_count(), 2);
}

#[test]
fn settings_file_round_trips_into_the_analyzer() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("fathom.toml");
    fs::write(&path, "abbreviations = [\"Col.\"]\nstrip_quotes = true\n").expect("write");

    let settings = load_settings(&path).expect("load settings");
    assert!(settings.strip_quotes);
    assert_eq!(settings.normalized_abbreviations(), vec!["col".to_string()]);

    let text = "I met Col. Mustard today.";
    assert_eq!(analyze_str_with(&settings, text).sentence_count(), 1);
    assert_eq!(
        analyze_str_with(&AnalyzerSettings::default(), text).sentence_count(),
        2
    );

    let doc = dir.path().join("doc.txt");
    fs::write(&doc, format!("{text}\n\n")).expect("write");
    let stats = analyze_path_with(&settings, &doc).expect("analyze file");
    assert_eq!(stats.sentence_count(), 1);
    assert_eq!(stats.blank_line_count(), 1);
    assert_eq!(analyze_path(&doc).expect("analyze file").sentence_count(), 2);
}

#[test]
fn malformed_settings_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "abbreviations = 3\n").expect("write");
    let err = load_settings(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse settings"));
}

#[test]
fn missing_settings_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_settings(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}
