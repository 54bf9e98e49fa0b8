//! End-to-end runs over word files on disk.

use std::fs;

use disjoint_words::{solve, CancellationToken, Error, NoProgress, SearchConfig};
use tempfile::TempDir;

fn solve_lines(lines: &[&str], config: &SearchConfig) -> disjoint_words::Result<u64> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.txt");
    fs::write(&path, lines.join("\n")).unwrap();
    solve(&path, config, &NoProgress, &CancellationToken::new()).map(|r| r.combinations)
}

#[test]
fn anagrams_collapse_into_one_group() {
    let lines = ["abcde", "edcba", "fghij", "klmno", "pqrst", "uvwxy"];
    assert_eq!(solve_lines(&lines, &SearchConfig::default()).unwrap(), 1);
}

#[test]
fn repeated_letter_words_are_ignored() {
    let with = ["abcde", "hello", "fghij", "klmno", "pqrst", "uvwxy", "zabcd"];
    let without = ["abcde", "fghij", "klmno", "pqrst", "uvwxy", "zabcd"];
    let config = SearchConfig::default();
    assert_eq!(
        solve_lines(&with, &config).unwrap(),
        solve_lines(&without, &config).unwrap()
    );
}

#[test]
fn empty_file_counts_zero() {
    assert_eq!(solve_lines(&[], &SearchConfig::default()).unwrap(), 0);
}

#[test]
fn six_five_letter_words_are_rejected_up_front() {
    let err = solve(
        "/no/such/file",
        &SearchConfig::new(5, 6),
        &NoProgress,
        &CancellationToken::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
}

#[test]
fn missing_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let err = solve(
        temp_dir.path().join("absent.txt"),
        &SearchConfig::default(),
        &NoProgress,
        &CancellationToken::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::SourceRead { .. }));
    assert!(!err.is_cancelled());
}

#[test]
fn mixed_case_and_padding_are_normalised() {
    let lines = ["  ABCDE ", "FghiJ\r", "klmno", "pqrst", "uvwxy", "naïve", "x-ray"];
    assert_eq!(solve_lines(&lines, &SearchConfig::default()).unwrap(), 1);
}

#[test]
fn shorter_words_and_smaller_groups() {
    // Pairs of disjoint three-letter words.
    let lines = ["abc", "def", "ghi", "cab", "aei", "xyz"];
    let config = SearchConfig::new(3, 2);
    // {abc, def, ghi, xyz} pairwise disjoint: 6 pairs, plus aei with xyz.
    assert_eq!(solve_lines(&lines, &config).unwrap(), 7);
}

#[test]
fn listing_matches_the_count() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.txt");
    fs::write(&path, "abc\ncba\ndef\nghi\n").unwrap();
    let config = SearchConfig::new(3, 2).with_solutions(true).with_threads(2);
    let report = solve(&path, &config, &NoProgress, &CancellationToken::new()).unwrap();
    assert_eq!(report.combinations, 3);
    assert_eq!(report.dictionary_size, 3);
    assert_eq!(
        report.solutions.unwrap(),
        vec![
            vec!["abc", "def"],
            vec!["abc", "ghi"],
            vec!["cba", "def"],
            vec!["cba", "ghi"],
            vec!["def", "ghi"],
        ]
    );
}

#[test]
fn cancelled_token_stops_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.txt");
    fs::write(&path, "abcde\nfghij\n").unwrap();
    let token = CancellationToken::new();
    token.cancel();
    let err = solve(&path, &SearchConfig::new(5, 2), &NoProgress, &token).unwrap_err();
    assert!(err.is_cancelled());
}

#[test]
fn empty_file_reports_no_words() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.txt");
    fs::write(&path, "").unwrap();
    let report = solve(&path, &SearchConfig::default(), &NoProgress, &CancellationToken::new())
        .unwrap();
    assert_eq!(report.dictionary_size, 0);
    assert_eq!(report.combinations, 0);
    assert!(report.solutions.is_none());
}
