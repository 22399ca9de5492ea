//! End-to-end spell checking scenarios over on-disk dictionaries.

use std::io::Write;

use tempfile::NamedTempFile;

use chainspell::hash::HashKind;
use chainspell::spelling::{Dictionary, SpellChecker, DEFAULT_CAPACITY, MAX_SUGGESTIONS};

fn dictionary_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn checker_from_file(contents: &str) -> SpellChecker {
    let file = dictionary_file(contents);
    let dictionary =
        Dictionary::load_from_file(file.path(), DEFAULT_CAPACITY, HashKind::default()).unwrap();
    SpellChecker::new(dictionary)
}

#[test]
fn correctly_spelled_word_reports_correct() {
    let checker = checker_from_file("cat\ncot\ndog\n");

    let report = checker.check("cat").unwrap();
    assert!(report.correct);
    assert!(report.suggestions.is_empty());
}

#[test]
fn misspelled_word_gets_five_suggestions_by_distance() {
    let checker = checker_from_file("cat\ncot\ndot\ndog\nbat\n");

    let report = checker.check("cap").unwrap();
    assert!(!report.correct);
    assert_eq!(report.suggestions.len(), MAX_SUGGESTIONS);

    // cat=1, {cot, bat}=2, {dot, dog}=3
    assert_eq!(report.suggestions[0].word, "cat");
    let distances: Vec<usize> = report.suggestions.iter().map(|s| s.distance).collect();
    assert_eq!(distances, vec![1, 2, 2, 3, 3]);

    let tail: Vec<&str> = report.suggestions[1..3]
        .iter()
        .map(|s| s.word.as_str())
        .collect();
    assert!(tail.contains(&"cot") && tail.contains(&"bat"));
}

#[test]
fn small_dictionary_yields_fewer_suggestions() {
    let checker = checker_from_file("cat\ncot\n");

    let report = checker.check("cap").unwrap();
    assert!(!report.correct);
    assert_eq!(report.suggestions.len(), 2);
}

#[test]
fn empty_dictionary_yields_empty_suggestions() {
    let checker = checker_from_file("");

    assert!(checker.dictionary().is_empty());
    let report = checker.check("cap").unwrap();
    assert!(!report.correct);
    assert!(report.suggestions.is_empty());
}

#[test]
fn empty_query_is_rejected() {
    let checker = checker_from_file("cat\n");

    assert!(checker.check("").is_err());
    assert!(checker.check(" \t ").is_err());
}

#[test]
fn queries_are_lowercased_before_lookup() {
    let checker = checker_from_file("cat\n");

    assert!(checker.check("CAT").unwrap().correct);
    assert_eq!(checker.check("CaT").unwrap().word, "cat");
}

#[test]
fn duplicate_words_load_once() {
    let file = dictionary_file("cat dog cat cat dog\n");
    let mut dictionary = Dictionary::with_capacity(16).unwrap();
    let tokens = dictionary
        .load(std::io::BufReader::new(file.reopen().unwrap()))
        .unwrap();

    assert_eq!(tokens, 5);
    assert_eq!(dictionary.len(), 2);
}

#[test]
fn loading_strips_punctuation_and_keeps_apostrophes() {
    let checker = checker_from_file("hello, world! don't\n");

    assert!(checker.check("hello").unwrap().correct);
    assert!(checker.check("world").unwrap().correct);
    assert!(checker.check("don't").unwrap().correct);
}

#[test]
fn load_grows_a_small_table() {
    let words: Vec<String> = (0..500).map(|i| format!("word{i}")).collect();
    let file = dictionary_file(&words.join("\n"));
    let dictionary = Dictionary::load_from_file(file.path(), 2, HashKind::CharSum).unwrap();

    assert_eq!(dictionary.len(), 500);
    let stats = dictionary.stats();
    assert!(stats.load_factor < 0.7);
    assert!(stats.buckets > 500);

    let checker = SpellChecker::new(dictionary);
    assert!(checker.check("word499").unwrap().correct);
    assert!(!checker.check("word500x").unwrap().correct);
}
