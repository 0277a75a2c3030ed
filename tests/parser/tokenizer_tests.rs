//! Tokenizer tests.
//!
//! Tests for converting raw input to token streams.

use mudlex_parser::tokenizer::{Tokenizer, join_normalized, join_original, normalize_phrase};

fn normalized(input: &str) -> Vec<String> {
    Tokenizer::tokenize(input)
        .into_iter()
        .map(|t| t.normalized)
        .collect()
}

#[test]
fn tokenize_simple_command() {
    assert_eq!(normalized("take sword"), vec!["take", "sword"]);
}

#[test]
fn tokenize_lowercases() {
    assert_eq!(normalized("TAKE Sword"), vec!["take", "sword"]);
}

#[test]
fn tokenize_strips_punctuation_but_keeps_original() {
    let tokens = Tokenizer::tokenize("take, the sword!");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].normalized, "take");
    assert_eq!(tokens[0].original, "take,");
    assert_eq!(tokens[2].original, "sword!");
}

#[test]
fn tokenize_drops_punctuation_only_words() {
    assert_eq!(normalized("look ... at -- chest"), vec!["look", "at", "chest"]);
}

#[test]
fn tokenize_empty_input() {
    assert!(Tokenizer::tokenize("").is_empty());
    assert!(Tokenizer::tokenize(" \t\n ").is_empty());
    assert!(Tokenizer::tokenize("?! ...").is_empty());
}

#[test]
fn tokenize_collapses_whitespace() {
    assert_eq!(normalized("  put\tsword \n in  chest "), vec!["put", "sword", "in", "chest"]);
}

#[test]
fn join_helpers() {
    let tokens = Tokenizer::tokenize("say Hello, the World");
    assert_eq!(join_original(&tokens, 1..4), "Hello, the World");
    assert_eq!(join_normalized(&tokens, 1..4, |w| w == "the"), "hello world");
    assert_eq!(join_normalized(&tokens, 1..1, |_| false), "");
}

#[test]
fn normalize_phrase_matches_input_normalization() {
    assert_eq!(normalize_phrase("  Short   Sword "), "short sword");
    assert_eq!(normalize_phrase("Bob's"), "bobs");
}
