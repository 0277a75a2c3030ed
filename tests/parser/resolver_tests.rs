//! Alias resolver tests.
//!
//! Tests for longest-match lookup of verb and noun phrases.

use mudlex_parser::resolver::{find_longest_global_alias, find_longest_local_alias};
use mudlex_parser::tokenizer::is_ignore_word;
use mudlex_parser::{NounMap, Tokenizer, VerbTable, Vocabulary};

use crate::fixtures::{SHORT_SWORD, SWORD};

fn no_ignore(_: &str) -> bool {
    false
}

#[test]
fn longest_local_alias_wins() {
    let mut nouns = NounMap::new();
    nouns.insert("sword", SWORD);
    nouns.insert("short sword", SHORT_SWORD);
    let tokens = Tokenizer::tokenize("take short sword");

    let span = find_longest_local_alias(&nouns, &tokens, 1, no_ignore).unwrap();
    assert_eq!(span.alias, "short sword");
    assert_eq!(span.range, 1..3);
}

#[test]
fn shorter_alias_used_when_longer_absent() {
    let mut nouns = NounMap::new();
    nouns.insert("sword", SWORD);
    let tokens = Tokenizer::tokenize("take sword now");

    let span = find_longest_local_alias(&nouns, &tokens, 1, no_ignore).unwrap();
    assert_eq!(span.alias, "sword");
    assert_eq!(span.range, 1..2);
}

#[test]
fn ignore_words_skipped_inside_alias() {
    let mut nouns = NounMap::new();
    nouns.insert("bag of holding", SWORD);
    let tokens = Tokenizer::tokenize("the bag of holding");

    let span = find_longest_local_alias(&nouns, &tokens, 0, |w| w == "the").unwrap();
    assert_eq!(span.alias, "bag of holding");
    assert_eq!(span.range, 0..4);
}

#[test]
fn alias_with_inner_ignore_word() {
    let mut nouns = NounMap::new();
    nouns.insert("jack in the box", SWORD);

    for input in ["jack in the box", "jack in box", "the jack in a box"] {
        let tokens = Tokenizer::tokenize(input);
        let span = find_longest_local_alias(&nouns, &tokens, 0, is_ignore_word).unwrap();
        assert_eq!(span.alias, "jack in box", "input {input:?}");
        assert_eq!(span.range, 0..tokens.len());
    }
}

#[test]
fn global_alias_against_vocabulary() {
    let vocab = Vocabulary::standard();
    let tokens = Tokenizer::tokenize("pick up lamp");

    let span = find_longest_global_alias(
        |alias| vocab.has_verb_alias(VerbTable::Global, alias),
        &tokens,
        0,
        is_ignore_word,
    )
    .unwrap();
    assert_eq!(span.alias, "pick up");
    assert_eq!(span.range, 0..2);
}

#[test]
fn no_match_and_out_of_range() {
    let nouns = NounMap::new();
    let tokens = Tokenizer::tokenize("take lamp");
    assert!(find_longest_local_alias(&nouns, &tokens, 1, no_ignore).is_none());
    assert!(find_longest_local_alias(&nouns, &tokens, 2, no_ignore).is_none());
}
