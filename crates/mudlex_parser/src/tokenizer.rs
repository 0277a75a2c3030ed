//! Input tokenization.
//!
//! Converts raw player input into a sequence of tokens. Each token keeps the
//! word exactly as the player typed it alongside a normalized form used for
//! alias matching.

use std::ops::Range;

/// A single word of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The word as typed, punctuation included
    pub original: String,
    /// Lowercase form with punctuation stripped
    pub normalized: String,
}

impl Token {
    /// Creates a token from a raw word, normalizing it.
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let normalized = normalize_word(&original);
        Self {
            original,
            normalized,
        }
    }
}

/// Tokenizes player input.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes a raw input string.
    ///
    /// - Splits on whitespace
    /// - Lowercases and strips punctuation into `normalized`
    /// - Drops words that are nothing but punctuation
    ///
    /// Empty or whitespace-only input yields an empty vector.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current_word = String::new();

        for ch in input.chars() {
            if ch.is_whitespace() {
                Self::flush(&mut tokens, &mut current_word);
            } else {
                current_word.push(ch);
            }
        }
        Self::flush(&mut tokens, &mut current_word);

        tokens
    }

    fn flush(tokens: &mut Vec<Token>, word: &mut String) {
        if word.is_empty() {
            return;
        }
        let token = Token::new(std::mem::take(word));
        if !token.normalized.is_empty() {
            tokens.push(token);
        }
    }
}

/// Normalizes one word: lowercase, ASCII punctuation removed.
///
/// Hyphens and apostrophes inside a word are punctuation too, so
/// "Bob's" and "bobs" normalize alike.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Words skipped during alias matching.
pub const IGNORE_WORDS: [&str; 3] = ["the", "a", "an"];

/// Returns true if a normalized word is one of the [`IGNORE_WORDS`].
#[must_use]
pub fn is_ignore_word(word: &str) -> bool {
    IGNORE_WORDS.contains(&word)
}

/// Normalizes a whole phrase the same way player input is normalized.
#[must_use]
pub fn normalize_phrase(phrase: &str) -> String {
    let tokens = Tokenizer::tokenize(phrase);
    join_normalized(&tokens, 0..tokens.len(), |_| false)
}

/// The key an alias is stored under: normalized, ignore words dropped.
///
/// Input spans are joined the same way before lookup, so "Jack in the Box"
/// is found by both "jack in the box" and "jack in box".
#[must_use]
pub fn alias_key(phrase: &str) -> String {
    let tokens = Tokenizer::tokenize(phrase);
    join_normalized(&tokens, 0..tokens.len(), is_ignore_word)
}

/// Joins the normalized words of a token range with single spaces.
///
/// Words for which `ignore` returns true are skipped.
#[must_use]
pub fn join_normalized(
    tokens: &[Token],
    range: Range<usize>,
    ignore: impl Fn(&str) -> bool,
) -> String {
    let mut joined = String::new();
    for token in &tokens[range] {
        if ignore(&token.normalized) {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(&token.normalized);
    }
    joined
}

/// Joins the original words of a token range with single spaces.
#[must_use]
pub fn join_original(tokens: &[Token], range: Range<usize>) -> String {
    tokens[range]
        .iter()
        .map(|t| t.original.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
