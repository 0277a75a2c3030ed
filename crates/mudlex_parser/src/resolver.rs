//! Longest-match alias resolution.
//!
//! Both resolvers walk the token stream from a start position and look for
//! the longest contiguous span whose normalized text is a known alias. A
//! two-word alias therefore beats a one-word alias with the same first word.

use std::ops::Range;

use crate::lexicon::AliasMap;
use crate::tokenizer::{Token, join_normalized};

/// An alias found in the token stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasSpan {
    /// The normalized alias, ignore words removed
    pub alias: String,
    /// Tokens consumed, ignore words included
    pub range: Range<usize>,
}

/// Finds the longest alias starting at `start` for which `has_alias` holds.
///
/// Words for which `ignore` returns true are left out of the candidate key
/// but still count as consumed. Returns `None` when nothing matches, in which
/// case the caller's position is unchanged.
pub fn find_longest_global_alias(
    has_alias: impl Fn(&str) -> bool,
    tokens: &[Token],
    start: usize,
    ignore: impl Fn(&str) -> bool,
) -> Option<AliasSpan> {
    if start >= tokens.len() {
        return None;
    }

    for end in (start + 1..=tokens.len()).rev() {
        let candidate = join_normalized(tokens, start..end, &ignore);
        if !candidate.is_empty() && has_alias(&candidate) {
            return Some(AliasSpan {
                alias: candidate,
                range: start..end,
            });
        }
    }

    None
}

/// Finds the longest alias starting at `start` that is a key of `map`.
pub fn find_longest_local_alias<T: Clone + PartialEq>(
    map: &AliasMap<T>,
    tokens: &[Token],
    start: usize,
    ignore: impl Fn(&str) -> bool,
) -> Option<AliasSpan> {
    find_longest_global_alias(|alias| map.contains(alias), tokens, start, ignore)
}
