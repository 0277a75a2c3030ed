//! Sentence forms.
//!
//! Each [`SentenceForm`] is one accepted grammatical shape. Given a matched
//! verb, a form carves the remaining tokens into object, preposition and
//! free-text spans, resolving object spans against the player and area
//! lexicons.
//!
//! Forms whose direct slot is free text locate the preposition by scanning
//! backward from the end of the input (see [`MatchContext::scan_preposition`]).
//! Free text that itself contains a preposition word can be split at the
//! wrong place; "whisper go to the gate to bob" splits at the last "to".

use std::ops::Range;

use mudlex_foundation::ObjectId;

use crate::lexicon::Scope;
use crate::resolver::{AliasSpan, find_longest_global_alias, find_longest_local_alias};
use crate::results::{ParseResult, ParseStatus, VerbType};
use crate::tokenizer::{Token, is_ignore_word, join_normalized, join_original};
use crate::vocabulary::{Grammar, PrepositionType, Support, VerbInfo, Vocabulary};

/// The closed set of sentence shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentenceForm {
    /// `inventory`
    Verb,
    /// `take sword`
    VerbDirect,
    /// `say hello there`
    VerbText,
    /// `look at chest`
    VerbPrepIndirect,
    /// `put sword in chest`
    VerbDirectIndirect,
    /// `edit sword to shiny blade`
    VerbDirectPrepText,
    /// `whisper meet me at dawn to bob`
    VerbTextIndirect,
    /// `set name of sword to Blade`
    VerbTextPrepText,
}

impl SentenceForm {
    /// Lists the forms a grammar accepts.
    ///
    /// Optional slots contribute both the shape with the slot and the shape
    /// without it.
    #[must_use]
    pub fn for_grammar(grammar: &Grammar) -> Vec<SentenceForm> {
        use Support::{No, Optional, Required, Text};

        match (grammar.direct, grammar.indirect) {
            (No, No) => vec![Self::Verb],
            (No, Text) => vec![Self::VerbText],
            (No, Optional) => vec![Self::Verb, Self::VerbPrepIndirect],
            (No, Required) => vec![Self::VerbPrepIndirect],
            (Text, No) => vec![Self::VerbText],
            (Text, Optional) => vec![Self::VerbText, Self::VerbTextIndirect],
            (Text, Required) => vec![Self::VerbTextIndirect],
            (Text, Text) => vec![Self::VerbTextPrepText],
            (Optional, No) => vec![Self::Verb, Self::VerbDirect],
            (Required, No) => vec![Self::VerbDirect],
            (Optional, Optional) => vec![
                Self::Verb,
                Self::VerbDirect,
                Self::VerbPrepIndirect,
                Self::VerbDirectIndirect,
            ],
            (Optional, Required) => vec![Self::VerbPrepIndirect, Self::VerbDirectIndirect],
            (Required, Optional) => vec![Self::VerbDirect, Self::VerbDirectIndirect],
            (Required, Required) => vec![Self::VerbDirectIndirect],
            (Optional | Required, Text) => vec![Self::VerbDirectPrepText],
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Verb => "V",
            Self::VerbDirect => "VD",
            Self::VerbText => "VT",
            Self::VerbPrepIndirect => "VPI",
            Self::VerbDirectIndirect => "VDPI",
            Self::VerbDirectPrepText => "VDPT",
            Self::VerbTextIndirect => "VTPI",
            Self::VerbTextPrepText => "VTPT",
        }
    }

    /// True if the form has an object slot that can hold the verb's owner.
    #[must_use]
    pub const fn has_object_slot(self) -> bool {
        !matches!(self, Self::Verb | Self::VerbText | Self::VerbTextPrepText)
    }

    /// Attempts to match the tokens after `verb` against this form.
    #[must_use]
    pub fn attempt<'a>(self, ctx: &MatchContext<'_>, verb: &VerbCandidate<'a>) -> Match<'a> {
        let mut m = Match::new(verb, self);
        let start = verb.range.end;

        let outcome = match self {
            Self::Verb => ctx.expect_end(start),
            Self::VerbDirect => Self::match_direct(ctx, &mut m, start),
            Self::VerbText => ctx.text(start..ctx.len()).map(|text| m.text = Some(text)),
            Self::VerbPrepIndirect => Self::match_prep_indirect(ctx, &mut m, start),
            Self::VerbDirectIndirect => Self::match_direct_indirect(ctx, &mut m, start),
            Self::VerbDirectPrepText => Self::match_direct_prep_text(ctx, &mut m, start),
            Self::VerbTextIndirect => Self::match_text_indirect(ctx, &mut m, start),
            Self::VerbTextPrepText => Self::match_text_prep_text(ctx, &mut m, start),
        };

        match outcome {
            Ok(()) => {
                if let Some(owner) = verb.owner {
                    m.bind_owner(self, owner, ctx);
                }
            }
            Err(failure) => m.fail(failure),
        }
        m
    }

    fn match_direct(ctx: &MatchContext<'_>, m: &mut Match<'_>, start: usize) -> SlotResult<()> {
        let direct = ctx.resolve_noun(start)?;
        ctx.expect_end(direct.range.end)?;
        m.set_direct(direct);
        Ok(())
    }

    fn match_prep_indirect(
        ctx: &MatchContext<'_>,
        m: &mut Match<'_>,
        start: usize,
    ) -> SlotResult<()> {
        let (preposition, range) = ctx.resolve_preposition(&m.info.grammar, start)?;
        let indirect = ctx.resolve_noun(range.end)?;
        ctx.expect_end(indirect.range.end)?;
        m.preposition = preposition;
        m.set_indirect(indirect);
        Ok(())
    }

    fn match_direct_indirect(
        ctx: &MatchContext<'_>,
        m: &mut Match<'_>,
        start: usize,
    ) -> SlotResult<()> {
        let direct = ctx.resolve_noun(start)?;
        let (preposition, range) = ctx.resolve_preposition(&m.info.grammar, direct.range.end)?;
        let indirect = ctx.resolve_noun(range.end)?;
        ctx.expect_end(indirect.range.end)?;
        m.set_direct(direct);
        m.preposition = preposition;
        m.set_indirect(indirect);
        Ok(())
    }

    fn match_direct_prep_text(
        ctx: &MatchContext<'_>,
        m: &mut Match<'_>,
        start: usize,
    ) -> SlotResult<()> {
        let direct = ctx.resolve_noun(start)?;
        let (preposition, range) = ctx.resolve_preposition(&m.info.grammar, direct.range.end)?;
        let text = ctx.text(range.end..ctx.len())?;
        m.set_direct(direct);
        m.preposition = preposition;
        m.indirect_text = Some(text);
        Ok(())
    }

    fn match_text_indirect(
        ctx: &MatchContext<'_>,
        m: &mut Match<'_>,
        start: usize,
    ) -> SlotResult<()> {
        let (preposition, range) = ctx.scan_preposition(&m.info.grammar, start)?;
        let text = ctx.text(start..range.start)?;
        let indirect = ctx.resolve_noun(range.end)?;
        ctx.expect_end(indirect.range.end)?;
        m.text = Some(text);
        m.preposition = preposition;
        m.set_indirect(indirect);
        Ok(())
    }

    fn match_text_prep_text(
        ctx: &MatchContext<'_>,
        m: &mut Match<'_>,
        start: usize,
    ) -> SlotResult<()> {
        let (preposition, range) = ctx.scan_preposition(&m.info.grammar, start)?;
        m.text = Some(ctx.text(start..range.start)?);
        m.preposition = preposition;
        m.indirect_text = Some(ctx.text(range.end..ctx.len())?);
        Ok(())
    }
}

/// A verb found at the head of the input.
#[derive(Clone, Debug)]
pub struct VerbCandidate<'a> {
    /// Normalized verb alias
    pub alias: String,
    /// Tokens consumed by the verb
    pub range: Range<usize>,
    /// Where the verb came from
    pub verb_type: VerbType,
    /// Command and grammar
    pub info: &'a VerbInfo,
    /// The object offering the verb, for local verbs
    pub owner: Option<ObjectId>,
}

/// Why a slot failed to match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotFailure {
    /// Status the attempt is downgraded to
    pub status: ParseStatus,
    /// Original text from the failure point on
    pub unparsed: String,
}

type SlotResult<T> = Result<T, SlotFailure>;

/// A resolved noun phrase.
#[derive(Clone, Debug)]
pub struct NounSpan {
    /// The matched alias
    pub alias: String,
    /// Tokens consumed
    pub range: Range<usize>,
    /// Every object answering to the alias, player scope first
    pub owners: Vec<ObjectId>,
}

/// Everything a form needs to look at while matching.
pub struct MatchContext<'a> {
    tokens: &'a [Token],
    scope: Scope<'a>,
    vocabulary: &'a Vocabulary,
    skip_ignore_words: bool,
}

impl<'a> MatchContext<'a> {
    /// Creates a context for one parse call.
    #[must_use]
    pub fn new(
        tokens: &'a [Token],
        scope: Scope<'a>,
        vocabulary: &'a Vocabulary,
        skip_ignore_words: bool,
    ) -> Self {
        Self {
            tokens,
            scope,
            vocabulary,
            skip_ignore_words,
        }
    }

    /// The tokens being parsed.
    #[must_use]
    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    /// The lexicons in scope.
    #[must_use]
    pub fn scope(&self) -> Scope<'a> {
        self.scope
    }

    /// The built-in vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true if a normalized word is skipped during matching.
    #[must_use]
    pub fn is_ignored(&self, word: &str) -> bool {
        self.skip_ignore_words && is_ignore_word(word)
    }

    /// Longest alias at `start` accepted by `has_alias`.
    pub fn find_alias(
        &self,
        has_alias: impl Fn(&str) -> bool,
        start: usize,
    ) -> Option<AliasSpan> {
        find_longest_global_alias(has_alias, self.tokens, start, |w| self.is_ignored(w))
    }

    /// Original text from `start` to the end.
    fn rest(&self, start: usize) -> String {
        join_original(self.tokens, start.min(self.len())..self.len())
    }

    /// Succeeds if nothing but ignore words remain from `start`.
    pub fn expect_end(&self, start: usize) -> SlotResult<()> {
        let trailing = join_normalized(self.tokens, start.min(self.len())..self.len(), |w| {
            self.is_ignored(w)
        });
        if trailing.is_empty() {
            Ok(())
        } else {
            Err(SlotFailure {
                status: ParseStatus::InvalidNoun,
                unparsed: self.rest(start),
            })
        }
    }

    /// Non-empty original text for a range.
    pub fn text(&self, range: Range<usize>) -> SlotResult<String> {
        if range.start >= range.end {
            return Err(SlotFailure {
                status: ParseStatus::InvalidNoun,
                unparsed: String::new(),
            });
        }
        Ok(join_original(self.tokens, range))
    }

    /// Resolves the noun phrase at `start` against both lexicons.
    ///
    /// The longest alias across player and area wins; when both scopes match
    /// the same span, their owners are merged with the player's first.
    pub fn resolve_noun(&self, start: usize) -> SlotResult<NounSpan> {
        let mut best: Option<NounSpan> = None;

        for lexicon in self.scope.lexicons() {
            let Some(span) =
                find_longest_local_alias(&lexicon.nouns, self.tokens, start, |w| {
                    self.is_ignored(w)
                })
            else {
                continue;
            };
            let owners: Vec<ObjectId> = lexicon.nouns.lookup(&span.alias).copied().collect();

            match best.as_mut() {
                Some(current) if current.range.end > span.range.end => {}
                Some(current) if current.range.end == span.range.end => {
                    for owner in owners {
                        if !current.owners.contains(&owner) {
                            current.owners.push(owner);
                        }
                    }
                }
                _ => {
                    best = Some(NounSpan {
                        owners,
                        alias: span.alias,
                        range: span.range,
                    });
                }
            }
        }

        best.ok_or_else(|| self.noun_failure(start))
    }

    /// Classifies an unresolvable noun phrase at `start`.
    ///
    /// A phrase that some object elsewhere answers to is unavailable; anything
    /// else is invalid.
    #[must_use]
    pub fn noun_failure(&self, start: usize) -> SlotFailure {
        let known = self
            .find_alias(|alias| self.vocabulary.has_noun(alias), start)
            .is_some();
        SlotFailure {
            status: if known {
                ParseStatus::UnavailableNoun
            } else {
                ParseStatus::InvalidNoun
            },
            unparsed: self.rest(start),
        }
    }

    /// Matches one of the grammar's prepositions at `start`.
    pub fn resolve_preposition(
        &self,
        grammar: &Grammar,
        start: usize,
    ) -> SlotResult<(PrepositionType, Range<usize>)> {
        let span = self
            .find_alias(|alias| grammar.has_preposition(alias), start)
            .ok_or_else(|| SlotFailure {
                status: ParseStatus::InvalidNoun,
                unparsed: self.rest(start),
            })?;
        let kind = grammar.preposition(&span.alias).unwrap_or_default();
        Ok((kind, span.range))
    }

    /// Finds a preposition by scanning backward from the end of the input.
    ///
    /// With `e` the exclusive end of the candidate span, starting at the last
    /// token: try the single token before `e`, then widen leftward to two,
    /// three, … tokens while some text remains on the left. If nothing
    /// matches, move `e` one token left and repeat. The first hit wins, so
    /// the rightmost preposition is preferred. Both sides of the split are
    /// left non-empty.
    pub fn scan_preposition(
        &self,
        grammar: &Grammar,
        start: usize,
    ) -> SlotResult<(PrepositionType, Range<usize>)> {
        let n = self.len();

        for end in (start + 2..n).rev() {
            for prep_start in (start + 1..end).rev() {
                let phrase =
                    join_normalized(self.tokens, prep_start..end, |w| self.is_ignored(w));
                if phrase.is_empty() {
                    continue;
                }
                if let Some(kind) = grammar.preposition(&phrase) {
                    return Ok((kind, prep_start..end));
                }
            }
        }

        Err(SlotFailure {
            status: ParseStatus::InvalidNoun,
            unparsed: self.rest(start),
        })
    }
}

/// Intermediate state of one verb/form attempt.
#[derive(Clone, Debug)]
pub struct Match<'a> {
    /// Normalized verb alias
    pub verb_alias: String,
    /// Where the verb came from
    pub verb_type: VerbType,
    /// Command and grammar
    pub info: &'a VerbInfo,
    /// The form that was tried
    pub form: SentenceForm,
    /// Alias matched for the direct object
    pub direct_alias: Option<String>,
    /// Direct object candidates
    pub direct: Vec<ObjectId>,
    /// The preposition, if any
    pub preposition: PrepositionType,
    /// Alias matched for the indirect object
    pub indirect_alias: Option<String>,
    /// Indirect object candidates
    pub indirect: Vec<ObjectId>,
    /// Free text in the direct slot
    pub text: Option<String>,
    /// Free text in the indirect slot
    pub indirect_text: Option<String>,
    /// Unmatched input when the attempt failed
    pub unparsed: String,
    /// Outcome of the attempt
    pub status: ParseStatus,
}

impl<'a> Match<'a> {
    fn new(verb: &VerbCandidate<'a>, form: SentenceForm) -> Self {
        Self {
            verb_alias: verb.alias.clone(),
            verb_type: verb.verb_type,
            info: verb.info,
            form,
            direct_alias: None,
            direct: Vec::new(),
            preposition: PrepositionType::None,
            indirect_alias: None,
            indirect: Vec::new(),
            text: None,
            indirect_text: None,
            unparsed: String::new(),
            status: ParseStatus::Valid,
        }
    }

    fn set_direct(&mut self, noun: NounSpan) {
        self.direct_alias = Some(noun.alias);
        self.direct = noun.owners;
    }

    fn set_indirect(&mut self, noun: NounSpan) {
        self.indirect_alias = Some(noun.alias);
        self.indirect = noun.owners;
    }

    fn clear_slots(&mut self) {
        self.direct_alias = None;
        self.direct.clear();
        self.preposition = PrepositionType::None;
        self.indirect_alias = None;
        self.indirect.clear();
        self.text = None;
        self.indirect_text = None;
    }

    fn fail(&mut self, failure: SlotFailure) {
        self.clear_slots();
        self.status = failure.status;
        self.unparsed = failure.unparsed;
    }

    /// Ties a local verb to the object that offers it.
    ///
    /// The owner must be one of the referenced objects; that slot narrows to
    /// the owner alone. Forms without an object slot take the owner as the
    /// direct object.
    fn bind_owner(&mut self, form: SentenceForm, owner: ObjectId, ctx: &MatchContext<'_>) {
        if !form.has_object_slot() {
            self.direct = vec![owner];
        } else if self.direct.contains(&owner) {
            self.direct = vec![owner];
        } else if self.indirect.contains(&owner) {
            self.indirect = vec![owner];
        } else {
            self.fail(SlotFailure {
                status: ParseStatus::UnavailableVerb,
                unparsed: join_original(ctx.tokens(), 0..ctx.len()),
            });
        }
    }

    /// Expands the attempt into dispatcher-facing results.
    ///
    /// A valid attempt yields one result per direct object candidate, each
    /// carrying every indirect candidate. Anything else yields a single
    /// result with only the verb and the unparsed text.
    #[must_use]
    pub fn into_results(self) -> Vec<ParseResult> {
        let mut base = ParseResult::new(self.verb_type);
        base.command = self.info.command;

        if self.status != ParseStatus::Valid {
            base.unparsed = self.unparsed;
            return vec![base];
        }

        base.indirect = self.indirect;
        base.preposition = self.preposition;
        base.position = self.preposition.position();
        base.unparsed = self.text.unwrap_or_default();
        base.indirect_text = self.indirect_text;

        if self.direct.is_empty() {
            return vec![base];
        }
        self.direct
            .into_iter()
            .map(|direct| ParseResult {
                direct: Some(direct),
                ..base.clone()
            })
            .collect()
    }
}
