//! Main parser pipeline.
//!
//! Orchestrates the full flow from raw input to ranked command candidates:
//! tokenize, find every verb the input can start with, try each compatible
//! sentence form, and keep the best-ranked results.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::lexicon::Scope;
use crate::resolver::find_longest_local_alias;
use crate::results::{ParseResult, ParseStatus, ResultContainer, VerbType};
use crate::sentence::{MatchContext, SentenceForm, VerbCandidate};
use crate::tokenizer::{Token, Tokenizer};
use crate::vocabulary::{VerbTable, Vocabulary};

/// Privileges of the player issuing the command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Access {
    /// Builder verbs are available
    pub is_admin: bool,
    /// Edit-mode verbs are available (only together with `is_admin`)
    pub edit_mode: bool,
}

impl Access {
    /// A regular player.
    #[must_use]
    pub const fn player() -> Self {
        Self {
            is_admin: false,
            edit_mode: false,
        }
    }

    /// An admin, optionally in edit mode.
    #[must_use]
    pub const fn admin(edit_mode: bool) -> Self {
        Self {
            is_admin: true,
            edit_mode,
        }
    }

    /// Returns true if builder verbs are considered.
    #[must_use]
    pub const fn builder_allowed(self) -> bool {
        self.is_admin
    }

    /// Returns true if edit-mode verbs are considered.
    #[must_use]
    pub const fn edit_mode_allowed(self) -> bool {
        self.is_admin && self.edit_mode
    }
}

/// The result of one parse call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOutcome {
    /// Best status reached by any interpretation
    pub status: ParseStatus,
    /// Interpretations at that status, highest verb type only
    pub candidates: Vec<ParseResult>,
    /// The raw input, untrimmed, when no verb matched at all
    pub unparsed: String,
}

impl ParseOutcome {
    fn invalid_verb(input: &str) -> Self {
        Self {
            status: ParseStatus::InvalidVerb,
            candidates: Vec::new(),
            unparsed: input.to_string(),
        }
    }

    /// Returns true if at least one interpretation is executable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == ParseStatus::Valid
    }
}

/// The natural language command parser.
///
/// Holds only the read-only vocabulary and configuration; one instance can
/// be shared between threads.
#[derive(Clone, Debug)]
pub struct TextParser {
    vocabulary: Arc<Vocabulary>,
    config: ParserConfig,
}

impl Default for TextParser {
    fn default() -> Self {
        Self::standard()
    }
}

impl TextParser {
    /// Creates a parser over the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: impl Into<Arc<Vocabulary>>) -> Self {
        Self {
            vocabulary: vocabulary.into(),
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser over the built-in vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Vocabulary::standard())
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// The vocabulary this parser reads.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one line of player input.
    ///
    /// Never fails: every outcome, including nonsense, is reported through
    /// [`ParseOutcome::status`].
    #[must_use]
    pub fn parse(&self, input: &str, scope: Scope<'_>, access: Access) -> ParseOutcome {
        debug!(input, ?access, "parsing command");

        let tokens = Tokenizer::tokenize(input);
        if tokens.is_empty() {
            debug!(status = %ParseStatus::InvalidVerb, "empty input");
            return ParseOutcome::invalid_verb(input);
        }

        let ctx = MatchContext::new(
            &tokens,
            scope,
            &self.vocabulary,
            self.config.skip_ignore_words,
        );
        let verbs = Self::match_verbs(&ctx, access);

        if verbs.is_empty() {
            return Self::unmatched_verb(&ctx, input);
        }

        let mut results = ResultContainer::new();
        for verb in &verbs {
            for form in SentenceForm::for_grammar(&verb.info.grammar) {
                let attempt = form.attempt(&ctx, verb);
                if self.config.trace_candidates {
                    trace!(
                        verb = %attempt.verb_alias,
                        verb_type = %attempt.verb_type,
                        command = %attempt.info.command,
                        form = form.name(),
                        status = %attempt.status,
                        "attempted candidate"
                    );
                }
                let status = attempt.status;
                for result in attempt.into_results() {
                    results.add_result(status, result);
                }
            }
        }

        let status = results.best_status();
        let mut candidates = results.into_best_results();
        if let Some(cap) = self.config.max_candidates {
            candidates.truncate(cap);
        }

        debug!(
            %status,
            candidates = candidates.len(),
            verbs = verbs.len(),
            "parse complete"
        );

        ParseOutcome {
            status,
            candidates,
            unparsed: String::new(),
        }
    }

    /// Finds every verb the input can start with.
    ///
    /// Each source contributes its longest alias; a source may contribute
    /// several verbs when they share that alias.
    fn match_verbs<'a>(ctx: &MatchContext<'a>, access: Access) -> Vec<VerbCandidate<'a>> {
        let tokens: &'a [Token] = ctx.tokens();
        let ignore = |w: &str| ctx.is_ignored(w);
        let mut verbs = Vec::new();

        for lexicon in ctx.scope().lexicons() {
            if let Some(span) = find_longest_local_alias(&lexicon.verbs, tokens, 0, ignore) {
                for local in lexicon.verbs.lookup(&span.alias) {
                    verbs.push(VerbCandidate {
                        alias: span.alias.clone(),
                        range: span.range.clone(),
                        verb_type: VerbType::Local,
                        info: &local.info,
                        owner: Some(local.owner),
                    });
                }
            }
        }

        let mut tables = vec![(VerbTable::Global, VerbType::Global)];
        if access.builder_allowed() {
            tables.push((VerbTable::Builder, VerbType::Builder));
        }
        if access.edit_mode_allowed() {
            tables.push((VerbTable::EditMode, VerbType::EditMode));
        }

        let vocabulary = ctx.vocabulary();
        for (table, verb_type) in tables {
            let Some(span) = ctx.find_alias(|alias| vocabulary.has_verb_alias(table, alias), 0)
            else {
                continue;
            };
            for info in vocabulary.verbs(table, &span.alias) {
                verbs.push(VerbCandidate {
                    alias: span.alias.clone(),
                    range: span.range.clone(),
                    verb_type,
                    info,
                    owner: None,
                });
            }
        }

        verbs
    }

    /// Classifies input whose head is no verb in scope.
    fn unmatched_verb(ctx: &MatchContext<'_>, input: &str) -> ParseOutcome {
        let vocabulary = ctx.vocabulary();
        let elsewhere = ctx
            .find_alias(|alias| vocabulary.has_verb(alias), 0)
            .is_some();

        if !elsewhere {
            debug!(status = %ParseStatus::InvalidVerb, "no verb matched");
            return ParseOutcome::invalid_verb(input);
        }

        debug!(status = %ParseStatus::UnavailableVerb, "verb is not available here");
        let mut result = ParseResult::new(VerbType::Unavailable);
        result.unparsed = input.to_string();
        ParseOutcome {
            status: ParseStatus::UnavailableVerb,
            candidates: vec![result],
            unparsed: input.to_string(),
        }
    }
}
