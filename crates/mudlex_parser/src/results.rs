//! Parse results and their ranking.

use std::fmt;

use mudlex_foundation::ObjectId;

use crate::vocabulary::{CommandKind, ItemPosition, PrepositionType};

/// How far a parse got, ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseStatus {
    /// No recognized verb at the start of the input
    InvalidVerb,
    /// The verb exists, but nothing in scope offers it
    UnavailableVerb,
    /// A noun phrase matches nothing anywhere
    InvalidNoun,
    /// A noun phrase names something that is not here
    UnavailableNoun,
    /// At least one usable interpretation
    Valid,
}

impl ParseStatus {
    /// A short message suitable for echoing to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidVerb => "I don't understand that verb.",
            Self::UnavailableVerb => "You can't do that here.",
            Self::InvalidNoun => "I don't see that.",
            Self::UnavailableNoun => "That's not here.",
            Self::Valid => "",
        }
    }
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidVerb => "invalid verb",
            Self::UnavailableVerb => "unavailable verb",
            Self::InvalidNoun => "invalid noun",
            Self::UnavailableNoun => "unavailable noun",
            Self::Valid => "valid",
        };
        f.write_str(name)
    }
}

/// Priority class of the verb behind a result, ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerbType {
    /// Not a verb
    Invalid,
    /// A local verb whose owner is out of reach
    Unavailable,
    /// Built-in verb
    Global,
    /// Verb offered by an object in scope
    Local,
    /// Admin verb
    Builder,
    /// Admin verb usable in edit mode
    EditMode,
}

impl fmt::Display for VerbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => "invalid",
            Self::Unavailable => "unavailable",
            Self::Global => "global",
            Self::Local => "local",
            Self::Builder => "builder",
            Self::EditMode => "edit-mode",
        };
        f.write_str(name)
    }
}

/// One interpretation of the input, handed to the command dispatcher.
///
/// Object fields are only set when the interpretation is valid. Otherwise
/// `unparsed` holds the part of the input that could not be matched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// Priority class of the verb
    pub verb_type: VerbType,
    /// Command to run
    pub command: CommandKind,
    /// Direct object, if the sentence has one
    pub direct: Option<ObjectId>,
    /// Candidates for the indirect object
    pub indirect: Vec<ObjectId>,
    /// Placement of the direct object
    pub position: ItemPosition,
    /// The preposition that introduced the indirect slot
    pub preposition: PrepositionType,
    /// Free text after the verb (a message), or the unmatched remainder
    pub unparsed: String,
    /// Free text after the preposition, for sentences with a text indirect slot
    pub indirect_text: Option<String>,
}

impl ParseResult {
    /// Creates an empty result for a verb type.
    #[must_use]
    pub fn new(verb_type: VerbType) -> Self {
        Self {
            verb_type,
            command: CommandKind::Invalid,
            direct: None,
            indirect: Vec::new(),
            position: ItemPosition::None,
            preposition: PrepositionType::None,
            unparsed: String::new(),
            indirect_text: None,
        }
    }
}

/// Collects candidate results and keeps track of the best status seen.
#[derive(Clone, Debug)]
pub struct ResultContainer {
    best: ParseStatus,
    results: Vec<(ParseStatus, ParseResult)>,
}

impl Default for ResultContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            best: ParseStatus::InvalidVerb,
            results: Vec::new(),
        }
    }

    /// Adds a result and updates the best status so far.
    ///
    /// A result identical to one already stored is dropped.
    pub fn add_result(&mut self, status: ParseStatus, result: ParseResult) {
        if status > self.best {
            self.best = status;
        }
        let duplicate = self
            .results
            .iter()
            .any(|(s, r)| *s == status && *r == result);
        if !duplicate {
            self.results.push((status, result));
        }
    }

    /// The best status added so far, `InvalidVerb` when empty.
    #[must_use]
    pub fn best_status(&self) -> ParseStatus {
        self.best
    }

    /// The results with the best status, narrowed to the highest verb type.
    ///
    /// Remaining ties are all returned, in insertion order.
    #[must_use]
    pub fn best_results(&self) -> Vec<ParseResult> {
        let top_type = self.top_verb_type();
        self.results
            .iter()
            .filter(|(s, r)| *s == self.best && Some(r.verb_type) == top_type)
            .map(|(_, r)| r.clone())
            .collect()
    }

    /// Consuming form of [`best_results`](Self::best_results).
    #[must_use]
    pub fn into_best_results(self) -> Vec<ParseResult> {
        let top_type = self.top_verb_type();
        let best = self.best;
        self.results
            .into_iter()
            .filter(|(s, r)| *s == best && Some(r.verb_type) == top_type)
            .map(|(_, r)| r)
            .collect()
    }

    fn top_verb_type(&self) -> Option<VerbType> {
        self.results
            .iter()
            .filter(|(s, _)| *s == self.best)
            .map(|(_, r)| r.verb_type)
            .max()
    }

    /// Number of stored results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if nothing was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
