//! Built-in vocabulary and grammar descriptors.
//!
//! The [`Vocabulary`] is the read-only context threaded through every parse:
//! the global, builder and edit-mode verb tables and a world-wide registry of local aliases used to tell "not here" apart from
//! "no such thing".

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::tokenizer::alias_key;

/// The game command a verb maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum CommandKind {
    Invalid,
    Help,
    Look,
    Listen,
    Take,
    Put,
    Drop,
    Inventory,
    More,
    Equipment,
    Equip,
    Unequip,
    Transfer,
    Speak,
    Shout,
    Whisper,
    Quit,
    Go,
    Move,
    Stats,
    Quests,
    Skills,
    Attack,
    Talk,
    Shop,
    Buy,
    Sell,
    Search,
    UseSkill,
    Read,
    Break,
    Climb,
    Turn,
    Push,
    Pull,
    Eat,
    Drink,
    EditMode,
    Warp,
    Copy,
    Create,
    EditAttribute,
    EditWizard,
    Save,
    Load,
    Delete,
}

impl CommandKind {
    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Help => "help",
            Self::Look => "look",
            Self::Listen => "listen",
            Self::Take => "take",
            Self::Put => "put",
            Self::Drop => "drop",
            Self::Inventory => "inventory",
            Self::More => "more",
            Self::Equipment => "equipment",
            Self::Equip => "equip",
            Self::Unequip => "unequip",
            Self::Transfer => "transfer",
            Self::Speak => "speak",
            Self::Shout => "shout",
            Self::Whisper => "whisper",
            Self::Quit => "quit",
            Self::Go => "go",
            Self::Move => "move",
            Self::Stats => "stats",
            Self::Quests => "quests",
            Self::Skills => "skills",
            Self::Attack => "attack",
            Self::Talk => "talk",
            Self::Shop => "shop",
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Search => "search",
            Self::UseSkill => "use-skill",
            Self::Read => "read",
            Self::Break => "break",
            Self::Climb => "climb",
            Self::Turn => "turn",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Eat => "eat",
            Self::Drink => "drink",
            Self::EditMode => "edit-mode",
            Self::Warp => "warp",
            Self::Copy => "copy",
            Self::Create => "create",
            Self::EditAttribute => "edit-attribute",
            Self::EditWizard => "edit-wizard",
            Self::Save => "save",
            Self::Load => "load",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an item should end up relative to the indirect object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemPosition {
    /// No placement given
    #[default]
    None,
    /// Inside a container
    In,
    /// On top of something
    On,
    /// Underneath something
    Under,
}

/// The meaning of a recognized preposition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum PrepositionType {
    #[default]
    None,
    In,
    On,
    Under,
    To,
    With,
    From,
    At,
    About,
    Of,
    Out,
    Around,
}

impl PrepositionType {
    /// Converts to an item-placement qualifier.
    ///
    /// Only the spatial prepositions carry a placement.
    #[must_use]
    pub const fn position(self) -> ItemPosition {
        match self {
            Self::In => ItemPosition::In,
            Self::On => ItemPosition::On,
            Self::Under => ItemPosition::Under,
            _ => ItemPosition::None,
        }
    }
}

/// Whether a verb accepts an object slot, and of what kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Support {
    /// The slot must be absent
    No,
    /// The slot may hold an object
    Optional,
    /// The slot must hold an object
    Required,
    /// The slot holds free text that is not resolved
    Text,
}

impl Support {
    /// True for `Optional` and `Required`.
    #[must_use]
    pub const fn takes_object(self) -> bool {
        matches!(self, Self::Optional | Self::Required)
    }
}

/// The grammar rules for one verb.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grammar {
    /// Direct object slot
    pub direct: Support,
    /// Indirect object slot
    pub indirect: Support,
    /// Recognized prepositions, keyed by normalized phrase
    prepositions: BTreeMap<String, PrepositionType>,
}

impl Grammar {
    /// Creates a grammar with the given slots and no prepositions.
    #[must_use]
    pub fn new(direct: Support, indirect: Support) -> Self {
        Self {
            direct,
            indirect,
            prepositions: BTreeMap::new(),
        }
    }

    /// A verb that takes nothing ("inventory").
    #[must_use]
    pub fn bare() -> Self {
        Self::new(Support::No, Support::No)
    }

    /// A verb followed by free text ("say hello").
    #[must_use]
    pub fn text() -> Self {
        Self::new(Support::Text, Support::No)
    }

    /// Registers a preposition phrase.
    #[must_use]
    pub fn with_preposition(mut self, phrase: &str, kind: PrepositionType) -> Self {
        self.prepositions.insert(alias_key(phrase), kind);
        self
    }

    /// Registers several phrases with the same meaning.
    #[must_use]
    pub fn with_prepositions(mut self, phrases: &[&str], kind: PrepositionType) -> Self {
        for phrase in phrases {
            self.prepositions.insert(alias_key(phrase), kind);
        }
        self
    }

    /// Looks up a normalized preposition phrase.
    #[must_use]
    pub fn preposition(&self, phrase: &str) -> Option<PrepositionType> {
        self.prepositions.get(phrase).copied()
    }

    /// Returns true if the phrase is a preposition for this verb.
    #[must_use]
    pub fn has_preposition(&self, phrase: &str) -> bool {
        self.prepositions.contains_key(phrase)
    }

    /// Iterates the recognized preposition phrases.
    pub fn prepositions(&self) -> impl Iterator<Item = (&str, PrepositionType)> {
        self.prepositions.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Describes a verb: the command it triggers and the grammar it accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbInfo {
    /// Command to run
    pub command: CommandKind,
    /// Accepted sentence shape
    pub grammar: Grammar,
}

impl VerbInfo {
    /// Creates a verb descriptor.
    #[must_use]
    pub fn new(command: CommandKind, grammar: Grammar) -> Self {
        Self { command, grammar }
    }
}

/// Which built-in verb table a verb belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerbTable {
    /// Available to every player
    Global,
    /// Admin-only
    Builder,
    /// Admin-only, and only while in edit mode
    EditMode,
}

/// Runtime storage for the built-in vocabulary.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vocabulary {
    global_verbs: HashMap<String, Vec<VerbInfo>>,
    builder_verbs: HashMap<String, Vec<VerbInfo>>,
    edit_mode_verbs: HashMap<String, Vec<VerbInfo>>,
    /// Noun alias -> number of objects anywhere in the world using it
    world_nouns: HashMap<String, usize>,
    /// Local verb alias -> number of objects anywhere in the world using it
    world_verbs: HashMap<String, usize>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    /// Creates a vocabulary with no verbs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            global_verbs: HashMap::new(),
            builder_verbs: HashMap::new(),
            edit_mode_verbs: HashMap::new(),
            world_nouns: HashMap::new(),
            world_verbs: HashMap::new(),
        }
    }

    fn table(&self, table: VerbTable) -> &HashMap<String, Vec<VerbInfo>> {
        match table {
            VerbTable::Global => &self.global_verbs,
            VerbTable::Builder => &self.builder_verbs,
            VerbTable::EditMode => &self.edit_mode_verbs,
        }
    }

    fn table_mut(&mut self, table: VerbTable) -> &mut HashMap<String, Vec<VerbInfo>> {
        match table {
            VerbTable::Global => &mut self.global_verbs,
            VerbTable::Builder => &mut self.builder_verbs,
            VerbTable::EditMode => &mut self.edit_mode_verbs,
        }
    }

    /// Adds a built-in verb alias to a table.
    ///
    /// Several verbs may share an alias; all of them are tried.
    pub fn add_verb(&mut self, table: VerbTable, alias: &str, info: VerbInfo) {
        let entries = self.table_mut(table).entry(alias_key(alias)).or_default();
        if !entries.contains(&info) {
            entries.push(info);
        }
    }

    /// Adds several aliases for the same verb.
    pub fn add_verb_aliases(&mut self, table: VerbTable, aliases: &[&str], info: &VerbInfo) {
        for alias in aliases {
            self.add_verb(table, alias, info.clone());
        }
    }

    /// Returns the verbs registered under an alias key.
    #[must_use]
    pub fn verbs(&self, table: VerbTable, alias: &str) -> &[VerbInfo] {
        self.table(table)
            .get(alias)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if a table has the alias key.
    #[must_use]
    pub fn has_verb_alias(&self, table: VerbTable, alias: &str) -> bool {
        self.table(table).contains_key(alias)
    }

    /// Iterates the aliases of a table.
    pub fn verb_aliases(&self, table: VerbTable) -> impl Iterator<Item = &str> {
        self.table(table).keys().map(String::as_str)
    }

    /// Records that some object in the world answers to a noun alias.
    pub fn register_noun(&mut self, alias: &str) {
        *self.world_nouns.entry(alias_key(alias)).or_insert(0) += 1;
    }

    /// Drops one registration of a noun alias.
    ///
    /// Returns false if the alias was not registered.
    pub fn unregister_noun(&mut self, alias: &str) -> bool {
        Self::release(&mut self.world_nouns, &alias_key(alias))
    }

    /// Returns true if any object in the world answers to the alias key.
    #[must_use]
    pub fn has_noun(&self, alias: &str) -> bool {
        self.world_nouns.contains_key(alias)
    }

    /// Records that some object in the world has a local verb alias.
    pub fn register_verb(&mut self, alias: &str) {
        *self.world_verbs.entry(alias_key(alias)).or_insert(0) += 1;
    }

    /// Drops one registration of a local verb alias.
    ///
    /// Returns false if the alias was not registered.
    pub fn unregister_verb(&mut self, alias: &str) -> bool {
        Self::release(&mut self.world_verbs, &alias_key(alias))
    }

    /// Returns true if any object in the world has the local verb alias key.
    #[must_use]
    pub fn has_verb(&self, alias: &str) -> bool {
        self.world_verbs.contains_key(alias)
    }

    fn release(counts: &mut HashMap<String, usize>, alias: &str) -> bool {
        let Some(count) = counts.get_mut(alias) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            counts.remove(alias);
        }
        true
    }
}
