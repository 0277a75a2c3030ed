//! World snapshots.
//!
//! A [`WorldSnapshot`] bundles everything one parse needs from the game
//! layer: the built-in vocabulary, the player's inventory lexicon, the area
//! lexicon, and display names for the objects they reference. Snapshots
//! round-trip through `MessagePack` (see [`crate::serialize`]).

use std::collections::BTreeMap;

use mudlex_foundation::ObjectId;
use mudlex_parser::{
    CommandKind, Grammar, LexicalData, PrepositionType, Scope, Support, VerbInfo, Vocabulary,
};
use serde::{Deserialize, Serialize};

/// Where an object sits relative to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// Carried by the player
    Inventory,
    /// Lying in the current area
    Area,
    /// Somewhere else in the world
    Elsewhere,
}

/// The lexical view of a game world handed to the parser.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Built-in verbs, ignore words and the world alias registry
    pub vocabulary: Vocabulary,
    /// Aliases of the objects the player carries
    pub player: LexicalData,
    /// Aliases of the objects in the current area
    pub area: LexicalData,
    /// Display names by object
    names: BTreeMap<ObjectId, String>,
    locations: BTreeMap<ObjectId, Location>,
    next_id: u64,
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldSnapshot {
    /// Creates an empty world over the built-in vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::standard(),
            player: LexicalData::new(),
            area: LexicalData::new(),
            names: BTreeMap::new(),
            locations: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// The two lexicons visible to a parse.
    #[must_use]
    pub fn scope(&self) -> Scope<'_> {
        Scope::new(&self.player, &self.area)
    }

    /// Adds an object and registers its noun aliases.
    ///
    /// Aliases of objects elsewhere only go into the world registry, so the
    /// parser can report them as "not here".
    pub fn add_object(&mut self, name: &str, aliases: &[&str], location: Location) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        self.names.insert(id, name.to_string());
        self.locations.insert(id, location);

        for alias in aliases {
            self.vocabulary.register_noun(alias);
            if let Some(lexicon) = self.lexicon_mut(location) {
                lexicon.add_noun(alias, id);
            }
        }
        id
    }

    /// Gives an object a verb of its own.
    ///
    /// The verb is registered world-wide even when the object is elsewhere.
    pub fn add_local_verb(&mut self, owner: ObjectId, alias: &str, info: VerbInfo) {
        self.vocabulary.register_verb(alias);
        let location = self.location_of(owner).unwrap_or(Location::Elsewhere);
        if let Some(lexicon) = self.lexicon_mut(location) {
            lexicon.add_verb(alias, owner, info);
        }
    }

    fn lexicon_mut(&mut self, location: Location) -> Option<&mut LexicalData> {
        match location {
            Location::Inventory => Some(&mut self.player),
            Location::Area => Some(&mut self.area),
            Location::Elsewhere => None,
        }
    }

    /// Where an object sits.
    #[must_use]
    pub fn location_of(&self, id: ObjectId) -> Option<Location> {
        self.locations.get(&id).copied()
    }

    /// The display name of an object.
    #[must_use]
    pub fn name_of(&self, id: ObjectId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Number of named objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.names.len()
    }

    /// Every alias the player could type right now, sorted and deduplicated.
    #[must_use]
    pub fn visible_aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self
            .scope()
            .lexicons()
            .into_iter()
            .flat_map(|lexicon| lexicon.nouns.aliases().chain(lexicon.verbs.aliases()))
            .map(ToString::to_string)
            .collect();
        aliases.sort();
        aliases.dedup();
        aliases
    }

    /// A small tavern used by the REPL when no snapshot is loaded.
    #[must_use]
    pub fn demo() -> Self {
        let mut world = Self::new();

        let sword = world.add_object(
            "a short sword",
            &["sword", "short sword", "blade"],
            Location::Inventory,
        );
        world.add_object("a brass coin", &["coin", "brass coin"], Location::Inventory);
        world.add_object("a copper coin", &["coin", "copper coin"], Location::Area);
        let chest = world.add_object("an oak chest", &["chest", "oak chest"], Location::Area);
        let bob = world.add_object("Bob the barkeep", &["bob", "barkeep"], Location::Area);
        let lever = world.add_object("a rusty lever", &["lever", "rusty lever"], Location::Area);
        let bell = world.add_object("a bronze bell", &["bell"], Location::Elsewhere);
        world.add_object("a golden key", &["key", "golden key"], Location::Elsewhere);

        world.add_local_verb(
            lever,
            "pull",
            VerbInfo::new(CommandKind::Pull, Grammar::new(Support::Required, Support::No)),
        );
        world.add_local_verb(
            chest,
            "open",
            VerbInfo::new(CommandKind::Search, Grammar::new(Support::Required, Support::No)),
        );
        world.add_local_verb(
            bell,
            "ring",
            VerbInfo::new(CommandKind::Push, Grammar::new(Support::Optional, Support::No)),
        );
        world.add_local_verb(
            bob,
            "tip",
            VerbInfo::new(
                CommandKind::Transfer,
                Grammar::new(Support::Required, Support::Required)
                    .with_preposition("to", PrepositionType::To),
            ),
        );
        world.add_local_verb(
            sword,
            "sharpen",
            VerbInfo::new(CommandKind::UseSkill, Grammar::new(Support::Optional, Support::No)),
        );

        world
    }
}
