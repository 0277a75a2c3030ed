//! Scoped alias lexicons.
//!
//! The game layer owns one [`LexicalData`] for the player's inventory and one
//! for the current area. Each holds a verb map and a noun map. Both are
//! persistent maps, so handing the parser a consistent snapshot is a cheap
//! clone rather than a lock.

use im::{OrdMap, Vector};
use mudlex_foundation::ObjectId;

use crate::tokenizer::alias_key;
use crate::vocabulary::VerbInfo;

/// Multi-valued map from an alias key to the things registered under it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AliasMap<T: Clone> {
    entries: OrdMap<String, Vector<T>>,
}

impl<T: Clone> Default for AliasMap<T> {
    fn default() -> Self {
        Self {
            entries: OrdMap::new(),
        }
    }
}

impl<T: Clone + PartialEq> AliasMap<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a value under an alias.
    ///
    /// The alias is stored under its [`alias_key`]. Registering the same value
    /// twice under one alias is a no-op.
    pub fn insert(&mut self, alias: &str, value: T) {
        let key = alias_key(alias);
        if key.is_empty() {
            return;
        }
        let values = self.entries.entry(key).or_insert_with(Vector::new);
        if !values.contains(&value) {
            values.push_back(value);
        }
    }

    /// Removes one value from an alias.
    ///
    /// Returns false if it was not registered.
    pub fn remove(&mut self, alias: &str, value: &T) -> bool {
        let key = alias_key(alias);
        let Some(values) = self.entries.get_mut(&key) else {
            return false;
        };
        let Some(index) = values.index_of(value) else {
            return false;
        };
        values.remove(index);
        if values.is_empty() {
            self.entries.remove(&key);
        }
        true
    }

    /// Returns true if an alias key is present.
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Iterates everything registered under an alias key.
    pub fn lookup<'a>(&'a self, alias: &str) -> impl Iterator<Item = &'a T> + 'a {
        self.entries.get(alias).into_iter().flat_map(Vector::iter)
    }

    /// Iterates the registered aliases in sorted order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no alias is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A verb alias contributed by a specific object.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalVerb {
    /// The object that provides the verb
    pub owner: ObjectId,
    /// The command and grammar it accepts
    pub info: VerbInfo,
}

/// Verb-alias to object mapping.
pub type VerbMap = AliasMap<LocalVerb>;

/// Noun-alias to object mapping.
pub type NounMap = AliasMap<ObjectId>;

/// The verb and noun aliases of one scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexicalData {
    /// Local verb aliases
    pub verbs: VerbMap,
    /// Noun aliases
    pub nouns: NounMap,
}

impl LexicalData {
    /// Creates empty lexical data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a noun alias for an object.
    pub fn add_noun(&mut self, alias: &str, owner: ObjectId) {
        self.nouns.insert(alias, owner);
    }

    /// Registers a local verb alias for an object.
    pub fn add_verb(&mut self, alias: &str, owner: ObjectId, info: VerbInfo) {
        self.verbs.insert(alias, LocalVerb { owner, info });
    }

    /// Removes a noun alias from an object.
    pub fn remove_noun(&mut self, alias: &str, owner: ObjectId) -> bool {
        self.nouns.remove(alias, &owner)
    }

    /// Removes every verb registered by `owner` under an alias.
    pub fn remove_verb(&mut self, alias: &str, owner: ObjectId) -> bool {
        let key = alias_key(alias);
        let owned: Vec<LocalVerb> = self
            .verbs
            .lookup(&key)
            .filter(|v| v.owner == owner)
            .cloned()
            .collect();
        let mut removed = false;
        for verb in &owned {
            removed |= self.verbs.remove(&key, verb);
        }
        removed
    }
}

/// The two lexicons visible to one parse call.
#[derive(Clone, Copy, Debug)]
pub struct Scope<'a> {
    /// Objects in the player's inventory
    pub player: &'a LexicalData,
    /// Objects in the current area
    pub area: &'a LexicalData,
}

impl<'a> Scope<'a> {
    /// Creates a scope from the player and area lexicons.
    #[must_use]
    pub fn new(player: &'a LexicalData, area: &'a LexicalData) -> Self {
        Self { player, area }
    }

    /// Player scope first, then area.
    #[must_use]
    pub fn lexicons(&self) -> [&'a LexicalData; 2] {
        [self.player, self.area]
    }
}
