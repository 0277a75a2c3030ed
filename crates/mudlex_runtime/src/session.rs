//! Session state for the REPL.
//!
//! The session holds the loaded world snapshot, a parser built over its
//! vocabulary, and the privileges the commands are parsed with.

use std::fmt::Write as _;
use std::path::Path;

use mudlex_foundation::{ObjectId, Result};
use mudlex_parser::{
    Access, ItemPosition, ParseOutcome, ParseResult, ParserConfig, PrepositionType, TextParser,
    VerbTable,
};
use tracing::info;

use crate::serialize;
use crate::world::WorldSnapshot;

/// Session state for an interactive parsing session.
pub struct Session {
    /// The current world snapshot.
    world: WorldSnapshot,

    /// Parser over the world's vocabulary.
    parser: TextParser,

    /// Privileges used for every parse.
    access: Access,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session over the demo world.
    #[must_use]
    pub fn new() -> Self {
        Self::with_world(WorldSnapshot::demo())
    }

    /// Creates a session over the given world.
    #[must_use]
    pub fn with_world(world: WorldSnapshot) -> Self {
        let parser = TextParser::new(world.vocabulary.clone());
        Self {
            world,
            parser,
            access: Access::default(),
        }
    }

    /// Replaces the parser configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.parser = self.parser.with_config(config);
        self
    }

    /// Returns a reference to the world.
    #[must_use]
    pub const fn world(&self) -> &WorldSnapshot {
        &self.world
    }

    /// Replaces the world and rebuilds the parser over its vocabulary.
    pub fn set_world(&mut self, world: WorldSnapshot) {
        let config = self.parser.config().clone();
        self.parser = TextParser::new(world.vocabulary.clone()).with_config(config);
        self.world = world;
    }

    /// The privileges commands are parsed with.
    #[must_use]
    pub const fn access(&self) -> Access {
        self.access
    }

    /// Grants or revokes admin privileges.
    pub fn set_admin(&mut self, is_admin: bool) {
        self.access.is_admin = is_admin;
    }

    /// Enters or leaves edit mode.
    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.access.edit_mode = edit_mode;
    }

    /// Parses one line against the current world.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseOutcome {
        self.parser.parse(input, self.world.scope(), self.access)
    }

    /// Saves the world snapshot to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        serialize::save_to_file(&self.world, path)?;
        info!(path = %path.display(), "saved world snapshot");
        Ok(())
    }

    /// Loads a world snapshot from a file, replacing the current world.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded. The current
    /// world is kept in that case.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let world = serialize::load_from_file(path)?;
        info!(
            path = %path.display(),
            objects = world.object_count(),
            "loaded world snapshot"
        );
        self.set_world(world);
        Ok(())
    }

    /// Renders an outcome for display.
    #[must_use]
    pub fn describe(&self, outcome: &ParseOutcome) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", outcome.status);
        if !outcome.is_valid() {
            let _ = write!(out, ": {}", outcome.status.message());
        }
        let shown = outcome.unparsed.trim();
        if outcome.candidates.is_empty() && !shown.is_empty() {
            let _ = write!(out, " [{shown}]");
        }
        for (index, candidate) in outcome.candidates.iter().enumerate() {
            let _ = write!(out, "\n  {}. {}", index + 1, self.describe_result(candidate));
        }
        out
    }

    fn describe_result(&self, result: &ParseResult) -> String {
        let mut out = format!("{} ({})", result.command, result.verb_type);
        if let Some(direct) = result.direct {
            let _ = write!(out, " direct={}", self.object_label(direct));
        }
        if !result.indirect.is_empty() {
            let labels: Vec<String> = result
                .indirect
                .iter()
                .map(|id| self.object_label(*id))
                .collect();
            let _ = write!(out, " indirect=[{}]", labels.join(", "));
        }
        if result.preposition != PrepositionType::None {
            let _ = write!(out, " prep={:?}", result.preposition);
        }
        if result.position != ItemPosition::None {
            let _ = write!(out, " position={:?}", result.position);
        }
        if !result.unparsed.is_empty() {
            let _ = write!(out, " text={:?}", result.unparsed);
        }
        if let Some(text) = &result.indirect_text {
            let _ = write!(out, " indirect_text={text:?}");
        }
        out
    }

    fn object_label(&self, id: ObjectId) -> String {
        match self.world.name_of(id) {
            Some(name) => format!("{id} {name}"),
            None => id.to_string(),
        }
    }

    /// Every alias the player could type right now.
    #[must_use]
    pub fn visible_aliases(&self) -> Vec<String> {
        self.world.visible_aliases()
    }

    /// Aliases offered by the line editor's completer.
    ///
    /// Verb aliases are included only for the tables the current privileges
    /// unlock.
    #[must_use]
    pub fn completion_words(&self) -> Vec<String> {
        let vocabulary = &self.world.vocabulary;
        let mut words = self.visible_aliases();
        words.extend(vocabulary.verb_aliases(VerbTable::Global).map(ToString::to_string));
        if self.access.builder_allowed() {
            words.extend(vocabulary.verb_aliases(VerbTable::Builder).map(ToString::to_string));
        }
        if self.access.edit_mode_allowed() {
            words.extend(vocabulary.verb_aliases(VerbTable::EditMode).map(ToString::to_string));
        }
        words.sort();
        words.dedup();
        words
    }
}
