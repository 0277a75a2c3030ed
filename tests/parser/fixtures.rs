//! Shared lexicons for the parser tests.

use mudlex_foundation::ObjectId;
use mudlex_parser::{LexicalData, Scope};

pub const SWORD: ObjectId = ObjectId::new(1);
pub const CHEST: ObjectId = ObjectId::new(2);
pub const SHORT_SWORD: ObjectId = ObjectId::new(3);
pub const BOB: ObjectId = ObjectId::new(4);
pub const LEVER: ObjectId = ObjectId::new(5);

/// Player and area lexicons for one test.
pub struct Lexicons {
    pub player: LexicalData,
    pub area: LexicalData,
}

impl Lexicons {
    pub fn empty() -> Self {
        Self {
            player: LexicalData::new(),
            area: LexicalData::new(),
        }
    }

    /// Sword and chest in the area, nothing carried.
    pub fn sword_and_chest() -> Self {
        let mut lexicons = Self::empty();
        lexicons.area.add_noun("sword", SWORD);
        lexicons.area.add_noun("chest", CHEST);
        lexicons
    }

    pub fn scope(&self) -> Scope<'_> {
        Scope::new(&self.player, &self.area)
    }
}
