//! Natural language command parser for text adventure games.
//!
//! This crate turns player input like "take sword" or "put the sword in the
//! chest" into ranked command candidates that a game dispatcher can execute.
//!
//! # Architecture
//!
//! ```text
//! "put the sword in the chest"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [put, the, sword, in, the, chest]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VERB            │  → put (global), put (local, owner #12), ...
//! │ RESOLUTION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SENTENCE        │  → V + object + prep + object
//! │ FORMS           │    sword → [#3], in → In, chest → [#9]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESULT          │  → best status, highest verb type, all ties
//! │ RANKING         │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to normalized/original token pairs
//! - [`vocabulary`] - Commands, grammars and the built-in verb tables
//! - [`lexicon`] - Scoped alias maps for the player's inventory and the area
//! - [`resolver`] - Longest-match alias lookup
//! - [`sentence`] - Sentence forms and slot matching
//! - [`results`] - Parse statuses, results and ranking
//! - [`parser`] - Main parser pipeline orchestration
//! - [`config`] - Parser configuration
//! - [`stdlib`] - Standard vocabulary
//!
//! # Example
//!
//! ```
//! use mudlex_foundation::ObjectId;
//! use mudlex_parser::{Access, LexicalData, ParseStatus, Scope, TextParser};
//!
//! let parser = TextParser::standard();
//! let player = LexicalData::new();
//! let mut area = LexicalData::new();
//! area.add_noun("sword", ObjectId::new(3));
//!
//! let outcome = parser.parse("take the sword", Scope::new(&player, &area), Access::default());
//! assert_eq!(outcome.status, ParseStatus::Valid);
//! assert_eq!(outcome.candidates[0].direct, Some(ObjectId::new(3)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod lexicon;
pub mod parser;
pub mod resolver;
pub mod results;
pub mod sentence;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;


// Re-export main types for convenience
pub use config::ParserConfig;
pub use lexicon::{AliasMap, LexicalData, LocalVerb, NounMap, Scope, VerbMap};
pub use parser::{Access, ParseOutcome, TextParser};
pub use results::{ParseResult, ParseStatus, ResultContainer, VerbType};
pub use sentence::SentenceForm;
pub use stdlib::standard_vocabulary;
pub use tokenizer::{Token, Tokenizer};
pub use vocabulary::{
    CommandKind, Grammar, ItemPosition, PrepositionType, Support, VerbInfo, VerbTable, Vocabulary,
};
