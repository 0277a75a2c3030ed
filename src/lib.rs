//! mudlex: natural language commands for multi-user text adventures
//!
//! Umbrella crate over the three mudlex layers. Each layer is usable on its
//! own; the game server usually needs only `parser`.
//!
//! ```text
//! runtime     REPL, CLI, world snapshots, log setup
//!   parser    tokens, lexicons, sentence forms, ranking
//!     foundation   ObjectId, Error
//! ```

pub use mudlex_foundation as foundation;
pub use mudlex_parser as parser;
pub use mudlex_runtime as runtime;
