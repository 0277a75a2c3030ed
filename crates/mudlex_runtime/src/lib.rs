//! REPL, CLI, and snapshot serialization for mudlex.
//!
//! This crate provides:
//! - [`Repl`] - Interactive loop that prints how each line parses
//! - [`Session`] - The loaded world, its parser and the player's privileges
//! - [`WorldSnapshot`] - The lexical view of a world, with a demo tavern
//! - [`serialize`] - `MessagePack` snapshot files
//! - [`init_logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod logging;
pub mod repl;
pub mod serialize;
pub mod session;
pub mod world;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::{LOG_ENV, init_logging};
pub use repl::Repl;
pub use session::Session;
pub use world::{Location, WorldSnapshot};
