//! Core identifiers and error types for mudlex.
//!
//! This crate provides:
//! - [`ObjectId`] - Opaque references to game objects owned by the engine
//! - [`Error`] - Rich error types with context for the fallible edges
//!   (snapshot I/O, serialization, CLI arguments)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod object;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use object::ObjectId;
