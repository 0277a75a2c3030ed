//! Integration tests for the mudlex_runtime crate.
//!
//! Tests for the demo world, sessions, snapshots and the REPL driver.

mod session_tests;
