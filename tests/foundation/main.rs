//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: ObjectId and Error.

mod errors;
mod objects;
