//! World snapshot serialization using `MessagePack`.
//!
//! Snapshots are written with named fields so they stay readable by other
//! `MessagePack` tooling.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use mudlex_foundation::{Error, ErrorContext, Result};

use crate::world::WorldSnapshot;

/// Serializes a snapshot to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(world: &WorldSnapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(world).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid snapshot.
pub fn from_bytes(bytes: &[u8]) -> Result<WorldSnapshot> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

fn file_context(path: &Path) -> ErrorContext {
    ErrorContext::new().with_source(path.display().to_string())
}

/// Saves a snapshot to a file, replacing any existing content.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(world: &WorldSnapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        Error::io(format!("failed to create file: {e}")).with_context(file_context(path))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(world)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!("failed to write file: {e}")).with_context(file_context(path))
    })?;
    writer.flush().map_err(|e| {
        Error::io(format!("failed to flush file: {e}")).with_context(file_context(path))
    })?;

    Ok(())
}

/// Loads a snapshot from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a snapshot.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WorldSnapshot> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::io(format!("failed to open file: {e}")).with_context(file_context(path))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!("failed to read file: {e}")).with_context(file_context(path))
    })?;

    from_bytes(&bytes).map_err(|e| e.with_context(file_context(path)))
}
