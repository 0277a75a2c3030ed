//! Error types for mudlex.
//!
//! Parsing itself never fails; it reports a status instead. These errors
//! cover the edges around it: snapshot files, serialization, the line editor
//! and command-line arguments. Uses `thiserror` for ergonomic definitions.

use std::fmt;

use thiserror::Error;

/// Convenience alias for results carrying a mudlex [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for mudlex operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Encoding or decoding a snapshot failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A command-line or REPL argument was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The interactive line editor failed.
    #[error("editor error: {0}")]
    Editor(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File path or command that was being processed.
    pub source: Option<String>,
    /// Line number in a batch input, 1-indexed.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        } else if let Some(line) = self.line {
            write!(f, "at line {line}")?;
        }
        Ok(())
    }
}
