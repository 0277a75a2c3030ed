//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use mudlex_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_io() {
    let err = Error::io("disk on fire");
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert_eq!(err.to_string(), "i/o error: disk on fire");
}

#[test]
fn error_serialization() {
    let err = Error::serialization("unexpected marker");
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    assert!(err.to_string().contains("unexpected marker"));
}

#[test]
fn error_invalid_argument() {
    let err = Error::invalid_argument("--save requires a path");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
    assert!(err.to_string().contains("--save"));
}

#[test]
fn error_editor_and_internal() {
    assert!(matches!(Error::editor("tty").kind, ErrorKind::Editor(_)));
    assert!(matches!(Error::internal("bug").kind, ErrorKind::Internal(_)));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::io("x");
    assert!(err.context.is_none());
}

#[test]
fn error_with_source_and_line() {
    let err = Error::invalid_argument("bad switch")
        .with_context(ErrorContext::new().with_source("commands.txt").with_line(4));
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.to_string(), "at commands.txt:4");
}

#[test]
fn context_line_only() {
    let context = ErrorContext::new().with_line(12);
    assert_eq!(context.to_string(), "at line 12");
    assert_eq!(ErrorContext::new().to_string(), "");
}

#[test]
fn error_is_std_error() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::io("x"));
}
