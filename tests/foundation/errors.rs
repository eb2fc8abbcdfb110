//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use labeltrace_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_config() {
    let err = Error::invalid_config("unknown value");
    assert!(matches!(err.kind, ErrorKind::InvalidConfig { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("unknown value"));
}

#[test]
fn error_serialization() {
    let err = Error::serialization("cannot encode");
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    assert_eq!(format!("{err}"), "serialization error: cannot encode");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_optional() {
    let err = Error::invalid_config("x");
    assert!(err.context.is_none());
}

#[test]
fn context_display_with_position() {
    let ctx = ErrorContext::new()
        .with_source("tsconfig.json")
        .with_position(3, 14);
    assert_eq!(format!("{ctx}"), "at tsconfig.json:3:14");
}

#[test]
fn context_display_without_source_is_empty() {
    let ctx = ErrorContext::new().with_position(1, 1);
    assert_eq!(format!("{ctx}"), "");
}

#[test]
fn context_attaches_to_error() {
    let err = Error::invalid_config("x").with_context(ErrorContext::new().with_source("a.json"));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.source.as_deref(), Some("a.json"));
    assert_eq!(ctx.line, None);
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::serialization("x"));
}
