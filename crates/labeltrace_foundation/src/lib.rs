//! Error types and compiler diagnostics for labeltrace.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Diagnostic`] - A compiler diagnostic with a numeric code
//! - [`Diagnostics`] - An ordered, index-removable diagnostic collection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, DiagnosticCategory, DiagnosticLocation, Diagnostics, codes};
pub use error::{Error, ErrorContext, ErrorKind, Result};
