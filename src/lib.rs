//! Labeltrace - Label-driven entry tracing for JavaScript/TypeScript functions
//!
//! This crate re-exports all layers of the labeltrace pass for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: labeltrace_instrument  - Walker, labeled-function rule, diagnostics filter, plugin
//! Layer 1: labeltrace_syntax      - Syntax tree, node factory, child rewriting, printer
//! Layer 0: labeltrace_foundation  - Core types (Error, Diagnostic, Diagnostics)
//! ```

pub use labeltrace_foundation as foundation;
pub use labeltrace_instrument as instrument;
pub use labeltrace_syntax as syntax;
