//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error and the diagnostics collection.

mod diagnostics;
mod errors;
