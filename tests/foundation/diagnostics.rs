//! Integration tests for Diagnostic and Diagnostics
//!
//! Tests construction, display, index removal, and iteration order.

use labeltrace_foundation::{Diagnostic, DiagnosticCategory, Diagnostics, codes};

fn error(code: u32) -> Diagnostic {
    Diagnostic::new(code, DiagnosticCategory::Error, format!("error {code}"))
}

// =============================================================================
// Diagnostic
// =============================================================================

#[test]
fn unused_label_has_well_known_code() {
    let d = Diagnostic::unused_label();
    assert_eq!(d.code, 1344);
    assert!(d.has_code(codes::UNUSED_LABEL));
    assert!(d.location.is_none());
}

#[test]
fn display_without_location() {
    let d = Diagnostic::new(2304, DiagnosticCategory::Error, "Cannot find name 'x'.");
    assert_eq!(format!("{d}"), "error TS2304: Cannot find name 'x'.");
}

#[test]
fn display_with_location() {
    let d = Diagnostic::unused_label().at(Some("main.ts"), 12, 5);
    assert_eq!(format!("{d}"), "main.ts@12: error TS1344: Unused label.");
    let location = d.location.unwrap();
    assert_eq!(location.length, 5);
}

#[test]
fn category_display() {
    assert_eq!(DiagnosticCategory::Warning.to_string(), "warning");
    assert_eq!(DiagnosticCategory::Suggestion.to_string(), "suggestion");
    assert_eq!(DiagnosticCategory::Message.to_string(), "message");
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn new_collection_is_empty() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    assert_eq!(diagnostics.len(), 0);
    assert!(diagnostics.get(0).is_none());
}

#[test]
fn push_preserves_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(error(3));
    diagnostics.push(error(1));
    diagnostics.push(error(2));
    assert_eq!(diagnostics.codes(), vec![3, 1, 2]);
    assert_eq!(diagnostics.get(1).map(|d| d.code), Some(1));
}

#[test]
fn remove_shifts_later_entries() {
    let mut diagnostics: Diagnostics = (1..=4).map(error).collect();
    let removed = diagnostics.remove(1);
    assert_eq!(removed.code, 2);
    assert_eq!(diagnostics.codes(), vec![1, 3, 4]);
}

#[test]
fn iteration_by_reference_and_value() {
    let diagnostics: Diagnostics = vec![error(1), error(2)].into();
    let by_ref: Vec<u32> = (&diagnostics).into_iter().map(|d| d.code).collect();
    let by_value: Vec<u32> = diagnostics.into_iter().map(|d| d.code).collect();
    assert_eq!(by_ref, by_value);
}
