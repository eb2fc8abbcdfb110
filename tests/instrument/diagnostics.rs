//! Integration tests for diagnostic suppression

use labeltrace_foundation::{Diagnostic, DiagnosticCategory, Diagnostics, codes};
use labeltrace_instrument::{remove_diagnostics_with_code, remove_unused_label_diagnostics};

fn other(code: u32) -> Diagnostic {
    Diagnostic::new(code, DiagnosticCategory::Error, "other")
}

#[test]
fn scattered_unused_labels_removed() {
    let mut diagnostics = Diagnostics::new();
    for i in 0..10u32 {
        if matches!(i, 2 | 5 | 7) {
            diagnostics.push(Diagnostic::unused_label());
        } else {
            diagnostics.push(other(100 + i));
        }
    }
    let out = remove_unused_label_diagnostics(diagnostics);
    assert_eq!(out.codes(), vec![100, 101, 103, 104, 106, 108, 109]);
}

#[test]
fn unused_label_warnings_removed_regardless_of_category() {
    let diagnostics: Diagnostics = vec![
        Diagnostic::new(codes::UNUSED_LABEL, DiagnosticCategory::Warning, "Unused label."),
        Diagnostic::new(codes::UNUSED_LABEL, DiagnosticCategory::Suggestion, "Unused label."),
    ]
    .into();
    assert!(remove_unused_label_diagnostics(diagnostics).is_empty());
}

#[test]
fn locations_of_survivors_are_kept() {
    let diagnostics: Diagnostics = vec![
        Diagnostic::unused_label().at(Some("a.ts"), 0, 5),
        other(2304).at(Some("a.ts"), 20, 1),
    ]
    .into();
    let out = remove_unused_label_diagnostics(diagnostics);
    let survivor = out.get(0).unwrap();
    assert_eq!(survivor.location.as_ref().map(|l| l.start), Some(20));
}

#[test]
fn filtering_by_arbitrary_code() {
    let diagnostics: Diagnostics = vec![other(1), other(2), other(1)].into();
    assert_eq!(remove_diagnostics_with_code(diagnostics, 2).codes(), vec![1, 1]);
}
