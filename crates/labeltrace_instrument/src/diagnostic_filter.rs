//! Suppression of the "unused label" diagnostic.
//!
//! A label placed on a function only to opt it into tracing is never the
//! target of a `break` or `continue`, so the type-checker flags it with
//! [`codes::UNUSED_LABEL`]. The pass removes every such entry.

use labeltrace_foundation::{Diagnostics, codes};
use tracing::debug;

/// Removes every diagnostic whose code is `code`, keeping the rest in order.
#[must_use]
pub fn remove_diagnostics_with_code(mut diagnostics: Diagnostics, code: u32) -> Diagnostics {
    let matching: Vec<usize> = diagnostics
        .iter()
        .enumerate()
        .filter(|(_, diagnostic)| diagnostic.has_code(code))
        .map(|(index, _)| index)
        .collect();

    // Highest index first so earlier indices stay valid.
    for &index in matching.iter().rev() {
        diagnostics.remove(index);
    }

    if !matching.is_empty() {
        debug!(
            code,
            removed = matching.len(),
            remaining = diagnostics.len(),
            "removed diagnostics"
        );
    }
    diagnostics
}

/// Removes every "unused label" diagnostic, keeping the rest in order.
#[must_use]
pub fn remove_unused_label_diagnostics(diagnostics: Diagnostics) -> Diagnostics {
    remove_diagnostics_with_code(diagnostics, codes::UNUSED_LABEL)
}
