//! Compiler diagnostics as seen by the instrumentation pass.
//!
//! The host type-checker produces diagnostics before the pass runs. The pass
//! only reads their codes and removes entries by index. A diagnostic is a
//! code, a category, a message, and an optional location.

use std::fmt;

/// Well-known diagnostic codes.
pub mod codes {
    /// "Unused label." Raised for a label with no matching `break`/`continue`.
    pub const UNUSED_LABEL: u32 = 1344;
}

/// Severity category of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticCategory {
    /// Prevents emit.
    Error,
    /// Reported but does not prevent emit.
    Warning,
    /// Editor-only hint.
    Suggestion,
    /// Informational.
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
            Self::Message => "message",
        };
        f.write_str(name)
    }
}

/// Where in a compilation unit a diagnostic points.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticLocation {
    /// Name of the compilation unit, if known.
    pub file_name: Option<String>,
    /// Byte offset of the start of the range.
    pub start: usize,
    /// Length of the range in bytes.
    pub length: usize,
}

/// A single compiler diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Numeric category code, e.g. [`codes::UNUSED_LABEL`].
    pub code: u32,
    /// Severity category.
    pub category: DiagnosticCategory,
    /// Human-readable message.
    pub message: String,
    /// Location, if the diagnostic is tied to source.
    pub location: Option<DiagnosticLocation>,
}

impl Diagnostic {
    /// Creates a diagnostic with no location.
    #[must_use]
    pub fn new(code: u32, category: DiagnosticCategory, message: impl Into<String>) -> Self {
        Self {
            code,
            category,
            message: message.into(),
            location: None,
        }
    }

    /// Creates the "unused label" diagnostic the type-checker reports.
    #[must_use]
    pub fn unused_label() -> Self {
        Self::new(
            codes::UNUSED_LABEL,
            DiagnosticCategory::Error,
            "Unused label.",
        )
    }

    /// Attaches a location to this diagnostic.
    #[must_use]
    pub fn at(mut self, file_name: Option<&str>, start: usize, length: usize) -> Self {
        self.location = Some(DiagnosticLocation {
            file_name: file_name.map(str::to_string),
            start,
            length,
        });
        self
    }

    /// Returns true if this diagnostic carries the given code.
    #[must_use]
    pub const fn has_code(&self, code: u32) -> bool {
        self.code == code
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            if let Some(file_name) = &location.file_name {
                write!(f, "{file_name}@{}: ", location.start)?;
            }
        }
        write!(f, "{} TS{}: {}", self.category, self.code, self.message)
    }
}

/// An ordered collection of diagnostics that supports removal by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the diagnostic at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Diagnostic> {
        self.entries.get(index)
    }

    /// Removes and returns the diagnostic at `index`, shifting later entries down.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Diagnostic {
        self.entries.remove(index)
    }

    /// Iterates over the diagnostics in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Returns the codes of all diagnostics, in order.
    #[must_use]
    pub fn codes(&self) -> Vec<u32> {
        self.entries.iter().map(|d| d.code).collect()
    }

    /// Borrows the diagnostics as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(entries: Vec<Diagnostic>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
