//! Whole-program view handed to a pass at activation time.

use crate::ast::{Node, Syntax};

/// One compilation unit: a file name and its parsed tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceUnit {
    /// Name the host knows this unit by.
    pub file_name: String,
    /// Root node; a [`Syntax::SourceFile`] for parsed input.
    pub root: Node,
}

impl SourceUnit {
    /// Creates a compilation unit.
    #[must_use]
    pub fn new(file_name: impl Into<String>, root: Node) -> Self {
        Self {
            file_name: file_name.into(),
            root,
        }
    }

    /// Top-level statements of this unit, or an empty slice if the root is
    /// not a source file.
    #[must_use]
    pub fn statements(&self) -> &[Node] {
        match &self.root.syntax {
            Syntax::SourceFile { statements } => statements,
            _ => &[],
        }
    }
}

/// Every compilation unit of a build, in the order the host supplied them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    /// Compilation units.
    pub units: Vec<SourceUnit>,
}

impl Program {
    /// Creates a program from its units.
    #[must_use]
    pub fn new(units: Vec<SourceUnit>) -> Self {
        Self { units }
    }

    /// Looks up a unit by file name.
    #[must_use]
    pub fn unit(&self, file_name: &str) -> Option<&SourceUnit> {
        self.units.iter().find(|u| u.file_name == file_name)
    }

    /// Returns the file names of all units, in order.
    #[must_use]
    pub fn file_names(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.file_name.as_str()).collect()
    }
}
