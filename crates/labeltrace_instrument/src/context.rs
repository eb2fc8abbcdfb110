//! Services threaded through every traversal step.

use labeltrace_syntax::{NodeFactory, Program};

use crate::config::PassConfig;

/// Per-unit compilation context supplied by the host for each file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformationContext {
    file_name: String,
}

impl TransformationContext {
    /// Creates the context for the unit named `file_name`.
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Name of the unit being transformed.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Everything a visit function may consult: the whole program, the active
/// unit, the pass configuration, and the node factory.
///
/// Borrowed for the duration of one unit's transform; never stored globally.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    /// The program the pass was activated for.
    pub program: &'a Program,
    /// The unit being transformed.
    pub unit: &'a TransformationContext,
    /// Pass configuration.
    pub config: &'a PassConfig,
    /// Constructor for synthesized nodes.
    pub factory: NodeFactory,
}

impl<'a> Context<'a> {
    /// Bundles the services for one unit.
    #[must_use]
    pub fn new(
        program: &'a Program,
        unit: &'a TransformationContext,
        config: &'a PassConfig,
    ) -> Self {
        Self {
            program,
            unit,
            config,
            factory: NodeFactory::new(),
        }
    }
}
