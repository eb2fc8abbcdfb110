//! Pass activation and per-unit transformation.
//!
//! The host activates the pass once per program with its configuration and
//! the current diagnostics. Activation strips the "unused label" diagnostics
//! and hands back a [`InstrumentPlugin`], which then produces a
//! [`SourceFileTransformer`] for each unit the host emits.

use labeltrace_foundation::Diagnostics;
use labeltrace_syntax::{Node, NodeFactory, Program, SourceUnit};
use tracing::{debug, debug_span};

use crate::config::PassConfig;
use crate::context::{Context, TransformationContext};
use crate::diagnostic_filter::remove_unused_label_diagnostics;
use crate::rule::default_visit_node;
use crate::walker::NodeAndChildrenVisitor;

/// The activated instrumentation pass for one program.
#[derive(Clone, Debug)]
pub struct InstrumentPlugin<'p> {
    program: &'p Program,
    config: PassConfig,
    factory: NodeFactory,
}

/// Result of [`InstrumentPlugin::activate`].
#[derive(Clone, Debug)]
pub struct Activation<'p> {
    /// The pass, ready to transform units.
    pub plugin: InstrumentPlugin<'p>,
    /// The host's diagnostics with every "unused label" entry removed.
    pub diagnostics: Diagnostics,
}

impl<'p> InstrumentPlugin<'p> {
    /// Activates the pass for `program`.
    ///
    /// The returned diagnostics are `diagnostics` minus every
    /// [`labeltrace_foundation::codes::UNUSED_LABEL`] entry, in their
    /// original order.
    #[must_use]
    pub fn activate(
        program: &'p Program,
        config: PassConfig,
        diagnostics: Diagnostics,
    ) -> Activation<'p> {
        debug!(
            units = program.units.len(),
            diagnostics = diagnostics.len(),
            skip_instrumented = config.skip_instrumented,
            "activating instrumentation pass"
        );
        Activation {
            plugin: Self {
                program,
                config,
                factory: NodeFactory::new(),
            },
            diagnostics: remove_unused_label_diagnostics(diagnostics),
        }
    }

    /// The configuration the pass was activated with.
    #[must_use]
    pub fn config(&self) -> &PassConfig {
        &self.config
    }

    /// The program the pass was activated for.
    #[must_use]
    pub fn program(&self) -> &'p Program {
        self.program
    }

    /// A transformer for the unit described by `unit`.
    #[must_use]
    pub fn transformer<'a>(&'a self, unit: &'a TransformationContext) -> SourceFileTransformer<'a> {
        let mut ctx = Context::new(self.program, unit, &self.config);
        ctx.factory = self.factory;
        SourceFileTransformer {
            visitor: NodeAndChildrenVisitor::new(default_visit_node, ctx),
        }
    }

    /// Transforms every unit of the program, returning the rewritten program.
    #[must_use]
    pub fn transform_program(&self) -> Program {
        let units = self
            .program
            .units
            .iter()
            .map(|unit| {
                let context = TransformationContext::new(unit.file_name.clone());
                let root = self.transformer(&context).transform(unit.root.clone());
                SourceUnit::new(unit.file_name.clone(), root)
            })
            .collect();
        Program::new(units)
    }
}

/// Rewrites one unit's tree.
#[derive(Clone, Copy)]
pub struct SourceFileTransformer<'a> {
    visitor: NodeAndChildrenVisitor<'a>,
}

impl SourceFileTransformer<'_> {
    /// Name of the unit this transformer was created for.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.visitor.context().unit.file_name()
    }

    /// Rewrites `root`, instrumenting every labeled function below it.
    #[must_use]
    pub fn transform(&self, root: Node) -> Node {
        let _span = debug_span!("transform", file = self.file_name()).entered();
        self.visitor.visit(root)
    }
}
