//! Labeled-function entry tracing for labeltrace.
//!
//! A function declaration placed under a statement label is rewritten to log
//! a structured "Entering function" record before running its original body.
//! The label itself is consumed, and the host's "unused label" diagnostics
//! are dropped at activation.
//!
//! This crate provides:
//! - [`InstrumentPlugin`] - Activation and per-unit transformers
//! - [`visit_node_and_children`] - Generic pre-order rewriting walk
//! - [`default_visit_node`] - The labeled-function rule
//! - [`remove_unused_label_diagnostics`] - Diagnostic suppression
//! - [`PassConfig`] - Pass configuration
//!
//! # Example
//!
//! ```
//! use labeltrace_foundation::Diagnostics;
//! use labeltrace_instrument::{InstrumentPlugin, PassConfig, TransformationContext};
//! use labeltrace_syntax::{NodeFactory, Program, print_node};
//!
//! let f = NodeFactory::new();
//! let tree = f.create_labeled_statement(
//!     "outer",
//!     f.create_function_declaration(Some("ping"), vec![], Some(f.create_block(vec![]))),
//! );
//!
//! let program = Program::default();
//! let activation = InstrumentPlugin::activate(&program, PassConfig::default(), Diagnostics::new());
//! let unit = TransformationContext::new("ping.ts");
//! let out = activation.plugin.transformer(&unit).transform(tree);
//!
//! assert!(print_node(&out).contains(r#"functionName: "ping""#));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod context;
pub mod diagnostic_filter;
pub mod plugin;
pub mod rule;
pub mod trace_record;
pub mod walker;

pub use config::PassConfig;
pub use context::{Context, TransformationContext};
pub use diagnostic_filter::{remove_diagnostics_with_code, remove_unused_label_diagnostics};
pub use plugin::{Activation, InstrumentPlugin, SourceFileTransformer};
pub use rule::{
    INSTRUMENT_MARKER, Rewrite, default_visit_node, labeled_function_declaration_visitor,
    labeled_statement_visitor, parameter_names, visit_labeled_function_body,
};
pub use trace_record::{Expr, Field, TraceRecord};
pub use walker::{NodeAndChildrenVisitor, VisitFn, visit_node_and_children};
