//! Syntax tree, node factory, child rewriting, and printer for labeltrace.
//!
//! This crate provides:
//! - [`Node`] / [`Syntax`] - The tree the instrumentation pass rewrites
//! - [`NodeFactory`] - Construction of synthesized nodes
//! - [`visit_each_child`] - The child-rewriting primitive transforms build on
//! - [`print_node`] - Emission back to JavaScript source
//! - [`Program`] - The set of compilation units of a build

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod factory;
pub mod printer;
pub mod program;
pub mod span;
pub mod visitor;

pub use ast::{
    BinaryOperator, CommentKind, Node, Syntax, SyntaxKind, SyntheticComment, VariableKind,
};
pub use factory::NodeFactory;
pub use printer::{PrinterConfig, print_all, print_node, print_with_config};
pub use program::{Program, SourceUnit};
pub use span::Span;
pub use visitor::{LabelCollector, NodeCounter, NodeVisitor, visit_each_child, walk_all, walk_node};
