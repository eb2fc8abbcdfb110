//! Tree traversal primitives.
//!
//! This module provides:
//! - [`visit_each_child`] - Rebuilds a node with every direct child passed
//!   through a rewriting function. Transforms are built from this.
//! - [`NodeVisitor`] - Read-only pre-order traversal via [`walk_node`]
//!
//! # Example
//!
//! ```
//! use labeltrace_syntax::{Node, NodeFactory, visit_each_child};
//!
//! let f = NodeFactory::new();
//! let call = f.create_call_expression(f.create_identifier("log"), vec![f.create_identifier("x")]);
//!
//! let renamed = visit_each_child(call, &mut |child: Node| {
//!     if child.as_identifier() == Some("x") {
//!         f.create_identifier("y")
//!     } else {
//!         child
//!     }
//! });
//! assert_eq!(labeltrace_syntax::print_node(&renamed), "log(y)");
//! ```

use std::collections::BTreeMap;

use crate::ast::{Node, Syntax, SyntaxKind};

// =============================================================================
// Child Rewriting
// =============================================================================

/// Rebuilds `node` with each direct child replaced by `visitor(child)`.
///
/// Children are visited in source order. The node keeps its kind, span, and
/// leading comments; only its children change. Leaves are returned as-is.
pub fn visit_each_child<F>(node: Node, visitor: &mut F) -> Node
where
    F: FnMut(Node) -> Node,
{
    let Node {
        syntax,
        span,
        leading_comments,
    } = node;

    let syntax = match syntax {
        Syntax::SourceFile { statements } => Syntax::SourceFile {
            statements: visit_nodes(statements, visitor),
        },
        Syntax::Block { statements } => Syntax::Block {
            statements: visit_nodes(statements, visitor),
        },
        Syntax::ExpressionStatement { expression } => Syntax::ExpressionStatement {
            expression: visit_boxed(expression, visitor),
        },
        Syntax::LabeledStatement { label, statement } => Syntax::LabeledStatement {
            label: visit_boxed(label, visitor),
            statement: visit_boxed(statement, visitor),
        },
        Syntax::FunctionDeclaration {
            name,
            parameters,
            body,
        } => Syntax::FunctionDeclaration {
            name: visit_optional(name, visitor),
            parameters: visit_nodes(parameters, visitor),
            body: visit_optional(body, visitor),
        },
        Syntax::Parameter { name, initializer } => Syntax::Parameter {
            name: visit_boxed(name, visitor),
            initializer: visit_optional(initializer, visitor),
        },
        Syntax::ObjectBindingPattern { elements } => Syntax::ObjectBindingPattern {
            elements: visit_nodes(elements, visitor),
        },
        Syntax::ArrayBindingPattern { elements } => Syntax::ArrayBindingPattern {
            elements: visit_nodes(elements, visitor),
        },
        Syntax::VariableStatement { kind, declarations } => Syntax::VariableStatement {
            kind,
            declarations: visit_nodes(declarations, visitor),
        },
        Syntax::VariableDeclaration { name, initializer } => Syntax::VariableDeclaration {
            name: visit_boxed(name, visitor),
            initializer: visit_optional(initializer, visitor),
        },
        Syntax::ReturnStatement { expression } => Syntax::ReturnStatement {
            expression: visit_optional(expression, visitor),
        },
        Syntax::IfStatement {
            condition,
            then_statement,
            else_statement,
        } => Syntax::IfStatement {
            condition: visit_boxed(condition, visitor),
            then_statement: visit_boxed(then_statement, visitor),
            else_statement: visit_optional(else_statement, visitor),
        },
        Syntax::WhileStatement { condition, body } => Syntax::WhileStatement {
            condition: visit_boxed(condition, visitor),
            body: visit_boxed(body, visitor),
        },
        Syntax::BreakStatement { label } => Syntax::BreakStatement {
            label: visit_optional(label, visitor),
        },
        Syntax::ContinueStatement { label } => Syntax::ContinueStatement {
            label: visit_optional(label, visitor),
        },
        Syntax::CallExpression { callee, arguments } => Syntax::CallExpression {
            callee: visit_boxed(callee, visitor),
            arguments: visit_nodes(arguments, visitor),
        },
        Syntax::PropertyAccessExpression { expression, name } => {
            Syntax::PropertyAccessExpression {
                expression: visit_boxed(expression, visitor),
                name: visit_boxed(name, visitor),
            }
        }
        Syntax::BinaryExpression {
            left,
            operator,
            right,
        } => Syntax::BinaryExpression {
            left: visit_boxed(left, visitor),
            operator,
            right: visit_boxed(right, visitor),
        },
        Syntax::ObjectLiteralExpression { properties } => Syntax::ObjectLiteralExpression {
            properties: visit_nodes(properties, visitor),
        },
        Syntax::PropertyAssignment { name, initializer } => Syntax::PropertyAssignment {
            name: visit_boxed(name, visitor),
            initializer: visit_boxed(initializer, visitor),
        },
        Syntax::ShorthandPropertyAssignment { name } => Syntax::ShorthandPropertyAssignment {
            name: visit_boxed(name, visitor),
        },
        leaf @ (Syntax::EmptyStatement
        | Syntax::Identifier { .. }
        | Syntax::StringLiteral { .. }
        | Syntax::NumericLiteral { .. }
        | Syntax::BooleanLiteral { .. }
        | Syntax::NullLiteral) => leaf,
    };

    Node {
        syntax,
        span,
        leading_comments,
    }
}

fn visit_boxed<F>(node: Box<Node>, visitor: &mut F) -> Box<Node>
where
    F: FnMut(Node) -> Node,
{
    Box::new(visitor(*node))
}

fn visit_optional<F>(node: Option<Box<Node>>, visitor: &mut F) -> Option<Box<Node>>
where
    F: FnMut(Node) -> Node,
{
    node.map(|n| visit_boxed(n, visitor))
}

fn visit_nodes<F>(nodes: Vec<Node>, visitor: &mut F) -> Vec<Node>
where
    F: FnMut(Node) -> Node,
{
    nodes.into_iter().map(&mut *visitor).collect()
}

// =============================================================================
// Read-Only Visitor
// =============================================================================

/// Trait for read-only tree visitors.
///
/// Use [`walk_node`] to traverse a tree and call visitor methods.
#[allow(unused_variables)]
pub trait NodeVisitor {
    /// Called before the node's children are walked.
    fn enter_node(&mut self, node: &Node) {}

    /// Called after the node's children are walked.
    fn leave_node(&mut self, node: &Node) {}
}

/// Walk a tree in pre-order, calling `enter_node` and `leave_node` around
/// each node's children.
pub fn walk_node<V: NodeVisitor + ?Sized>(visitor: &mut V, node: &Node) {
    visitor.enter_node(node);
    for child in node.children() {
        walk_node(visitor, child);
    }
    visitor.leave_node(node);
}

/// Walk multiple trees in sequence.
pub fn walk_all<V: NodeVisitor + ?Sized>(visitor: &mut V, nodes: &[Node]) {
    for node in nodes {
        walk_node(visitor, node);
    }
}

// =============================================================================
// Utility Visitors
// =============================================================================

/// Counts nodes by kind.
#[derive(Debug, Default)]
pub struct NodeCounter {
    counts: BTreeMap<SyntaxKind, usize>,
}

impl NodeCounter {
    /// Returns how many nodes of `kind` were seen.
    #[must_use]
    pub fn count(&self, kind: SyntaxKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Returns the total number of nodes seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl NodeVisitor for NodeCounter {
    fn enter_node(&mut self, node: &Node) {
        *self.counts.entry(node.kind()).or_insert(0) += 1;
    }
}

/// Collects the names of every statement label in a tree, in order.
#[derive(Debug, Default)]
pub struct LabelCollector {
    /// Label names.
    pub labels: Vec<String>,
}

impl NodeVisitor for LabelCollector {
    fn enter_node(&mut self, node: &Node) {
        if let Syntax::LabeledStatement { label, .. } = &node.syntax {
            if let Some(name) = label.as_identifier() {
                self.labels.push(name.to_string());
            }
        }
    }
}
