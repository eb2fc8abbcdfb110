//! The labeled-function instrumentation rule.
//!
//! Labeling a function declaration opts it into entry tracing:
//!
//! ```text
//! outer: function greet(name) { return name; }
//! ```
//!
//! becomes
//!
//! ```text
//! /*instrument:*/ function greet(name) {
//!     console.log(JSON.stringify({ severity: "TRACE", message: "Entering function", functionName: "greet", arguments: { name } }));
//!     {
//!         return name;
//!     }
//! }
//! ```
//!
//! The label is consumed by the rewrite. The original body is nested
//! unchanged as a block after the log statement, so its scoping is kept.
//!
//! Every other node, including labeled statements that do not hold a
//! function with a body, passes through untouched.

use labeltrace_syntax::{CommentKind, Node, Syntax, SyntaxKind, visit_each_child};
use tracing::debug;

use crate::context::Context;
use crate::trace_record::TraceRecord;

/// Text of the multi-line comment attached to every instrumented function.
pub const INSTRUMENT_MARKER: &str = "instrument:";

/// Result of offering a labeled function declaration to the rule.
#[derive(Clone, Debug, PartialEq)]
pub enum Rewrite {
    /// The function was left as it was.
    Unchanged(Node),
    /// The function now logs on entry.
    Instrumented(Node),
}

/// The per-node visit function of the pass: acts on labeled statements only.
#[must_use]
pub fn default_visit_node(node: Node, ctx: &Context<'_>) -> Node {
    match node.kind() {
        SyntaxKind::LabeledStatement => labeled_statement_visitor(node, ctx),
        _ => node,
    }
}

/// Replaces a labeled function declaration with its instrumented form.
///
/// Any other labeled statement, and any label whose function is left
/// unchanged, is returned as it was.
#[must_use]
pub fn labeled_statement_visitor(node: Node, ctx: &Context<'_>) -> Node {
    let Node {
        syntax,
        span,
        leading_comments,
    } = node;
    let syntax = match syntax {
        Syntax::LabeledStatement { label, statement }
            if statement.kind() == SyntaxKind::FunctionDeclaration =>
        {
            match labeled_function_declaration_visitor(*statement, ctx) {
                Rewrite::Instrumented(function) => return function,
                Rewrite::Unchanged(function) => Syntax::LabeledStatement {
                    label,
                    statement: Box::new(function),
                },
            }
        }
        other => other,
    };
    Node {
        syntax,
        span,
        leading_comments,
    }
}

/// Instruments a function declaration that sat under a label.
///
/// Declarations without a body are returned unchanged, as are functions
/// already carrying [`INSTRUMENT_MARKER`] when
/// [`crate::PassConfig::skip_instrumented`] is set.
#[must_use]
pub fn labeled_function_declaration_visitor(function: Node, ctx: &Context<'_>) -> Rewrite {
    let record = match &function.syntax {
        Syntax::FunctionDeclaration {
            name,
            parameters,
            body: Some(_),
        } => Some(TraceRecord::new(
            name.as_deref()
                .and_then(Node::as_identifier)
                .map(str::to_string),
            parameter_names(parameters),
        )),
        _ => None,
    };
    let Some(record) = record else {
        if function.kind() == SyntaxKind::FunctionDeclaration {
            debug!(
                file = ctx.unit.file_name(),
                "skipping labeled function declaration without a body"
            );
        }
        return Rewrite::Unchanged(function);
    };

    if ctx.config.skip_instrumented && function.has_leading_comment_text(INSTRUMENT_MARKER) {
        debug!(
            file = ctx.unit.file_name(),
            function = record.function_name.as_deref().unwrap_or("<anonymous>"),
            "skipping already instrumented function"
        );
        return Rewrite::Unchanged(function);
    }

    debug!(
        file = ctx.unit.file_name(),
        function = record.function_name.as_deref().unwrap_or("<anonymous>"),
        arguments = record.arguments.len(),
        "instrumenting labeled function"
    );

    let function =
        function.with_synthetic_leading_comment(CommentKind::MultiLine, INSTRUMENT_MARKER);
    Rewrite::Instrumented(visit_each_child(function, &mut |child: Node| {
        visit_labeled_function_body(child, ctx, &record)
    }))
}

/// Identifier nodes of the parameters bound to a plain name.
///
/// Destructured parameters have no single name to log and are left out.
#[must_use]
pub fn parameter_names(parameters: &[Node]) -> Vec<Node> {
    parameters
        .iter()
        .filter_map(|parameter| match &parameter.syntax {
            Syntax::Parameter { name, .. } if name.kind() == SyntaxKind::Identifier => {
                Some((**name).clone())
            }
            _ => None,
        })
        .collect()
}

/// Wraps the function body, passing the name and parameters through untouched.
///
/// The new body is the log statement followed by the original body block.
#[must_use]
pub fn visit_labeled_function_body(node: Node, ctx: &Context<'_>, record: &TraceRecord) -> Node {
    match node.kind() {
        SyntaxKind::Block => ctx
            .factory
            .create_block(vec![record.to_statement(ctx.factory), node]),
        _ => node,
    }
}
