//! The entry trace statement, described as a shape and then lowered.
//!
//! [`TraceRecord`] says what gets logged. [`Expr`] is a small expression
//! language for the shape of the synthesized code; [`Expr::lower`] is the
//! only place that knows how [`NodeFactory`] spells each construct.
//!
//! The statement produced for `function greet(name)` is:
//!
//! ```text
//! console.log(JSON.stringify({ severity: "TRACE", message: "Entering function", functionName: "greet", arguments: { name } }));
//! ```

use labeltrace_syntax::{Node, NodeFactory};

/// Severity recorded for every entry trace.
pub const SEVERITY: &str = "TRACE";

/// Message recorded for every entry trace.
pub const MESSAGE: &str = "Entering function";

/// Shape of a synthesized expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `"text"`
    Str(String),
    /// `null`
    Null,
    /// A simple name.
    Ident(String),
    /// `object.property`
    Member(Box<Expr>, String),
    /// `callee(args)`
    Call(Box<Expr>, Vec<Expr>),
    /// `{ fields }`
    Object(Vec<Field>),
}

/// One member of an [`Expr::Object`].
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    /// `key: value`
    Keyed(String, Expr),
    /// `name`, reusing an identifier node from the original tree.
    Shorthand(Node),
}

impl Expr {
    /// `object.property`, e.g. `console.log`.
    #[must_use]
    pub fn member(object: &str, property: &str) -> Self {
        Self::Member(Box::new(Self::Ident(object.to_string())), property.to_string())
    }

    /// `self(args)`
    #[must_use]
    pub fn call(self, args: Vec<Expr>) -> Self {
        Self::Call(Box::new(self), args)
    }

    /// A string literal, or `null` when absent.
    #[must_use]
    pub fn str_or_null(text: Option<&str>) -> Self {
        text.map_or(Self::Null, |t| Self::Str(t.to_string()))
    }

    /// Builds the tree for this shape.
    #[must_use]
    pub fn lower(self, f: NodeFactory) -> Node {
        match self {
            Self::Str(text) => f.create_string_literal(text),
            Self::Null => f.create_null_literal(),
            Self::Ident(name) => f.create_identifier(name),
            Self::Member(object, name) => {
                f.create_property_access_expression(object.lower(f), f.create_identifier(name))
            }
            Self::Call(callee, args) => f.create_call_expression(
                callee.lower(f),
                args.into_iter().map(|a| a.lower(f)).collect(),
            ),
            Self::Object(fields) => f.create_object_literal_expression(
                fields.into_iter().map(|field| field.lower(f)).collect(),
            ),
        }
    }
}

impl Field {
    fn lower(self, f: NodeFactory) -> Node {
        match self {
            Self::Keyed(key, value) => {
                f.create_property_assignment(f.create_identifier(key), value.lower(f))
            }
            Self::Shorthand(name) => f.create_shorthand_property_assignment(name),
        }
    }
}

/// What a labeled function logs on entry.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceRecord {
    /// The function's name; `None` for anonymous functions.
    pub function_name: Option<String>,
    /// Identifier nodes of the parameters to capture, in declaration order.
    pub arguments: Vec<Node>,
}

impl TraceRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(function_name: Option<String>, arguments: Vec<Node>) -> Self {
        Self {
            function_name,
            arguments,
        }
    }

    /// The object literal holding the four record fields.
    #[must_use]
    pub fn payload(&self) -> Expr {
        Expr::Object(vec![
            Field::Keyed("severity".into(), Expr::Str(SEVERITY.into())),
            Field::Keyed("message".into(), Expr::Str(MESSAGE.into())),
            Field::Keyed(
                "functionName".into(),
                Expr::str_or_null(self.function_name.as_deref()),
            ),
            Field::Keyed(
                "arguments".into(),
                Expr::Object(self.arguments.iter().cloned().map(Field::Shorthand).collect()),
            ),
        ])
    }

    /// `console.log(JSON.stringify(payload))`
    #[must_use]
    pub fn log_call(&self) -> Expr {
        Expr::member("console", "log")
            .call(vec![Expr::member("JSON", "stringify").call(vec![self.payload()])])
    }

    /// Builds the logging statement as a fresh subtree.
    #[must_use]
    pub fn to_statement(&self, f: NodeFactory) -> Node {
        f.create_expression_statement(self.log_call().lower(f))
    }
}
