//! Emitter for syntax trees.
//!
//! Converts nodes back to JavaScript source text. Synthetic leading comments
//! are emitted in front of the node they are attached to.
//!
//! # Example
//!
//! ```
//! use labeltrace_syntax::{NodeFactory, print_node};
//!
//! let f = NodeFactory::new();
//! let stmt = f.create_return_statement(Some(f.create_identifier("name")));
//! assert_eq!(print_node(&stmt), "return name;");
//! ```

use std::fmt::Write;

use crate::ast::{CommentKind, Node, Syntax};

/// Configuration for printing.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Whether synthetic comments are emitted.
    pub emit_comments: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            emit_comments: true,
        }
    }
}

/// Print a node to a string.
#[must_use]
pub fn print_node(node: &Node) -> String {
    print_with_config(node, PrinterConfig::default())
}

/// Print a node with custom configuration.
#[must_use]
pub fn print_with_config(node: &Node, config: PrinterConfig) -> String {
    let mut printer = Printer::new(config);
    printer.print(node);
    printer.output
}

/// Print multiple statements, one per line.
#[must_use]
pub fn print_all(nodes: &[Node]) -> String {
    nodes.iter().map(print_node).collect::<Vec<_>>().join("\n")
}

/// Printer state.
struct Printer {
    config: PrinterConfig,
    output: String,
    indent_level: usize,
}

impl Printer {
    fn new(config: PrinterConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
        }
    }

    fn print(&mut self, node: &Node) {
        if self.config.emit_comments {
            self.print_comments(node);
        }

        match &node.syntax {
            Syntax::SourceFile { statements } => {
                for (i, stmt) in statements.iter().enumerate() {
                    if i > 0 {
                        self.newline();
                    }
                    self.print(stmt);
                }
            }
            Syntax::Block { statements } => self.print_block(statements),
            Syntax::EmptyStatement => self.output.push(';'),
            Syntax::ExpressionStatement { expression } => {
                self.print(expression);
                self.output.push(';');
            }
            Syntax::LabeledStatement { label, statement } => {
                self.print(label);
                self.output.push_str(": ");
                self.print(statement);
            }
            Syntax::FunctionDeclaration {
                name,
                parameters,
                body,
            } => {
                self.output.push_str("function");
                if let Some(name) = name {
                    self.output.push(' ');
                    self.print(name);
                }
                self.output.push('(');
                self.print_comma_separated(parameters);
                self.output.push(')');
                match body {
                    Some(body) => {
                        self.output.push(' ');
                        self.print(body);
                    }
                    None => self.output.push(';'),
                }
            }
            Syntax::Parameter { name, initializer }
            | Syntax::VariableDeclaration { name, initializer } => {
                self.print(name);
                if let Some(init) = initializer {
                    self.output.push_str(" = ");
                    self.print(init);
                }
            }
            Syntax::ObjectBindingPattern { elements } => self.print_braced(elements),
            Syntax::ArrayBindingPattern { elements } => {
                self.output.push('[');
                self.print_comma_separated(elements);
                self.output.push(']');
            }
            Syntax::VariableStatement { kind, declarations } => {
                self.output.push_str(kind.keyword());
                self.output.push(' ');
                self.print_comma_separated(declarations);
                self.output.push(';');
            }
            Syntax::ReturnStatement { expression } => {
                self.output.push_str("return");
                if let Some(expr) = expression {
                    self.output.push(' ');
                    self.print(expr);
                }
                self.output.push(';');
            }
            Syntax::IfStatement {
                condition,
                then_statement,
                else_statement,
            } => {
                self.output.push_str("if (");
                self.print(condition);
                self.output.push_str(") ");
                self.print(then_statement);
                if let Some(else_statement) = else_statement {
                    self.output.push_str(" else ");
                    self.print(else_statement);
                }
            }
            Syntax::WhileStatement { condition, body } => {
                self.output.push_str("while (");
                self.print(condition);
                self.output.push_str(") ");
                self.print(body);
            }
            Syntax::BreakStatement { label } => self.print_jump("break", label.as_deref()),
            Syntax::ContinueStatement { label } => self.print_jump("continue", label.as_deref()),
            Syntax::Identifier { text } | Syntax::NumericLiteral { text } => {
                self.output.push_str(text);
            }
            Syntax::StringLiteral { text } => self.print_string(text),
            Syntax::BooleanLiteral { value } => {
                self.output.push_str(if *value { "true" } else { "false" });
            }
            Syntax::NullLiteral => self.output.push_str("null"),
            Syntax::CallExpression { callee, arguments } => {
                self.print(callee);
                self.output.push('(');
                self.print_comma_separated(arguments);
                self.output.push(')');
            }
            Syntax::PropertyAccessExpression { expression, name } => {
                self.print(expression);
                self.output.push('.');
                self.print(name);
            }
            Syntax::BinaryExpression {
                left,
                operator,
                right,
            } => {
                self.print(left);
                self.output.push(' ');
                self.output.push_str(operator.token());
                self.output.push(' ');
                self.print(right);
            }
            Syntax::ObjectLiteralExpression { properties } => self.print_braced(properties),
            Syntax::PropertyAssignment { name, initializer } => {
                self.print(name);
                self.output.push_str(": ");
                self.print(initializer);
            }
            Syntax::ShorthandPropertyAssignment { name } => self.print(name),
        }
    }

    fn print_comments(&mut self, node: &Node) {
        for comment in &node.leading_comments {
            match comment.kind {
                CommentKind::MultiLine => {
                    let _ = write!(self.output, "/*{}*/ ", comment.text);
                }
                CommentKind::SingleLine => {
                    let _ = write!(self.output, "//{}", comment.text);
                    self.newline();
                }
            }
        }
    }

    fn print_block(&mut self, statements: &[Node]) {
        if statements.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push('{');
        self.push_indent();
        for stmt in statements {
            self.newline();
            self.print(stmt);
        }
        self.pop_indent();
        self.newline();
        self.output.push('}');
    }

    fn print_braced(&mut self, elements: &[Node]) {
        if elements.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push_str("{ ");
        self.print_comma_separated(elements);
        self.output.push_str(" }");
    }

    fn print_comma_separated(&mut self, nodes: &[Node]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.print(node);
        }
    }

    fn print_jump(&mut self, keyword: &str, label: Option<&Node>) {
        self.output.push_str(keyword);
        if let Some(label) = label {
            self.output.push(' ');
            self.print(label);
        }
        self.output.push(';');
    }

    fn print_string(&mut self, s: &str) {
        self.output.push('"');
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(self.output, "\\u{:04X}", c as u32);
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    /// Starts a new line at the current indentation.
    fn newline(&mut self) {
        self.output.push('\n');
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    fn pop_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }
}
