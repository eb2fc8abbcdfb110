//! Syntax tree for the JavaScript/TypeScript subset the pass operates on.
//!
//! A [`Node`] pairs a [`Syntax`] payload with its source [`Span`] and any
//! synthetic leading comments a transform attached to it. Nodes are treated
//! as immutable values: transforms consume a node and return a new one.

use crate::span::Span;

/// How a synthetic comment is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `/* text */`
    MultiLine,
    /// `// text`
    SingleLine,
}

/// A comment attached by a transform rather than read from source.
///
/// Synthetic comments never affect runtime behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticComment {
    /// Rendering style.
    pub kind: CommentKind,
    /// Comment body without delimiters.
    pub text: String,
}

/// Declaration keyword of a variable statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// `var`
    Var,
    /// `let`
    Let,
    /// `const`
    Const,
}

impl VariableKind {
    /// The keyword as written in source.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `===`
    StrictEquals,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `=`
    Assign,
}

impl BinaryOperator {
    /// The operator token as written in source.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::StrictEquals => "===",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Assign => "=",
        }
    }
}

/// Kind-specific payload of a node.
#[derive(Clone, Debug, PartialEq)]
pub enum Syntax {
    /// Root of a compilation unit.
    SourceFile {
        /// Top-level statements.
        statements: Vec<Node>,
    },
    /// `{ ... }`
    Block {
        /// Statements in order.
        statements: Vec<Node>,
    },
    /// `;`
    EmptyStatement,
    /// `expr;`
    ExpressionStatement {
        /// The evaluated expression.
        expression: Box<Node>,
    },
    /// `label: statement`
    LabeledStatement {
        /// The label identifier.
        label: Box<Node>,
        /// The labeled statement.
        statement: Box<Node>,
    },
    /// `function name(params) { body }`, or a signature when `body` is `None`.
    FunctionDeclaration {
        /// Function name; absent for `export default function () {}`.
        name: Option<Box<Node>>,
        /// Parameters in order.
        parameters: Vec<Node>,
        /// Body block; absent for overloads and ambient declarations.
        body: Option<Box<Node>>,
    },
    /// A function parameter.
    Parameter {
        /// An identifier or a binding pattern.
        name: Box<Node>,
        /// Default value.
        initializer: Option<Box<Node>>,
    },
    /// `{ a, b }` in binding position.
    ObjectBindingPattern {
        /// Bound names.
        elements: Vec<Node>,
    },
    /// `[a, b]` in binding position.
    ArrayBindingPattern {
        /// Bound names.
        elements: Vec<Node>,
    },
    /// `const a = 1, b;`
    VariableStatement {
        /// Declaration keyword.
        kind: VariableKind,
        /// Declarations in order.
        declarations: Vec<Node>,
    },
    /// One declarator of a variable statement.
    VariableDeclaration {
        /// An identifier or a binding pattern.
        name: Box<Node>,
        /// Initial value.
        initializer: Option<Box<Node>>,
    },
    /// `return expr;`
    ReturnStatement {
        /// Returned value.
        expression: Option<Box<Node>>,
    },
    /// `if (cond) a else b`
    IfStatement {
        /// Condition expression.
        condition: Box<Node>,
        /// Taken when the condition holds.
        then_statement: Box<Node>,
        /// Taken otherwise.
        else_statement: Option<Box<Node>>,
    },
    /// `while (cond) body`
    WhileStatement {
        /// Loop condition.
        condition: Box<Node>,
        /// Loop body.
        body: Box<Node>,
    },
    /// `break label;`
    BreakStatement {
        /// Target label.
        label: Option<Box<Node>>,
    },
    /// `continue label;`
    ContinueStatement {
        /// Target label.
        label: Option<Box<Node>>,
    },
    /// A simple name.
    Identifier {
        /// The name.
        text: String,
    },
    /// `"text"`
    StringLiteral {
        /// Unescaped contents.
        text: String,
    },
    /// `42`, kept as written.
    NumericLiteral {
        /// Source text of the literal.
        text: String,
    },
    /// `true` or `false`
    BooleanLiteral {
        /// The value.
        value: bool,
    },
    /// `null`
    NullLiteral,
    /// `callee(args)`
    CallExpression {
        /// The called expression.
        callee: Box<Node>,
        /// Arguments in order.
        arguments: Vec<Node>,
    },
    /// `expression.name`
    PropertyAccessExpression {
        /// The object expression.
        expression: Box<Node>,
        /// The accessed property identifier.
        name: Box<Node>,
    },
    /// `left op right`
    BinaryExpression {
        /// Left operand.
        left: Box<Node>,
        /// Operator.
        operator: BinaryOperator,
        /// Right operand.
        right: Box<Node>,
    },
    /// `{ a: 1, b }`
    ObjectLiteralExpression {
        /// Property assignments in order.
        properties: Vec<Node>,
    },
    /// `name: initializer`
    PropertyAssignment {
        /// Property name identifier.
        name: Box<Node>,
        /// Property value.
        initializer: Box<Node>,
    },
    /// `name` inside an object literal, short for `name: name`.
    ShorthandPropertyAssignment {
        /// The identifier providing both key and value.
        name: Box<Node>,
    },
}

/// Fieldless discriminant of [`Syntax`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum SyntaxKind {
    SourceFile,
    Block,
    EmptyStatement,
    ExpressionStatement,
    LabeledStatement,
    FunctionDeclaration,
    Parameter,
    ObjectBindingPattern,
    ArrayBindingPattern,
    VariableStatement,
    VariableDeclaration,
    ReturnStatement,
    IfStatement,
    WhileStatement,
    BreakStatement,
    ContinueStatement,
    Identifier,
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
    NullLiteral,
    CallExpression,
    PropertyAccessExpression,
    BinaryExpression,
    ObjectLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
}

impl SyntaxKind {
    /// Returns true for kinds that may appear in statement position.
    #[must_use]
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            Self::Block
                | Self::EmptyStatement
                | Self::ExpressionStatement
                | Self::LabeledStatement
                | Self::FunctionDeclaration
                | Self::VariableStatement
                | Self::ReturnStatement
                | Self::IfStatement
                | Self::WhileStatement
                | Self::BreakStatement
                | Self::ContinueStatement
        )
    }

    /// Returns true for kinds that may appear in expression position.
    #[must_use]
    pub const fn is_expression(self) -> bool {
        matches!(
            self,
            Self::Identifier
                | Self::StringLiteral
                | Self::NumericLiteral
                | Self::BooleanLiteral
                | Self::NullLiteral
                | Self::CallExpression
                | Self::PropertyAccessExpression
                | Self::BinaryExpression
                | Self::ObjectLiteralExpression
        )
    }
}

/// A syntax tree node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Kind-specific payload.
    pub syntax: Syntax,
    /// Source location.
    pub span: Span,
    /// Comments attached by transforms, printed before the node.
    pub leading_comments: Vec<SyntheticComment>,
}

impl Node {
    /// Creates a node from parsed source.
    #[must_use]
    pub fn new(syntax: Syntax, span: Span) -> Self {
        Self {
            syntax,
            span,
            leading_comments: Vec::new(),
        }
    }

    /// Creates a node with no source location.
    #[must_use]
    pub fn synthetic(syntax: Syntax) -> Self {
        Self::new(syntax, Span::synthetic())
    }

    /// Returns the discriminant of this node.
    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        match &self.syntax {
            Syntax::SourceFile { .. } => SyntaxKind::SourceFile,
            Syntax::Block { .. } => SyntaxKind::Block,
            Syntax::EmptyStatement => SyntaxKind::EmptyStatement,
            Syntax::ExpressionStatement { .. } => SyntaxKind::ExpressionStatement,
            Syntax::LabeledStatement { .. } => SyntaxKind::LabeledStatement,
            Syntax::FunctionDeclaration { .. } => SyntaxKind::FunctionDeclaration,
            Syntax::Parameter { .. } => SyntaxKind::Parameter,
            Syntax::ObjectBindingPattern { .. } => SyntaxKind::ObjectBindingPattern,
            Syntax::ArrayBindingPattern { .. } => SyntaxKind::ArrayBindingPattern,
            Syntax::VariableStatement { .. } => SyntaxKind::VariableStatement,
            Syntax::VariableDeclaration { .. } => SyntaxKind::VariableDeclaration,
            Syntax::ReturnStatement { .. } => SyntaxKind::ReturnStatement,
            Syntax::IfStatement { .. } => SyntaxKind::IfStatement,
            Syntax::WhileStatement { .. } => SyntaxKind::WhileStatement,
            Syntax::BreakStatement { .. } => SyntaxKind::BreakStatement,
            Syntax::ContinueStatement { .. } => SyntaxKind::ContinueStatement,
            Syntax::Identifier { .. } => SyntaxKind::Identifier,
            Syntax::StringLiteral { .. } => SyntaxKind::StringLiteral,
            Syntax::NumericLiteral { .. } => SyntaxKind::NumericLiteral,
            Syntax::BooleanLiteral { .. } => SyntaxKind::BooleanLiteral,
            Syntax::NullLiteral => SyntaxKind::NullLiteral,
            Syntax::CallExpression { .. } => SyntaxKind::CallExpression,
            Syntax::PropertyAccessExpression { .. } => SyntaxKind::PropertyAccessExpression,
            Syntax::BinaryExpression { .. } => SyntaxKind::BinaryExpression,
            Syntax::ObjectLiteralExpression { .. } => SyntaxKind::ObjectLiteralExpression,
            Syntax::PropertyAssignment { .. } => SyntaxKind::PropertyAssignment,
            Syntax::ShorthandPropertyAssignment { .. } => SyntaxKind::ShorthandPropertyAssignment,
        }
    }

    /// Returns the source span of this node.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the name if this is an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.syntax {
            Syntax::Identifier { text } => Some(text),
            _ => None,
        }
    }

    /// Returns the statements if this is a block.
    #[must_use]
    pub fn as_block(&self) -> Option<&[Node]> {
        match &self.syntax {
            Syntax::Block { statements } => Some(statements),
            _ => None,
        }
    }

    /// Attaches a synthetic comment before this node.
    ///
    /// Comments accumulate: attaching the same text twice yields two comments.
    pub fn add_synthetic_leading_comment(&mut self, kind: CommentKind, text: impl Into<String>) {
        self.leading_comments.push(SyntheticComment {
            kind,
            text: text.into(),
        });
    }

    /// Builder form of [`Node::add_synthetic_leading_comment`].
    #[must_use]
    pub fn with_synthetic_leading_comment(
        mut self,
        kind: CommentKind,
        text: impl Into<String>,
    ) -> Self {
        self.add_synthetic_leading_comment(kind, text);
        self
    }

    /// Returns true if any leading synthetic comment has exactly this text.
    #[must_use]
    pub fn has_leading_comment_text(&self, text: &str) -> bool {
        self.leading_comments.iter().any(|c| c.text == text)
    }

    /// Returns this node's direct children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        match &self.syntax {
            Syntax::SourceFile { statements } | Syntax::Block { statements } => {
                out.extend(statements);
            }
            Syntax::ObjectBindingPattern { elements } | Syntax::ArrayBindingPattern { elements } => {
                out.extend(elements);
            }
            Syntax::ExpressionStatement { expression } => out.push(expression.as_ref()),
            Syntax::LabeledStatement { label, statement } => {
                out.push(label.as_ref());
                out.push(statement.as_ref());
            }
            Syntax::FunctionDeclaration {
                name,
                parameters,
                body,
            } => {
                out.extend(name.as_deref());
                out.extend(parameters);
                out.extend(body.as_deref());
            }
            Syntax::Parameter { name, initializer }
            | Syntax::VariableDeclaration { name, initializer } => {
                out.push(name.as_ref());
                out.extend(initializer.as_deref());
            }
            Syntax::VariableStatement { declarations, .. } => out.extend(declarations),
            Syntax::ReturnStatement { expression } => out.extend(expression.as_deref()),
            Syntax::IfStatement {
                condition,
                then_statement,
                else_statement,
            } => {
                out.push(condition.as_ref());
                out.push(then_statement.as_ref());
                out.extend(else_statement.as_deref());
            }
            Syntax::WhileStatement { condition, body } => {
                out.push(condition.as_ref());
                out.push(body.as_ref());
            }
            Syntax::BreakStatement { label } | Syntax::ContinueStatement { label } => {
                out.extend(label.as_deref());
            }
            Syntax::CallExpression { callee, arguments } => {
                out.push(callee.as_ref());
                out.extend(arguments);
            }
            Syntax::PropertyAccessExpression { expression, name } => {
                out.push(expression.as_ref());
                out.push(name.as_ref());
            }
            Syntax::BinaryExpression { left, right, .. } => {
                out.push(left.as_ref());
                out.push(right.as_ref());
            }
            Syntax::ObjectLiteralExpression { properties } => out.extend(properties),
            Syntax::PropertyAssignment { name, initializer } => {
                out.push(name.as_ref());
                out.push(initializer.as_ref());
            }
            Syntax::ShorthandPropertyAssignment { name } => out.push(name.as_ref()),
            Syntax::EmptyStatement
            | Syntax::Identifier { .. }
            | Syntax::StringLiteral { .. }
            | Syntax::NumericLiteral { .. }
            | Syntax::BooleanLiteral { .. }
            | Syntax::NullLiteral => {}
        }
        out
    }

    /// A human-readable name for this node's kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self.kind() {
            SyntaxKind::SourceFile => "source file",
            SyntaxKind::Block => "block",
            SyntaxKind::EmptyStatement => "empty statement",
            SyntaxKind::ExpressionStatement => "expression statement",
            SyntaxKind::LabeledStatement => "labeled statement",
            SyntaxKind::FunctionDeclaration => "function declaration",
            SyntaxKind::Parameter => "parameter",
            SyntaxKind::ObjectBindingPattern => "object binding pattern",
            SyntaxKind::ArrayBindingPattern => "array binding pattern",
            SyntaxKind::VariableStatement => "variable statement",
            SyntaxKind::VariableDeclaration => "variable declaration",
            SyntaxKind::ReturnStatement => "return statement",
            SyntaxKind::IfStatement => "if statement",
            SyntaxKind::WhileStatement => "while statement",
            SyntaxKind::BreakStatement => "break statement",
            SyntaxKind::ContinueStatement => "continue statement",
            SyntaxKind::Identifier => "identifier",
            SyntaxKind::StringLiteral => "string literal",
            SyntaxKind::NumericLiteral => "numeric literal",
            SyntaxKind::BooleanLiteral => "boolean literal",
            SyntaxKind::NullLiteral => "null literal",
            SyntaxKind::CallExpression => "call expression",
            SyntaxKind::PropertyAccessExpression => "property access expression",
            SyntaxKind::BinaryExpression => "binary expression",
            SyntaxKind::ObjectLiteralExpression => "object literal expression",
            SyntaxKind::PropertyAssignment => "property assignment",
            SyntaxKind::ShorthandPropertyAssignment => "shorthand property assignment",
        }
    }
}
