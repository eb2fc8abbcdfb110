//! Node construction.
//!
//! [`NodeFactory`] is the one place synthesized nodes are created. Every node
//! it returns has a synthetic span and no comments.

use crate::ast::{BinaryOperator, Node, Syntax, VariableKind};

/// Stateless constructor for synthesized nodes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeFactory;

impl NodeFactory {
    /// Creates a factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `{ statements }`
    #[must_use]
    pub fn create_block(self, statements: Vec<Node>) -> Node {
        Node::synthetic(Syntax::Block { statements })
    }

    /// Root of a compilation unit.
    #[must_use]
    pub fn create_source_file(self, statements: Vec<Node>) -> Node {
        Node::synthetic(Syntax::SourceFile { statements })
    }

    /// `expression;`
    #[must_use]
    pub fn create_expression_statement(self, expression: Node) -> Node {
        Node::synthetic(Syntax::ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    /// `;`
    #[must_use]
    pub fn create_empty_statement(self) -> Node {
        Node::synthetic(Syntax::EmptyStatement)
    }

    /// `callee(arguments)`
    #[must_use]
    pub fn create_call_expression(self, callee: Node, arguments: Vec<Node>) -> Node {
        Node::synthetic(Syntax::CallExpression {
            callee: Box::new(callee),
            arguments,
        })
    }

    /// `expression.name`
    #[must_use]
    pub fn create_property_access_expression(self, expression: Node, name: Node) -> Node {
        Node::synthetic(Syntax::PropertyAccessExpression {
            expression: Box::new(expression),
            name: Box::new(name),
        })
    }

    /// `"text"`
    #[must_use]
    pub fn create_string_literal(self, text: impl Into<String>) -> Node {
        Node::synthetic(Syntax::StringLiteral { text: text.into() })
    }

    /// `42`
    #[must_use]
    pub fn create_numeric_literal(self, text: impl Into<String>) -> Node {
        Node::synthetic(Syntax::NumericLiteral { text: text.into() })
    }

    /// `true` / `false`
    #[must_use]
    pub fn create_boolean_literal(self, value: bool) -> Node {
        Node::synthetic(Syntax::BooleanLiteral { value })
    }

    /// `null`
    #[must_use]
    pub fn create_null_literal(self) -> Node {
        Node::synthetic(Syntax::NullLiteral)
    }

    /// A simple name.
    #[must_use]
    pub fn create_identifier(self, text: impl Into<String>) -> Node {
        Node::synthetic(Syntax::Identifier { text: text.into() })
    }

    /// `{ properties }`
    #[must_use]
    pub fn create_object_literal_expression(self, properties: Vec<Node>) -> Node {
        Node::synthetic(Syntax::ObjectLiteralExpression { properties })
    }

    /// `name: initializer`
    #[must_use]
    pub fn create_property_assignment(self, name: Node, initializer: Node) -> Node {
        Node::synthetic(Syntax::PropertyAssignment {
            name: Box::new(name),
            initializer: Box::new(initializer),
        })
    }

    /// `name` as an object literal member, reusing an existing binding.
    #[must_use]
    pub fn create_shorthand_property_assignment(self, name: Node) -> Node {
        Node::synthetic(Syntax::ShorthandPropertyAssignment {
            name: Box::new(name),
        })
    }

    /// `left operator right`
    #[must_use]
    pub fn create_binary_expression(
        self,
        left: Node,
        operator: BinaryOperator,
        right: Node,
    ) -> Node {
        Node::synthetic(Syntax::BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// `label: statement`
    #[must_use]
    pub fn create_labeled_statement(self, label: impl Into<String>, statement: Node) -> Node {
        Node::synthetic(Syntax::LabeledStatement {
            label: Box::new(self.create_identifier(label)),
            statement: Box::new(statement),
        })
    }

    /// `function name(parameters) body`
    #[must_use]
    pub fn create_function_declaration(
        self,
        name: Option<&str>,
        parameters: Vec<Node>,
        body: Option<Node>,
    ) -> Node {
        Node::synthetic(Syntax::FunctionDeclaration {
            name: name.map(|n| Box::new(self.create_identifier(n))),
            parameters,
            body: body.map(Box::new),
        })
    }

    /// A parameter bound to `name`, which is an identifier or a binding pattern.
    #[must_use]
    pub fn create_parameter(self, name: Node) -> Node {
        Node::synthetic(Syntax::Parameter {
            name: Box::new(name),
            initializer: None,
        })
    }

    /// A parameter with a default value.
    #[must_use]
    pub fn create_parameter_with_initializer(self, name: Node, initializer: Node) -> Node {
        Node::synthetic(Syntax::Parameter {
            name: Box::new(name),
            initializer: Some(Box::new(initializer)),
        })
    }

    /// `{ a, b }` in binding position.
    #[must_use]
    pub fn create_object_binding_pattern(self, elements: Vec<Node>) -> Node {
        Node::synthetic(Syntax::ObjectBindingPattern { elements })
    }

    /// `[a, b]` in binding position.
    #[must_use]
    pub fn create_array_binding_pattern(self, elements: Vec<Node>) -> Node {
        Node::synthetic(Syntax::ArrayBindingPattern { elements })
    }

    /// `kind name = initializer;`
    #[must_use]
    pub fn create_variable_statement(
        self,
        kind: VariableKind,
        name: Node,
        initializer: Option<Node>,
    ) -> Node {
        let declaration = Node::synthetic(Syntax::VariableDeclaration {
            name: Box::new(name),
            initializer: initializer.map(Box::new),
        });
        Node::synthetic(Syntax::VariableStatement {
            kind,
            declarations: vec![declaration],
        })
    }

    /// `return expression;`
    #[must_use]
    pub fn create_return_statement(self, expression: Option<Node>) -> Node {
        Node::synthetic(Syntax::ReturnStatement {
            expression: expression.map(Box::new),
        })
    }

    /// `if (condition) then_statement else else_statement`
    #[must_use]
    pub fn create_if_statement(
        self,
        condition: Node,
        then_statement: Node,
        else_statement: Option<Node>,
    ) -> Node {
        Node::synthetic(Syntax::IfStatement {
            condition: Box::new(condition),
            then_statement: Box::new(then_statement),
            else_statement: else_statement.map(Box::new),
        })
    }

    /// `while (condition) body`
    #[must_use]
    pub fn create_while_statement(self, condition: Node, body: Node) -> Node {
        Node::synthetic(Syntax::WhileStatement {
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }

    /// `break label;`
    #[must_use]
    pub fn create_break_statement(self, label: Option<&str>) -> Node {
        Node::synthetic(Syntax::BreakStatement {
            label: label.map(|l| Box::new(self.create_identifier(l))),
        })
    }

    /// `continue label;`
    #[must_use]
    pub fn create_continue_statement(self, label: Option<&str>) -> Node {
        Node::synthetic(Syntax::ContinueStatement {
            label: label.map(|l| Box::new(self.create_identifier(l))),
        })
    }
}
