//! Integration tests for the printer

use labeltrace_syntax::{
    BinaryOperator, CommentKind, NodeFactory, PrinterConfig, print_node, print_with_config,
};

const F: NodeFactory = NodeFactory::new();

#[test]
fn prints_labeled_function() {
    let stmt = F.create_labeled_statement(
        "outer",
        F.create_function_declaration(
            Some("greet"),
            vec![F.create_parameter(F.create_identifier("name"))],
            Some(F.create_block(vec![F.create_return_statement(Some(
                F.create_identifier("name"),
            ))])),
        ),
    );
    assert_eq!(
        print_node(&stmt),
        "outer: function greet(name) {\n    return name;\n}"
    );
}

#[test]
fn prints_empty_object_and_block() {
    assert_eq!(print_node(&F.create_object_literal_expression(vec![])), "{}");
    assert_eq!(print_node(&F.create_block(vec![])), "{}");
}

#[test]
fn prints_mixed_object_members() {
    let object = F.create_object_literal_expression(vec![
        F.create_property_assignment(F.create_identifier("a"), F.create_numeric_literal("1")),
        F.create_shorthand_property_assignment(F.create_identifier("b")),
    ]);
    assert_eq!(print_node(&object), "{ a: 1, b }");
}

#[test]
fn prints_binary_expression() {
    let expr = F.create_binary_expression(
        F.create_identifier("a"),
        BinaryOperator::Add,
        F.create_identifier("b"),
    );
    assert_eq!(print_node(&expr), "a + b");
}

#[test]
fn prints_continue_with_label() {
    assert_eq!(
        print_node(&F.create_continue_statement(Some("outer"))),
        "continue outer;"
    );
    assert_eq!(print_node(&F.create_continue_statement(None)), "continue;");
}

#[test]
fn comment_suppression() {
    let node = F
        .create_identifier("x")
        .with_synthetic_leading_comment(CommentKind::MultiLine, "c");
    let quiet = PrinterConfig {
        emit_comments: false,
        ..PrinterConfig::default()
    };
    assert_eq!(print_node(&node), "/*c*/ x");
    assert_eq!(print_with_config(&node, quiet), "x");
}
