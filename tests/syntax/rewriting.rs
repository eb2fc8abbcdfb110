//! Integration tests for child rewriting and read-only visitors

use labeltrace_syntax::{
    CommentKind, LabelCollector, Node, NodeCounter, NodeFactory, Span, Syntax, SyntaxKind,
    print_node, visit_each_child, walk_all, walk_node,
};

const F: NodeFactory = NodeFactory::new();

fn labeled_tree() -> Node {
    F.create_source_file(vec![
        F.create_labeled_statement(
            "outer",
            F.create_while_statement(
                F.create_boolean_literal(true),
                F.create_block(vec![F.create_labeled_statement(
                    "inner",
                    F.create_break_statement(Some("outer")),
                )]),
            ),
        ),
        F.create_labeled_statement(
            "trace",
            F.create_function_declaration(Some("f"), vec![], Some(F.create_block(vec![]))),
        ),
    ])
}

// =============================================================================
// visit_each_child
// =============================================================================

#[test]
fn visits_only_immediate_children() {
    let tree = labeled_tree();
    let mut seen = Vec::new();
    let out = visit_each_child(tree.clone(), &mut |child: Node| {
        seen.push(child.kind());
        child
    });
    assert_eq!(out, tree);
    assert_eq!(
        seen,
        vec![SyntaxKind::LabeledStatement, SyntaxKind::LabeledStatement]
    );
}

#[test]
fn rewriting_keeps_parent_span_and_comments() {
    let parent = Node::new(
        Syntax::ExpressionStatement {
            expression: Box::new(F.create_identifier("x")),
        },
        Span::new(0, 2, 1, 1),
    )
    .with_synthetic_leading_comment(CommentKind::MultiLine, "keep");

    let out = visit_each_child(parent, &mut |_child: Node| F.create_identifier("y"));
    assert_eq!(out.span(), Span::new(0, 2, 1, 1));
    assert!(out.has_leading_comment_text("keep"));
    assert_eq!(print_node(&out), "/*keep*/ y;");
}

#[test]
fn leaf_is_returned_unchanged() {
    let leaf = F.create_string_literal("s");
    let mut calls = 0;
    let out = visit_each_child(leaf.clone(), &mut |child: Node| {
        calls += 1;
        child
    });
    assert_eq!(out, leaf);
    assert_eq!(calls, 0);
}

// =============================================================================
// Read-only visitors
// =============================================================================

#[test]
fn label_collector_finds_nested_labels_in_order() {
    let mut collector = LabelCollector::default();
    walk_node(&mut collector, &labeled_tree());
    assert_eq!(collector.labels, vec!["outer", "inner", "trace"]);
}

#[test]
fn node_counter_over_several_trees() {
    let mut counter = NodeCounter::default();
    walk_all(
        &mut counter,
        &[F.create_identifier("a"), F.create_identifier("b")],
    );
    assert_eq!(counter.count(SyntaxKind::Identifier), 2);
    assert_eq!(counter.total(), 2);
}
