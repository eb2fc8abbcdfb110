//! Integration tests for the pre-order walker

use std::cell::Cell;

use labeltrace_instrument::{
    Context, NodeAndChildrenVisitor, PassConfig, TransformationContext, visit_node_and_children,
};
use labeltrace_syntax::{Node, NodeCounter, NodeFactory, Program, print_node, walk_node};

const F: NodeFactory = NodeFactory::new();

fn tree() -> Node {
    F.create_source_file(vec![
        F.create_expression_statement(F.create_call_expression(
            F.create_property_access_expression(
                F.create_identifier("console"),
                F.create_identifier("log"),
            ),
            vec![F.create_string_literal("hi")],
        )),
        F.create_if_statement(
            F.create_identifier("ok"),
            F.create_block(vec![F.create_return_statement(None)]),
            None,
        ),
    ])
}

fn upper(node: Node, ctx: &Context<'_>) -> Node {
    match node.as_identifier() {
        Some(text) => ctx.factory.create_identifier(text.to_uppercase()),
        None => node,
    }
}

#[test]
fn visit_count_matches_node_count() {
    let program = Program::default();
    let unit = TransformationContext::new("walk.ts");
    let config = PassConfig::default();
    let ctx = Context::new(&program, &unit, &config);

    let mut counter = NodeCounter::default();
    walk_node(&mut counter, &tree());

    let visits = Cell::new(0usize);
    let out = visit_node_and_children(
        tree(),
        &|node: Node, _ctx: &Context<'_>| {
            visits.set(visits.get() + 1);
            node
        },
        &ctx,
    );
    assert_eq!(out, tree());
    assert_eq!(visits.get(), counter.total());
}

#[test]
fn bound_visitor_rewrites_nested_identifiers() {
    let program = Program::default();
    let unit = TransformationContext::new("walk.ts");
    let config = PassConfig::default();
    let visitor = NodeAndChildrenVisitor::new(upper, Context::new(&program, &unit, &config));

    let out = visitor.visit(tree());
    assert_eq!(
        print_node(&out),
        "CONSOLE.LOG(\"hi\");\nif (OK) {\n    return;\n}"
    );
}
