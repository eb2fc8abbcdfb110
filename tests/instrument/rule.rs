//! Integration tests for the labeled-function rule

use labeltrace_instrument::{
    Context, INSTRUMENT_MARKER, PassConfig, Rewrite, TransformationContext, default_visit_node,
    labeled_function_declaration_visitor, labeled_statement_visitor, parameter_names,
};
use labeltrace_syntax::{Node, NodeFactory, Program, SyntaxKind, print_node};

const F: NodeFactory = NodeFactory::new();

fn with_context<R>(config: &PassConfig, run: impl FnOnce(&Context<'_>) -> R) -> R {
    let program = Program::default();
    let unit = TransformationContext::new("rule.ts");
    run(&Context::new(&program, &unit, config))
}

fn function(name: Option<&str>, params: &[&str]) -> Node {
    F.create_function_declaration(
        name,
        params
            .iter()
            .map(|p| F.create_parameter(F.create_identifier(*p)))
            .collect(),
        Some(F.create_block(vec![F.create_return_statement(None)])),
    )
}

#[test]
fn labeled_expression_statement_unchanged() {
    with_context(&PassConfig::default(), |ctx| {
        let stmt = F.create_labeled_statement(
            "here",
            F.create_expression_statement(F.create_identifier("x")),
        );
        assert_eq!(labeled_statement_visitor(stmt.clone(), ctx), stmt);
    });
}

#[test]
fn unlabeled_function_unchanged() {
    with_context(&PassConfig::default(), |ctx| {
        let f = function(Some("f"), &["a"]);
        assert_eq!(default_visit_node(f.clone(), ctx), f);
    });
}

#[test]
fn parameters_with_defaults_are_captured() {
    let params = vec![
        F.create_parameter_with_initializer(F.create_identifier("a"), F.create_numeric_literal("1")),
        F.create_parameter(F.create_array_binding_pattern(vec![F.create_identifier("b")])),
    ];
    let names: Vec<Node> = parameter_names(&params);
    assert_eq!(names, vec![F.create_identifier("a")]);
}

#[test]
fn multiple_arguments_in_order() {
    with_context(&PassConfig::default(), |ctx| {
        let out = default_visit_node(
            F.create_labeled_statement("t", function(Some("add"), &["x", "y", "z"])),
            ctx,
        );
        let text = print_node(&out);
        assert!(text.contains(r#"functionName: "add", arguments: { x, y, z }"#));
        assert!(text.starts_with("/*instrument:*/ function add(x, y, z) {"));
    });
}

#[test]
fn instrumented_function_keeps_its_own_comments() {
    with_context(&PassConfig::default(), |ctx| {
        let f = function(Some("f"), &[])
            .with_synthetic_leading_comment(labeltrace_syntax::CommentKind::MultiLine, "pure");
        let Rewrite::Instrumented(out) = labeled_function_declaration_visitor(f, ctx) else {
            panic!("expected instrumentation");
        };
        assert_eq!(out.leading_comments.len(), 2);
        assert_eq!(out.leading_comments[1].text, INSTRUMENT_MARKER);
    });
}

#[test]
fn non_function_is_unchanged_rewrite() {
    with_context(&PassConfig::default(), |ctx| {
        let ident = F.create_identifier("x");
        assert_eq!(
            labeled_function_declaration_visitor(ident.clone(), ctx),
            Rewrite::Unchanged(ident)
        );
    });
}

#[test]
fn guard_leaves_label_in_place() {
    let config = PassConfig::default().with_skip_instrumented(true);
    with_context(&config, |ctx| {
        let Rewrite::Instrumented(once) =
            labeled_function_declaration_visitor(function(Some("f"), &[]), ctx)
        else {
            panic!("expected instrumentation");
        };
        let relabeled = F.create_labeled_statement("again", once);
        let out = default_visit_node(relabeled.clone(), ctx);
        assert_eq!(out, relabeled);
        assert_eq!(out.kind(), SyntaxKind::LabeledStatement);
    });
}
