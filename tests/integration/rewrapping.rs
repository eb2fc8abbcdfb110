//! Running the pass over its own output

use labeltrace::foundation::Diagnostics;
use labeltrace::instrument::{INSTRUMENT_MARKER, InstrumentPlugin, PassConfig, TransformationContext};
use labeltrace::syntax::{Node, NodeFactory, Program, print_node};

const F: NodeFactory = NodeFactory::new();

fn labeled() -> Node {
    F.create_labeled_statement(
        "outer",
        F.create_function_declaration(
            Some("f"),
            vec![F.create_parameter(F.create_identifier("a"))],
            Some(F.create_block(vec![F.create_return_statement(Some(
                F.create_identifier("a"),
            ))])),
        ),
    )
}

fn transform(config: PassConfig, root: Node) -> Node {
    let program = Program::default();
    let activation = InstrumentPlugin::activate(&program, config, Diagnostics::new());
    let unit = TransformationContext::new("again.ts");
    activation.plugin.transformer(&unit).transform(root)
}

#[test]
fn output_without_labels_is_a_fixed_point() {
    let once = transform(PassConfig::default(), labeled());
    let twice = transform(PassConfig::default(), once.clone());
    assert_eq!(once, twice);
}

#[test]
fn relabeled_output_is_wrapped_again() {
    let once = transform(PassConfig::default(), labeled());
    let twice = transform(
        PassConfig::default(),
        F.create_labeled_statement("outer", once),
    );

    assert_eq!(twice.leading_comments.len(), 2);
    assert!(twice.leading_comments.iter().all(|c| c.text == INSTRUMENT_MARKER));
    assert_eq!(
        print_node(&twice),
        concat!(
            "/*instrument:*/ /*instrument:*/ function f(a) {\n",
            "    console.log(JSON.stringify({ severity: \"TRACE\", message: \"Entering function\", functionName: \"f\", arguments: { a } }));\n",
            "    {\n",
            "        console.log(JSON.stringify({ severity: \"TRACE\", message: \"Entering function\", functionName: \"f\", arguments: { a } }));\n",
            "        {\n",
            "            return a;\n",
            "        }\n",
            "    }\n",
            "}",
        )
    );
}

#[test]
fn guard_skips_relabeled_output() {
    let config = PassConfig::default().with_skip_instrumented(true);
    let once = transform(config.clone(), labeled());
    let relabeled = F.create_labeled_statement("outer", once);
    assert_eq!(transform(config, relabeled.clone()), relabeled);
}
