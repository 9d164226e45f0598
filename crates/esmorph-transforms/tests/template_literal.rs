use super::*;
use crate::visitor::Hook;

fn id(name: &str) -> Node {
    Node::identifier(name)
}

fn plus(left: Node, right: Node) -> Node {
    Node::binary(left, "+", right)
}

/// Flatten a template built from `quasis` and `expressions`.
fn flatten<const N: usize>(quasis: [&str; N], expressions: Vec<Node>) -> Node {
    let Node::TemplateLiteral {
        quasis,
        expressions,
    } = Node::template(quasis, expressions)
    else {
        unreachable!("Node::template builds a TemplateLiteral");
    };
    TemplateLiteralTransformer::transform_node(&quasis, expressions)
}

fn leave_hook() -> Hook {
    TemplateLiteralTransformer
        .visitor(TransformationStage::Converting)
        .and_then(|visitor| visitor.leave_hook())
        .expect("leave hook")
}

#[test]
fn test_no_substitutions_yields_bare_literal() {
    // `abc`
    assert_eq!(flatten(["abc"], vec![]), Node::string("abc"));
}

#[test]
fn test_single_substitution_gets_empty_prefix() {
    // `${x}`
    assert_eq!(flatten(["", ""], vec![id("x")]), plus(Node::string(""), id("x")));
}

#[test]
fn test_text_around_substitution() {
    // `a${b}c`
    assert_eq!(
        flatten(["a", "c"], vec![id("b")]),
        plus(plus(Node::string("a"), id("b")), Node::string("c"))
    );
}

#[test]
fn test_empty_template_yields_empty_string() {
    // ``
    assert_eq!(flatten([""], vec![]), Node::string(""));
}

#[test]
fn test_two_leading_expressions_get_prefix() {
    // `${a}${b}`: without the prefix this would be numeric addition
    assert_eq!(
        flatten(["", "", ""], vec![id("a"), id("b")]),
        plus(plus(Node::string(""), id("a")), id("b"))
    );
}

#[test]
fn test_string_in_second_position_needs_no_prefix() {
    // `${a}-${b}`
    assert_eq!(
        flatten(["", "-", ""], vec![id("a"), id("b")]),
        plus(plus(id("a"), Node::string("-")), id("b"))
    );
}

#[test]
fn test_expression_then_trailing_text() {
    // `${a}px`
    assert_eq!(
        flatten(["", "px"], vec![id("a")]),
        plus(id("a"), Node::string("px"))
    );
}

#[test]
fn test_fold_is_left_associative() {
    // `a${b}c${d}e`
    let result = flatten(["a", "c", "e"], vec![id("b"), id("d")]);

    let expected = plus(
        plus(
            plus(plus(Node::string("a"), id("b")), Node::string("c")),
            id("d"),
        ),
        Node::string("e"),
    );
    assert_eq!(result, expected);
}

#[test]
fn test_cooked_text_is_used() {
    let quasis = vec![TemplateElement {
        value: esmorph_ast::TemplateElementValue {
            raw: "line\\n".to_string(),
            cooked: Some("line\n".to_string()),
        },
        tail: true,
    }];

    assert_eq!(
        TemplateLiteralTransformer::transform_node(&quasis, vec![]),
        Node::string("line\n")
    );
}

#[test]
fn test_empty_string_substitution_is_elided() {
    // `a${''}b`
    assert_eq!(
        flatten(["a", "b"], vec![Node::string("")]),
        plus(Node::string("a"), Node::string("b"))
    );
}

#[test]
fn test_single_non_string_element_still_gets_prefix() {
    // `${''}${n}` elides to [n]; a lone non-string element is still prefixed
    assert_eq!(
        flatten(["", "", ""], vec![Node::string(""), Node::number(1.0)]),
        plus(Node::string(""), Node::number(1.0))
    );
}

#[test]
fn test_numeric_literal_is_not_a_string_operand() {
    // `${1}${2}`
    assert_eq!(
        flatten(["", "", ""], vec![Node::number(1.0), Node::number(2.0)]),
        plus(plus(Node::string(""), Node::number(1.0)), Node::number(2.0))
    );
}

#[test]
fn test_visitor_active_only_while_converting() {
    let transformer = TemplateLiteralTransformer;
    assert_eq!(transformer.name(), TransformerName::TemplateLiteralTransformer);

    for stage in TransformationStage::ALL {
        let visitor = transformer.visitor(stage);
        if stage == TransformationStage::Converting {
            let visitor = visitor.expect("active while converting");
            assert!(visitor.enter_hook().is_none());
            assert!(visitor.leave_hook().is_some());
        } else {
            assert!(visitor.is_none(), "unexpected visitor for {stage}");
        }
    }
}

#[test]
fn test_leave_hook_replaces_template() {
    let leave = leave_hook();
    let mut node = Node::template(["a", "c"], vec![id("b")]);

    let result = leave(&mut node, Some(NodeKind::VariableDeclarator));

    assert_eq!(
        result,
        VisitResult::Replace(plus(plus(Node::string("a"), id("b")), Node::string("c")))
    );
}

#[test]
fn test_leave_hook_skips_root() {
    let leave = leave_hook();
    let mut node = Node::template(["a"], vec![]);
    let before = node.clone();

    assert_eq!(leave(&mut node, None), VisitResult::Keep);
    assert_eq!(node, before);
}

#[test]
fn test_leave_hook_skips_tagged_template_quasi() {
    let leave = leave_hook();
    let mut node = Node::template(["a", "c"], vec![id("b")]);
    let before = node.clone();

    assert_eq!(
        leave(&mut node, Some(NodeKind::TaggedTemplateExpression)),
        VisitResult::Keep
    );
    assert_eq!(node, before);
}

#[test]
fn test_leave_hook_ignores_other_nodes() {
    let leave = leave_hook();
    let mut node = id("x");

    assert_eq!(leave(&mut node, Some(NodeKind::Program)), VisitResult::Keep);
    assert_eq!(node, id("x"));
}
