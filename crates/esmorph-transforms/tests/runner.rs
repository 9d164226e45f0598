use super::*;
use esmorph_ast::{OtherField, OtherNode, VariableKind};

fn id(name: &str) -> Node {
    Node::identifier(name)
}

fn dot(object: Node, name: &str) -> Node {
    Node::member(object, id(name), false)
}

fn bracket(object: Node, key: &str) -> Node {
    Node::member(object, Node::string(key), true)
}

fn plus(left: Node, right: Node) -> Node {
    Node::binary(left, "+", right)
}

fn var(name: &str, init: Node) -> Node {
    Node::var_decl(VariableKind::Var, name, Some(init))
}

fn all_transformers() -> TransformersRunner {
    TransformersRunner::new(TransformerName::ALL)
}

#[test]
fn test_converting_stage_end_to_end() {
    // var s = `a${obj.x}c`;
    let mut program = Node::program(vec![var(
        "s",
        Node::template(["a", "c"], vec![dot(id("obj"), "x")]),
    )]);

    let stats = all_transformers().transform(&mut program, TransformationStage::Converting);

    let expected = Node::program(vec![var(
        "s",
        plus(
            plus(Node::string("a"), bracket(id("obj"), "x")),
            Node::string("c"),
        ),
    )]);
    assert_eq!(program, expected);
    assert_eq!(stats.replaced, 1);
    assert!(stats.visited > 0);
}

#[test]
fn test_nested_templates_flatten_inside_out() {
    // `a${`b${c}`}`
    let inner = Node::template(["b", ""], vec![id("c")]);
    let mut program = Node::program(vec![Node::expression_statement(Node::template(
        ["a", ""],
        vec![inner],
    ))]);

    let stats = all_transformers().transform(&mut program, TransformationStage::Converting);

    let expected = Node::program(vec![Node::expression_statement(plus(
        Node::string("a"),
        plus(Node::string("b"), id("c")),
    ))]);
    assert_eq!(program, expected);
    assert_eq!(stats.replaced, 2);
}

#[test]
fn test_chained_member_access_converts_every_level() {
    // a.b.c = 1;
    let mut program = Node::program(vec![Node::expression_statement(Node::assign(
        dot(dot(id("a"), "b"), "c"),
        Node::number(1.0),
    ))]);

    let stats = all_transformers().transform(&mut program, TransformationStage::Converting);

    let expected = Node::program(vec![Node::expression_statement(Node::assign(
        bracket(bracket(id("a"), "b"), "c"),
        Node::number(1.0),
    ))]);
    assert_eq!(program, expected);
    // In-place rewrites are not replacements
    assert_eq!(stats.replaced, 0);
}

#[test]
fn test_tagged_template_quasi_is_preserved() {
    // tag`a${o.x}`;
    let mut program = Node::program(vec![Node::expression_statement(Node::tagged_template(
        id("tag"),
        Node::template(["a", ""], vec![dot(id("o"), "x")]),
    ))]);

    all_transformers().transform(&mut program, TransformationStage::Converting);

    let expected = Node::program(vec![Node::expression_statement(Node::tagged_template(
        id("tag"),
        Node::template(["a", ""], vec![bracket(id("o"), "x")]),
    ))]);
    assert_eq!(program, expected);
}

#[test]
fn test_template_inside_tagged_template_substitution_is_flattened() {
    // tag`${`x${y}`}`;
    let mut program = Node::program(vec![Node::expression_statement(Node::tagged_template(
        id("tag"),
        Node::template(["", ""], vec![Node::template(["x", ""], vec![id("y")])]),
    ))]);

    all_transformers().transform(&mut program, TransformationStage::Converting);

    let expected = Node::program(vec![Node::expression_statement(Node::tagged_template(
        id("tag"),
        Node::template(["", ""], vec![plus(Node::string("x"), id("y"))]),
    ))]);
    assert_eq!(program, expected);
}

#[test]
fn test_root_nodes_are_not_rewritten() {
    let runner = all_transformers();

    let mut template = Node::template(["a", ""], vec![id("b")]);
    let before = template.clone();
    runner.transform(&mut template, TransformationStage::Converting);
    assert_eq!(template, before);

    // Root access stays dotted; its object is a child and is converted
    let mut member = dot(dot(id("a"), "b"), "c");
    runner.transform(&mut member, TransformationStage::Converting);
    assert_eq!(member, dot(bracket(id("a"), "b"), "c"));
}

#[test]
fn test_inactive_stage_leaves_tree_untouched() {
    let mut program = Node::program(vec![Node::expression_statement(dot(id("a"), "b"))]);
    let before = program.clone();

    let stats = all_transformers().transform(&mut program, TransformationStage::Obfuscating);

    assert_eq!(program, before);
    assert_eq!(stats, TransformStats::default());
}

#[test]
fn test_only_enabled_transformers_run() {
    let mut program = Node::program(vec![var(
        "s",
        Node::template(["", ""], vec![dot(id("o"), "x")]),
    )]);

    TransformersRunner::new([TransformerName::TemplateLiteralTransformer])
        .transform(&mut program, TransformationStage::Converting);

    let expected = Node::program(vec![var(
        "s",
        plus(Node::string(""), dot(id("o"), "x")),
    )]);
    assert_eq!(program, expected);
}

#[test]
fn test_run_all_stages_matches_converting_walk() {
    let source = Node::program(vec![var(
        "s",
        Node::template(["", "", ""], vec![dot(id("a"), "b"), id("c")]),
    )]);
    let runner = all_transformers();

    let mut staged = source.clone();
    runner.transform(&mut staged, TransformationStage::Converting);

    let mut all = source;
    runner.run_all_stages(&mut all);

    assert_eq!(all, staged);
}

#[test]
fn test_run_stages_accumulates_stats() {
    let runner = all_transformers();
    let mut program = Node::program(vec![Node::expression_statement(Node::template(
        ["a", ""],
        vec![id("b")],
    ))]);

    let stats = runner.run_stages(
        &mut program,
        &[TransformationStage::Converting, TransformationStage::Converting],
    );

    // The second walk finds no template left
    assert_eq!(stats.replaced, 1);
}

#[test]
fn test_depth_limit_leaves_deep_nodes_untouched() {
    // Program -> ExpressionStatement -> MemberExpression
    let mut program = Node::program(vec![Node::expression_statement(dot(id("a"), "b"))]);
    let before = program.clone();

    let stats = all_transformers()
        .with_max_depth(2)
        .transform(&mut program, TransformationStage::Converting);

    assert_eq!(program, before);
    assert_eq!(stats.visited, 2);
}

#[test]
fn test_visits_array_and_conditional_children() {
    // [o.a, , c ? `x${d}` : e.f]
    let mut program = Node::program(vec![Node::expression_statement(Node::ArrayExpression {
        elements: vec![
            Some(dot(id("o"), "a")),
            None,
            Some(Node::ConditionalExpression {
                test: Box::new(id("c")),
                consequent: Box::new(Node::template(["x", ""], vec![id("d")])),
                alternate: Box::new(dot(id("e"), "f")),
            }),
        ],
    })]);

    all_transformers().transform(&mut program, TransformationStage::Converting);

    let expected = Node::program(vec![Node::expression_statement(Node::ArrayExpression {
        elements: vec![
            Some(bracket(id("o"), "a")),
            None,
            Some(Node::ConditionalExpression {
                test: Box::new(id("c")),
                consequent: Box::new(plus(Node::string("x"), id("d"))),
                alternate: Box::new(bracket(id("e"), "f")),
            }),
        ],
    })]);
    assert_eq!(program, expected);
}

fn mark_enter(node: &mut Node, _parent: Option<NodeKind>) -> VisitResult {
    if let Node::Identifier { name } = node {
        name.push('>');
    }
    VisitResult::Keep
}

fn mark_leave(node: &mut Node, _parent: Option<NodeKind>) -> VisitResult {
    match node {
        Node::Identifier { name } => VisitResult::Replace(id(&format!("{name}<"))),
        _ => VisitResult::Keep,
    }
}

#[test]
fn test_visitor_with_enter_and_leave_hooks() {
    let visitors = [(
        TransformerName::MemberExpressionTransformer,
        Visitor::enter_and_leave(mark_enter, mark_leave),
    )];
    let mut walk = Walk {
        visitors: &visitors,
        max_depth: DEFAULT_MAX_DEPTH,
        depth: 0,
        depth_limit_hit: false,
        stats: TransformStats::default(),
    };
    let mut tree = Node::expression_statement(Node::call(id("f"), vec![id("a")]));

    walk.visit(&mut tree, None);

    // Enter ran before leave on every identifier
    assert_eq!(
        tree,
        Node::expression_statement(Node::call(id("f><"), vec![id("a><")]))
    );
    assert_eq!(
        walk.stats,
        TransformStats {
            visited: 4,
            replaced: 2
        }
    );
}

#[test]
fn test_converts_through_unlisted_kinds() {
    // function g() { return this.x + `${y}`; }
    let this = Node::Other(OtherNode::new("ThisExpression", vec![]));
    let body = Node::BlockStatement {
        body: vec![Node::ReturnStatement {
            argument: Some(Box::new(plus(
                dot(this.clone(), "x"),
                Node::template(["", ""], vec![id("y")]),
            ))),
        }],
    };
    let function = |body: Node| {
        Node::Other(OtherNode::new(
            "FunctionDeclaration",
            vec![
                ("id".to_string(), OtherField::Node(id("g"))),
                ("body".to_string(), OtherField::Node(body)),
            ],
        ))
    };
    let mut program = Node::program(vec![function(body)]);

    all_transformers().transform(&mut program, TransformationStage::Converting);

    let expected_body = Node::BlockStatement {
        body: vec![Node::ReturnStatement {
            argument: Some(Box::new(plus(
                bracket(this, "x"),
                plus(Node::string(""), id("y")),
            ))),
        }],
    };
    assert_eq!(program, Node::program(vec![function(expected_body)]));
}
