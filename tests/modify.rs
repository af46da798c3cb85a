use marmoset::{
    ast::{
        BlockStatement, Expression, LiteralValue, Program, Statement,
        modify::{Node, modify},
    },
    error::RewriteError,
    parse, tokenize,
};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(tokenize(source));
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:?}");
    program
}

fn one_to_two(node: Node) -> Result<Node, RewriteError> {
    match node {
        Node::Expression(Expression::Literal { value: LiteralValue::Integer(1),
                                               line, }) => {
            Ok(Node::Expression(Expression::Literal { value: LiteralValue::Integer(2),
                                                      line }))
        },
        other => Ok(other),
    }
}

fn rewrite(source: &str) -> String {
    match modify(Node::Program(parse_ok(source)), &mut one_to_two) {
        Ok(Node::Program(program)) => program.to_string(),
        other => panic!("expected a program, got {other:?}"),
    }
}

#[test]
fn every_child_position_is_rewritten() {
    let cases = [("1", "2"),
                 ("1 + 2", "(2 + 2)"),
                 ("2 + 1", "(2 + 2)"),
                 ("-1", "(-2)"),
                 ("a[1]", "(a[2])"),
                 ("1[1]", "(2[2])"),
                 ("if (1) { 1 } else { 1 }", "if (2) { 2 } else { 2 }"),
                 ("while (1) { 1 }", "while (2) { 2 }"),
                 ("return 1", "return 2"),
                 ("let x = 1", "let x = 2"),
                 ("fn() { 1 }", "fn() { 2 }"),
                 ("[1, 1]", "[2, 2]"),
                 ("{1: 1}", "{2: 2}"),
                 ("f(1, 1)", "f(2, 2)"),
                 ("fn(x) { x }(1)", "fn(x) { x }(2)"),
                 ("x = 1", "(x = 2)"),
                 ("macro(x) { 1 }", "macro(x) { 2 }")];

    for (source, expected) in cases {
        assert_eq!(rewrite(source), expected, "source: {source}");
    }
}

#[test]
fn children_are_visited_before_parents() {
    let mut visited = Vec::new();
    let mut record = |node: Node| -> Result<Node, RewriteError> {
        visited.push(match &node {
                         Node::Program(_) => "program".to_string(),
                         Node::Statement(statement) => format!("statement {statement}"),
                         Node::Block(block) => format!("block {block}"),
                         Node::Expression(expr) => expr.to_string(),
                     });
        Ok(node)
    };

    modify(Node::Program(parse_ok("if (a) { b + c }")), &mut record).expect("rewrite failed");

    assert_eq!(visited,
               ["a",
                "b",
                "c",
                "(b + c)",
                "statement (b + c)",
                "block (b + c)",
                "if (a) { (b + c) }",
                "statement if (a) { (b + c) }",
                "program"]);
}

#[test]
fn a_rewrite_can_replace_whole_subtrees() {
    let mut collapse = |node: Node| -> Result<Node, RewriteError> {
        match node {
            Node::Expression(Expression::Infix { line, .. }) => {
                Ok(Node::Expression(Expression::Literal { value: LiteralValue::Integer(0),
                                                          line }))
            },
            other => Ok(other),
        }
    };

    let rewritten = modify(Node::Program(parse_ok("f(1 + 2 * 3, 4)")), &mut collapse).expect("rewrite failed");
    assert_eq!(rewritten, Node::Program(parse_ok("f(0, 4)")));
}

#[test]
fn a_wrong_category_fails_the_rewrite() {
    let mut to_block = |node: Node| -> Result<Node, RewriteError> {
        match node {
            Node::Expression(Expression::Identifier(ident)) if ident.name == "b" => {
                Ok(Node::Block(BlockStatement { statements: Vec::new(),
                                                line:       ident.line, }))
            },
            other => Ok(other),
        }
    };

    let error = modify(Node::Program(parse_ok("a;\nb + 1")), &mut to_block).expect_err("a block is not an expression");
    assert_eq!(error,
               RewriteError::WrongCategory { expected: "expression",
                                             found:    "block",
                                             line:     2, });
}

#[test]
fn a_statement_cannot_stand_in_for_a_block() {
    let mut to_statement = |node: Node| -> Result<Node, RewriteError> {
        match node {
            Node::Block(block) => Ok(Node::Statement(Statement::Expression { expr: Expression::Array { elements: Vec::new(),
                                                                                                        line:     block.line, },
                                                                              line: block.line, })),
            other => Ok(other),
        }
    };

    let error = modify(Node::Program(parse_ok("fn() { 1 }")), &mut to_statement).expect_err("a statement is not a block");
    assert!(matches!(error, RewriteError::WrongCategory { expected: "block", .. }));
}

#[test]
fn modifier_errors_propagate_unchanged() {
    #[derive(Debug, PartialEq)]
    enum Failure {
        Rewrite(RewriteError),
        Refused(String),
    }

    impl From<RewriteError> for Failure {
        fn from(error: RewriteError) -> Self {
            Self::Rewrite(error)
        }
    }

    let mut refuse = |node: Node| -> Result<Node, Failure> {
        match node {
            Node::Expression(Expression::Identifier(ident)) if ident.name == "forbidden" => {
                Err(Failure::Refused(ident.name))
            },
            other => Ok(other),
        }
    };

    let result = modify(Node::Program(parse_ok("let ok = 1; [ok, forbidden]")), &mut refuse);
    assert_eq!(result, Err(Failure::Refused("forbidden".to_string())));
}
