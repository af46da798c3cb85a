use marmoset::{
    ast::{Expression, LiteralValue, Program, Statement},
    error::ParseError,
    interpreter::token::TokenKind,
    parse, tokenize,
};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(tokenize(source));
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:?}");
    program
}

fn parse_errors(source: &str) -> Vec<ParseError> {
    let (_, errors) = parse(tokenize(source));
    assert!(!errors.is_empty(), "expected parse errors for {source:?}");
    errors
}

fn single_expression(source: &str) -> Expression {
    let program = parse_ok(source);
    assert_eq!(program.statements.len(), 1);
    match program.statements.into_iter().next() {
        Some(Statement::Expression { expr, .. }) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 <= 4 != 3 >= 4", "((5 <= 4) != (3 >= 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true != false", "(true != false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])", "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
                 ("x = y = 1 + 2", "(x = (y = (1 + 2)))"),
                 ("f(x)(y)", "f(x)(y)")];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source: {source}");
    }
}

#[test]
fn let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");
    let names: Vec<_> = program.statements
                               .iter()
                               .map(|statement| match statement {
                                   Statement::Let { name, .. } => name.name.clone(),
                                   other => panic!("expected let, got {other:?}"),
                               })
                               .collect();

    assert_eq!(names, ["x", "y", "foobar"]);
    assert_eq!(program.to_string(), "let x = 5; let y = true; let foobar = y");
}

#[test]
fn let_names_function_literals() {
    let program = parse_ok("let add = fn(a, b) { a + b };");
    match &program.statements[0] {
        Statement::Let { value: Expression::Function { name, parameters, .. },
                         .. } => {
            assert_eq!(name.as_deref(), Some("add"));
            assert_eq!(parameters.len(), 2);
        },
        other => panic!("expected a function binding, got {other:?}"),
    }
}

#[test]
fn return_statements() {
    let program = parse_ok("return 5; return; return add(1, 2);");

    assert!(matches!(&program.statements[0], Statement::Return { value: Some(_), .. }));
    assert!(matches!(&program.statements[1], Statement::Return { value: None, .. }));
    assert_eq!(program.to_string(), "return 5; return; return add(1, 2)");

    let program = parse_ok("fn() { return }");
    assert_eq!(program.to_string(), "fn() { return }");
}

#[test]
fn literals() {
    let cases = [("5", LiteralValue::Integer(5)),
                 ("2.5", LiteralValue::Float(2.5)),
                 ("true", LiteralValue::Boolean(true)),
                 (r#""hello world""#, LiteralValue::from("hello world"))];

    for (source, expected) in cases {
        match single_expression(source) {
            Expression::Literal { value, .. } => assert_eq!(value, expected),
            other => panic!("expected a literal, got {other:?}"),
        }
    }
}

#[test]
fn if_and_while_expressions() {
    assert_eq!(parse_ok("if (x < y) { x }").to_string(), "if ((x < y)) { x }");
    assert_eq!(parse_ok("if (x < y) { x } else { y }").to_string(),
               "if ((x < y)) { x } else { y }");
    assert_eq!(parse_ok("while (i < 3) { i = i + 1 }").to_string(),
               "while ((i < 3)) { (i = (i + 1)) }");
}

#[test]
fn function_and_macro_literals() {
    assert_eq!(parse_ok("fn() {}").to_string(), "fn() {  }");
    assert_eq!(parse_ok("fn(x, y) { x + y; }").to_string(), "fn(x, y) { (x + y) }");
    assert_eq!(parse_ok("macro(x, y) { x + y; }").to_string(), "macro(x, y) { (x + y) }");
    assert_eq!(parse_ok("fn(x, y) { x + y; }(2, 3)").to_string(), "fn(x, y) { (x + y) }(2, 3)");
}

#[test]
fn collection_literals() {
    assert_eq!(parse_ok("[1, 2 * 2, 3 + 3]").to_string(), "[1, (2 * 2), (3 + 3)]");
    assert_eq!(parse_ok("[]").to_string(), "[]");
    assert_eq!(parse_ok("{}").to_string(), "{}");
    assert_eq!(parse_ok(r#"{"one": 0 + 1, true: 2, 3: 15 / 5}"#).to_string(),
               r#"{"one": (0 + 1), true: 2, 3: (15 / 5)}"#);
}

#[test]
fn hash_pairs_keep_source_order() {
    match single_expression(r#"{"b": 1, "a": 2}"#) {
        Expression::Hash { pairs, .. } => {
            let keys: Vec<_> = pairs.iter().map(|(key, _)| key.to_string()).collect();
            assert_eq!(keys, [r#""b""#, r#""a""#]);
        },
        other => panic!("expected a hash literal, got {other:?}"),
    }
}

#[test]
fn errors_are_collected() {
    let errors = parse_errors("let x 5; let = 10; let 838383;");
    let messages: Vec<_> = errors.iter().map(ParseError::message).collect();

    assert_eq!(messages,
               ["expected next token to be =, got INT instead",
                "expected next token to be IDENT, got = instead",
                "expected next token to be IDENT, got INT instead"]);
}

#[test]
fn errors_carry_lines() {
    let errors = parse_errors("let a = 1;\nlet b = 2;\nlet = 3;");
    assert_eq!(errors[0].line(), 3);
    assert_eq!(errors[0].to_string(),
               "Error on line 3: expected next token to be IDENT, got = instead");
}

#[test]
fn specific_errors() {
    assert_eq!(parse_errors("let x = );")[0],
               ParseError::NoPrefixParse { token: TokenKind::RParen,
                                           line:  1, });
    assert_eq!(parse_errors("99999999999999999999")[0].message(),
               "could not parse 99999999999999999999 as integer");
    assert_eq!(parse_errors("if (x) x")[0],
               ParseError::UnexpectedToken { expected: TokenKind::LBrace,
                                             found:    TokenKind::Identifier,
                                             line:     1, });
    assert_eq!(parse_errors(r#"let s = "open"#)[0], ParseError::UnterminatedString { line: 1 });
    assert_eq!(parse_errors("1 # 2")[0],
               ParseError::IllegalCharacter { literal: "#".to_string(),
                                              line:    1, });
    assert!(matches!(parse_errors("1 + 2 = 3")[0], ParseError::InvalidAssignmentTarget { .. }));
    assert!(matches!(parse_errors("fn(1) { 1 }")[0], ParseError::UnexpectedToken { .. }));
}

#[test]
fn errors_inside_blocks_do_not_hide_later_ones() {
    let errors = parse_errors("fn() { let = 1; }; let y 2;");
    assert_eq!(errors.len(), 2);
}

#[test]
fn a_broken_statement_ending_a_block_keeps_the_rest() {
    let source = "let f = fn(x) { x + };\nlet g = 1;\nlet h = fn(y) { y * };\nlet k = 2;";
    let (program, errors) = parse(tokenize(source));

    assert_eq!(errors,
               [ParseError::NoPrefixParse { token: TokenKind::RBrace,
                                            line:  1, },
                ParseError::NoPrefixParse { token: TokenKind::RBrace,
                                            line:  3, }]);
    assert_eq!(program.to_string(), "let f = fn(x) {  }; let g = 1; let h = fn(y) {  }; let k = 2");
}

#[test]
fn nested_blocks_recover_at_their_own_brace() {
    let (program, errors) = parse(tokenize("fn() { if (a) { b - } ; c }; d"));

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "fn() { if (a) {  }; c }; d");
}

#[test]
fn blocks_end_at_end_of_input() {
    assert_eq!(parse_ok("if (true) { 5").to_string(), "if (true) { 5 }");
    assert_eq!(parse_ok("let f = fn(x) { x * 2").to_string(), "let f = fn(x) { (x * 2) }");
    assert_eq!(parse_ok("while (a) {").to_string(), "while (a) {  }");
}

#[test]
fn trailing_commas_are_rejected() {
    for source in ["[1, 2,]", "{1: 2,}", "f(1,)"] {
        assert!(matches!(parse_errors(source)[0], ParseError::NoPrefixParse { .. }),
                "source: {source}");
    }
}

#[test]
fn smallest_integer_is_a_single_literal() {
    match single_expression("-9223372036854775808") {
        Expression::Literal { value, .. } => assert_eq!(value, LiteralValue::Integer(i64::MIN)),
        other => panic!("expected a literal, got {other:?}"),
    }
    assert_eq!(parse_ok("1 - -9223372036854775808 * 2").to_string(), "(1 - (-9223372036854775808 * 2))");
    assert_eq!(parse_ok("-9223372036854775807").to_string(), "(-9223372036854775807)");
    assert_eq!(parse_errors("-9223372036854775808[0]")[0].message(),
               "could not parse 9223372036854775808 as integer");
}

#[test]
fn rendering_round_trips() {
    let sources = ["let x = 1 + 2 * 3; x",
                   "let f = fn(a, b) { if (a < b) { return a; } else { b } }; f(1, 2)",
                   r#"let s = "tab\tquote\\ line\n"; s"#,
                   r#"{"k": [1, 2.0, true], 2: -3}"#,
                   "let i = 0; while (i < 10) { i = i + 1 }",
                   "let m = macro(a) { quote(unquote(a) + 1) }; m(2)",
                   "!-a[0](b)",
                   "-9223372036854775808 + 1"];

    for source in sources {
        let first = parse_ok(source);
        let rendered = first.to_string();
        let second = parse_ok(&rendered);

        assert_eq!(first, second, "round trip changed the tree of {source:?}");
        assert_eq!(second.to_string(), rendered);
    }
}
