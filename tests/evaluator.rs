use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use marmoset::{
    Session,
    error::RuntimeError,
    evaluate,
    interpreter::{
        evaluator::{
            core::Context,
            function::{builtin, core::BuiltinFn},
        },
        value::{core::Object, environment::Environment},
    },
    parse, tokenize,
};

/// A sink whose contents stay readable after it is handed to a session.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output is not UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn eval(source: &str) -> Object {
    let (program, errors) = parse(tokenize(source));
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:?}");
    evaluate(&program, &Environment::new())
}

fn eval_error(source: &str) -> RuntimeError {
    match eval(source) {
        Object::Error(error) => error,
        other => panic!("expected an error from {source:?}, got {other:?}"),
    }
}

#[test]
fn integer_expressions() {
    let cases = [("5", 5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("3 * (3 * 3) + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
                 ("let x = 5; let y = 10; x + y;", 15)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Object::Integer(expected), "source: {source}");
    }
}

#[test]
fn float_expressions() {
    assert_eq!(eval("2.5 * 2"), Object::Float(5.0));
    assert_eq!(eval("1 / 4.0"), Object::Float(0.25));
    assert_eq!(eval("-1.5"), Object::Float(-1.5));
    assert_eq!(eval("10.0 / 4"), Object::Float(2.5));
}

#[test]
fn boolean_expressions() {
    let cases = [("true", true),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("5 < 10.52", true),
                 ("2.0 >= 2", true),
                 ("1 == 1.0", true),
                 ("1 != 1", false),
                 ("true == true", true),
                 ("true != false", true),
                 ("(1 < 2) == true", true),
                 ("\"a\" == \"a\"", true),
                 ("[1, 2] == [1, 2]", true),
                 ("[1, 2] == [1, 2.0]", true),
                 ("[1] == [2]", false),
                 ("{1: 2} == {1: 2}", true),
                 ("1 == true", false),
                 ("\"1\" == 1", false),
                 ("!true", false),
                 ("!!true", true),
                 ("!5", false),
                 ("!0", false),
                 ("!\"\"", false)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Object::Boolean(expected), "source: {source}");
    }
}

#[test]
fn conditionals() {
    assert_eq!(eval("if (true) { 10 }"), Object::Integer(10));
    assert_eq!(eval("if (false) { 10 }"), Object::Null);
    assert_eq!(eval("if (1) { 10 }"), Object::Integer(10));
    assert_eq!(eval("if (1 > 2) { 10 } else { 20 }"), Object::Integer(20));
    assert_eq!(eval("if (if (false) { 1 }) { 10 } else { 20 }"), Object::Integer(20));
}

#[test]
fn return_statements() {
    let cases = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
                 ("let f = fn(x) { return x; x + 10; }; f(10);", 10),
                 ("let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);", 20),
                 ("let f = fn() { while (true) { return 7; } }; f()", 7)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Object::Integer(expected), "source: {source}");
    }
    assert_eq!(eval("return;"), Object::Null);
    assert_eq!(eval("let f = fn() { return; 1 }; f()"), Object::Null);
}

#[test]
fn return_unwinds_through_enclosing_expressions() {
    let cases = [("let x = 1; let s = [1 + if (true) { return 9 }]; 0", 9),
                 ("let f = fn() { [if (true) { return 1 }] }; f()", 1),
                 ("let f = fn() { -if (true) { return 2 } }; f()", 2),
                 ("let f = fn() { len(if (true) { return 3 }) }; f()", 3),
                 (r#"let f = fn() { {"k": if (true) { return 4 }} }; f()"#, 4),
                 ("let f = fn() { {if (true) { return 5 }: 1} }; f()", 5),
                 ("let f = fn() { [1, 2][if (true) { return 6 }] }; f()", 6),
                 ("let x = 0; let f = fn() { x = if (true) { return 7 }; 0 }; f() + x", 7),
                 ("let f = fn() { 10 + if (true) { return 8 } }; f() + 1", 9)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Object::Integer(expected), "source: {source}");
    }
}

#[test]
fn return_in_an_argument_skips_the_call() {
    let output = SharedBuffer::default();
    let mut session = Session::with_output(Box::new(output.clone()));

    let result = session.run("let f = fn() { print(if (true) { return 1 }, 2); 3 }; f()")
                        .expect("run failed");
    assert_eq!(result, Object::Integer(1));
    assert_eq!(output.contents(), "");
}

#[test]
fn let_yields_the_bound_value() {
    assert_eq!(eval("let a = 5;"), Object::Integer(5));
    assert_eq!(eval("let a = 5; let a = a * 2; a"), Object::Integer(10));
}

#[test]
fn empty_program_is_null() {
    assert_eq!(eval(""), Object::Null);
    assert_eq!(eval("fn() {}()"), Object::Null);
}

#[test]
fn while_loops() {
    assert_eq!(eval("let i = 0; while (i < 3) { i = i + 1 }"), Object::Null);
    assert_eq!(eval("let i = 0; while (i < 3) { i = i + 1 }; i"), Object::Integer(3));
}

#[test]
fn functions_and_closures() {
    assert_eq!(eval("fn(x, y) { x + y; }(2, 3);"), Object::Integer(5));
    assert_eq!(eval("let newAdder = fn(x) { fn(y) { x + y; } }; let addTwo = newAdder(2); addTwo(3);"),
               Object::Integer(5));
    assert_eq!(eval("let identity = fn(x) { x; }; identity(5);"), Object::Integer(5));
    assert_eq!(eval("let double = fn(x) { x * 2; }; double(double(5));"), Object::Integer(20));
    assert_eq!(eval("let add = fn(a, b) { a + b }; add(5 + 5, add(5, 5));"), Object::Integer(20));
}

#[test]
fn closures_share_their_captured_scope() {
    let source = "
        let make = fn() {
            let count = 0;
            let inc = fn() { count = count + 1 };
            let get = fn() { count };
            [inc, get]
        };
        let pair = make();
        pair[0]();
        pair[0]();
        pair[1]()
    ";
    assert_eq!(eval(source), Object::Integer(2));
}

#[test]
fn function_values_render() {
    assert_eq!(eval("fn(x) { x + 2; }").render(), "fn(x) { (x + 2) }");
    assert_eq!(eval("len").render(), "builtin function len");
}

#[test]
fn strings() {
    assert_eq!(eval(r#""Hello" + " " + "World!""#), Object::from("Hello World!"));
    assert_eq!(eval(r#""line\nbreak""#).render(), "line\nbreak");
}

#[test]
fn arrays() {
    assert_eq!(eval("[1, 2 * 2, 3 + 3]").render(), "[1, 4, 6]");
    assert_eq!(eval("let a = [1, 2, 3]; a[0] + a[1] + a[2]"), Object::Integer(6));
    assert_eq!(eval("[1, 2, 3][1 + 1]"), Object::Integer(3));
    assert_eq!(eval("[1, 2, 3][3]"), Object::Null);
    assert_eq!(eval("[1, 2, 3][-1]"), Object::Null);
    assert_eq!(eval(r#"["a", [true]]"#).render(), "[a, [true]]");
}

#[test]
fn hashes() {
    let source = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;
    assert_eq!(eval(source).render(), "{4: 4, false: 6, true: 5, one: 1, three: 3, two: 2}");

    assert_eq!(eval(r#"{"foo": 5}["foo"]"#), Object::Integer(5));
    assert_eq!(eval(r#"{"foo": 5}["bar"]"#), Object::Null);
    assert_eq!(eval("{}[0]"), Object::Null);
    assert_eq!(eval("{2.5: 1}[2.5]"), Object::Integer(1));
    assert_eq!(eval("{1: 1}[1.0]"), Object::Null);
}

#[test]
fn hashes_render_in_key_order() {
    assert_eq!(eval(r#"{"b": 1, "a": 2}"#).render(), "{a: 2, b: 1}");
    assert_eq!(eval(r#"{"b": 1, 2: 2, true: 3, 1.5: 4}"#).render(), "{2: 2, 1.5: 4, true: 3, b: 1}");
}

#[test]
fn builtins_reject_short_argument_lists() {
    let mut context = Context::new();
    let array = Object::from(vec![Object::Integer(1)]);

    let cases: [(BuiltinFn, &[Object], usize); 7] = [(builtin::len, &[], 1),
                                                      (builtin::first, &[], 1),
                                                      (builtin::last, &[], 1),
                                                      (builtin::rest, &[], 1),
                                                      (builtin::push, &[array.clone()], 2),
                                                      (builtin::add, &[array], 3),
                                                      (builtin::assert_fn, &[], 1)];

    for (func, args, want) in cases {
        assert_eq!(func(&mut context, args, 4),
                   Err(RuntimeError::ArgumentCountMismatch { got: args.len(),
                                                             want,
                                                             line: 4 }));
    }
}

#[test]
fn builtins() {
    assert_eq!(eval(r#"len("")"#), Object::Integer(0));
    assert_eq!(eval(r#"len("four")"#), Object::Integer(4));
    assert_eq!(eval("len([1, 2, 3])"), Object::Integer(3));
    assert_eq!(eval(r#"len({"a": 1})"#), Object::Integer(1));
    assert_eq!(eval("first([])"), Object::Null);
    assert_eq!(eval("last([1, 2])"), Object::Integer(2));
    assert_eq!(eval("rest([1, 2, 3])").render(), "[2, 3]");
    assert_eq!(eval("rest([1])").render(), "[]");
    assert_eq!(eval("push([], 1)").render(), "[1]");
    assert_eq!(eval(r#"add({"a": 1}, "b", 2)"#).render(), "{a: 1, b: 2}");
    assert_eq!(eval("assert(true)"), Object::Null);
}

#[test]
fn error_messages() {
    let cases = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("foobar", "identifier not found: foobar"),
                 (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
                 (r#"{"name": "Monkey"}[fn(x) { x }];"#, "unusable as hash key: FUNCTION"),
                 ("5(1)", "not a function: INTEGER"),
                 ("fn(x) { x }(1, 2)", "wrong number of arguments. got=2, want=1"),
                 (r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1"),
                 ("len(1)", "argument to `len` must be STRING, ARRAY or HASH, got INTEGER"),
                 ("first(1)", "argument to `first` must be ARRAY, got INTEGER"),
                 ("1[0]", "index operator not supported: INTEGER[INTEGER]"),
                 ("1 / 0", "division by zero"),
                 ("-9223372036854775807 - 2", "integer overflow"),
                 ("x = 1", "cannot assign to undeclared identifier: x"),
                 ("assert(false)", "assertion failed")];

    for (source, expected) in cases {
        assert_eq!(eval_error(source).message(), expected, "source: {source}");
    }
}

#[test]
fn errors_stop_evaluation() {
    let output = SharedBuffer::default();
    let mut session = Session::with_output(Box::new(output.clone()));

    assert!(session.run("print(1); 1 + true; print(2)").is_err());
    assert_eq!(output.contents(), "1\n");
}

#[test]
fn errors_carry_lines() {
    let error = eval_error("let a = 1;\nlet b = 2;\na + c");
    assert_eq!(error.line(), 3);
    assert_eq!(error.to_string(), "Error on line 3: identifier not found: c");
    assert_eq!(Object::Error(error).render(), "ERROR: identifier not found: c");
}

#[test]
fn print_writes_to_the_session_output() {
    let output = SharedBuffer::default();
    let mut session = Session::with_output(Box::new(output.clone()));

    let result = session.run(r#"print("hello", 1 + 2, [1, "x"]); print()"#);
    assert_eq!(result.expect("print failed"), Object::Null);
    assert_eq!(output.contents(), "hello\n3\n[1, x]\n");
}

#[test]
fn session_keeps_bindings_between_inputs() {
    let mut session = Session::with_output(Box::new(io::sink()));

    session.run("let counter = 0;").expect("first input");
    session.run("counter = counter + 5;").expect("second input");
    assert_eq!(session.run("counter").expect("third input"), Object::Integer(5));
    assert_eq!(session.environment().borrow().get("counter"), Some(Object::Integer(5)));
}

#[test]
fn session_rejects_programs_with_parse_errors() {
    let output = SharedBuffer::default();
    let mut session = Session::with_output(Box::new(output.clone()));

    let error = session.run("let x = 1; print(x); let = 2;").expect_err("should not parse");
    assert!(error.to_string().starts_with("Error on line 1:"));
    assert_eq!(output.contents(), "");
    assert!(session.environment().borrow().get("x").is_none());
}

#[test]
fn environments_can_be_threaded_across_programs() {
    let env = Environment::new();

    let (first, _) = parse(tokenize("let base = 40;"));
    let (second, _) = parse(tokenize("base + 2"));
    evaluate(&first, &env);

    assert_eq!(evaluate(&second, &env), Object::Integer(42));
}
