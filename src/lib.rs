//! # marmoset
//!
//! marmoset is a small dynamically typed programming language written in Rust.
//! It lexes, parses and evaluates programs with first-class functions,
//! closures, arrays, hashes and quote/unquote macros.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Program,
    error::{ExpansionError, ParseErrors},
    interpreter::{
        evaluator::{core::Context, macros::define_macros},
        lexer::Lexer,
        value::{
            core::Object,
            environment::{Env, Environment},
        },
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expression` types that
/// represent the syntactic structure of source code as a tree, and the
/// generic bottom-up rewrite used by macro expansion. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches line numbers to AST nodes for error reporting.
/// - Renders every node back to canonical source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing,
/// rewriting, expanding macros or evaluating code. Every error carries the
/// line it refers to.
///
/// # Responsibilities
/// - Defines error enums for each failure mode (parser, rewrite, expansion,
///   evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Implements `std::error::Error` so errors compose at the API boundary.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for marmoset programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64`, `usize` and `f64` without silent data loss.
pub mod util;

pub use interpreter::parser::core::parse;

/// Returns the token stream for `source`.
///
/// The stream is lazy and ends with a single `Eof` token.
///
/// # Example
/// ```
/// use marmoset::{interpreter::token::TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("let x = 5;").map(|token| token.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Integer,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Moves the top-level macro definitions of `program` into `macro_env` and
/// expands every macro call.
///
/// Macros defined by earlier programs in the same `macro_env` stay available.
/// Output printed while a macro body runs goes to standard output.
///
/// # Errors
/// Returns an `ExpansionError` if any macro call fails to expand. Nothing is
/// partially rewritten.
pub fn define_and_expand_macros(mut program: Program, macro_env: &Env) -> Result<Program, ExpansionError> {
    define_macros(&mut program, macro_env);
    Context::new().expand_macros(program, macro_env)
}

/// Evaluates `program` in `env` and returns its value.
///
/// Runtime failures are returned as [`Object::Error`].
///
/// # Example
/// ```
/// use marmoset::{evaluate, interpreter::value::{core::Object, environment::Environment}, parse, tokenize};
///
/// let (program, _) = parse(tokenize("let newAdder = fn(x) { fn(y) { x + y; } }; newAdder(2)(3);"));
/// assert_eq!(evaluate(&program, &Environment::new()), Object::Integer(5));
/// ```
#[must_use]
pub fn evaluate(program: &Program, env: &Env) -> Object {
    Context::new().evaluate(program, env)
}

/// Runs successive inputs against shared state.
///
/// A session keeps one runtime scope and one macro scope alive across calls to
/// [`Session::run`], so bindings and macros defined by one input are visible
/// to the next, as in an interactive shell.
///
/// # Example
/// ```
/// use marmoset::{Session, interpreter::value::core::Object};
///
/// let mut session = Session::new();
/// session.run("let double = fn(x) { x * 2 };").unwrap();
/// assert_eq!(session.run("double(21)").unwrap(), Object::Integer(42));
/// assert!(session.run("double(").is_err());
/// ```
pub struct Session {
    context:   Context,
    env:       Env,
    macro_env: Env,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::from_context(Context::new())
    }

    /// Creates a session that prints to the given sink.
    #[must_use]
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self::from_context(Context::with_output(output))
    }

    fn from_context(context: Context) -> Self {
        Self { context,
               env: Environment::new(),
               macro_env: Environment::new() }
    }

    /// Returns the runtime scope shared by every input.
    #[must_use]
    pub const fn environment(&self) -> &Env {
        &self.env
    }

    /// Lexes, parses, expands and evaluates one input.
    ///
    /// # Returns
    /// The value of the input's last statement.
    ///
    /// # Errors
    /// - `ParseErrors` with every parse error if the input does not parse. It
    ///   is then not evaluated at all.
    /// - `ExpansionError` if a macro call fails to expand.
    /// - `RuntimeError` if evaluation fails.
    pub fn run(&mut self, source: &str) -> Result<Object, Box<dyn std::error::Error>> {
        let (mut program, errors) = parse(tokenize(source));
        if !errors.is_empty() {
            return Err(Box::new(ParseErrors(errors)));
        }

        define_macros(&mut program, &self.macro_env);
        let program = self.context.expand_macros(program, &self.macro_env)?;

        match self.context.evaluate(&program, &self.env) {
            Object::Error(error) => Err(Box::new(error)),
            value => Ok(value),
        }
    }
}

/// Returns the final evaluation result after execution.
///
/// This function runs `source` once in a fresh [`Session`] that prints to
/// standard output.
///
/// # Errors
/// Returns an error if parsing, macro expansion or evaluation fails.
///
/// # Examples
/// ```
/// use marmoset::{get_result, interpreter::value::core::Object};
///
/// let result = get_result("let x = 5; let y = 10; x + y;");
/// assert_eq!(result.unwrap(), Object::Integer(15));
///
/// // 'x' is not defined
/// assert!(get_result("let y = x + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Object, Box<dyn std::error::Error>> {
    Session::new().run(source)
}
