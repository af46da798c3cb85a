/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, resolves names through
/// lexical scopes, applies operators, calls functions and closures, and expands
/// macros before ordinary evaluation.
///
/// # Responsibilities
/// - Evaluates statements and expressions to runtime values.
/// - Handles scopes, closures, and control flow.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   line.
/// - Decodes string escapes and separates integer from float literals.
/// - Turns unrecognized input into illegal tokens for the parser to report.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, collecting every error with its
///   line.
pub mod parser;
/// Token kinds and the token type shared by the lexer and parser.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types produced during interpretation,
/// such as integers, floats, strings, arrays, hashes and closures, together
/// with the scopes closures capture.
///
/// # Responsibilities
/// - Defines the `Object` enum and all supported value variants.
/// - Provides the scope chain used for name resolution.
/// - Defines which values may be used as hash keys.
pub mod value;
