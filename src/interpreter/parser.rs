/// Parser state, precedence table and the expression loop.
///
/// Holds the current and lookahead tokens, the collected errors, and the
/// prefix/infix handler tables that drive Pratt-style expression parsing.
pub mod core;

/// Prefix handlers.
///
/// Parses everything that can start an expression: identifiers, literals,
/// prefix operators, grouping, arrays and hashes.
pub mod unary;

/// Infix handlers.
///
/// Parses binary operators, assignment, calls and indexing.
pub mod binary;

/// Blocks and block-bodied expressions.
///
/// Parses braced blocks plus `if`, `while`, function and macro literals.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token to `let`, `return` or expression
/// statements.
pub mod statement;

/// Utility functions for the parser.
///
/// Comma-separated expression lists and parameter lists.
pub mod utils;
