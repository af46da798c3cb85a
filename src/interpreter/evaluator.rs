/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context with its output
/// sink, statement sequencing and return-signal handling.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, equality and string concatenation.
pub mod binary;

/// Conditionals and loops.
///
/// Evaluates `if` and `while` expressions.
pub mod control;

/// Utility functions for evaluation.
///
/// Identifier resolution, literals, assignment, collection literals and
/// indexing.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;

/// Quoting.
///
/// Implements the `quote` special form and `unquote` substitution.
pub mod quote;

/// Macro definition and expansion.
///
/// Collects top-level macro bindings and replaces macro calls with the code
/// their bodies produce.
pub mod macros;
