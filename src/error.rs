/// Parsing errors.
///
/// Defines the errors the parser collects while building a syntax tree:
/// unexpected tokens, tokens that cannot start an expression, malformed
/// literals and anything the lexer flagged as illegal.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, unknown identifiers, wrong arity and bad index
/// operations.
pub mod runtime_error;
/// Tree rewrite errors.
///
/// Raised when a transformation hands back a node of the wrong category for
/// the position it was applied to.
pub mod rewrite_error;
/// Macro expansion errors.
///
/// Any failure while expanding macro calls aborts the whole pass.
pub mod expansion_error;

pub use expansion_error::ExpansionError;
pub use parse_error::{ParseError, ParseErrors};
pub use rewrite_error::RewriteError;
pub use runtime_error::RuntimeError;
