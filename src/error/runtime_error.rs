use std::fmt;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    error::RewriteError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// Type names carried by the variants are the upper-case names reported by
/// `Object::type_name`, such as `INTEGER` or `HASH`.
pub enum RuntimeError {
    /// Tried to use a name that is bound nowhere in the scope chain.
    UnknownIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An infix operator received operands of unrelated types.
    TypeMismatch {
        left:  &'static str,
        op:    InfixOperator,
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A prefix operator is not defined for its operand.
    UnknownPrefixOperator {
        op:      PrefixOperator,
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An infix operator is not defined for two operands of the same type.
    UnknownInfixOperator {
        left:  &'static str,
        op:    InfixOperator,
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to call something that is neither a function nor a builtin.
    NotAFunction {
        /// The type of the callee.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        got:  usize,
        want: usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The value cannot be indexed by the given index type.
    UnsupportedIndex {
        left:  &'static str,
        index: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The value cannot be used as a hash key.
    UnhashableKey {
        /// The type of the rejected key.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin received an argument of the wrong type.
    InvalidArgument {
        /// The builtin name.
        function: &'static str,
        /// The type the builtin needs.
        expected: &'static str,
        /// The type it received.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Integer division or division of an integer by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic left the 64-bit range.
    IntegerOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assignment to a name that was never bound with `let`.
    UndeclaredAssignment {
        /// The name being assigned.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A macro literal was evaluated instead of being bound at top level.
    MacroOutsideDefinition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `unquote` produced a value that has no syntax form.
    Unquotable {
        /// The type of the value.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `assert` was called with a falsy value.
    AssertionFailed {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output sink failed.
    Output {
        /// The underlying I/O error, rendered.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Rewriting a quoted expression failed.
    Rewrite(RewriteError),
}

impl RuntimeError {
    /// Returns the line the error originated on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownIdentifier { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::UnknownPrefixOperator { line, .. }
            | Self::UnknownInfixOperator { line, .. }
            | Self::NotAFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::UnsupportedIndex { line, .. }
            | Self::UnhashableKey { line, .. }
            | Self::InvalidArgument { line, .. }
            | Self::DivisionByZero { line }
            | Self::IntegerOverflow { line }
            | Self::UndeclaredAssignment { line, .. }
            | Self::MacroOutsideDefinition { line }
            | Self::Unquotable { line, .. }
            | Self::AssertionFailed { line }
            | Self::Output { line, .. } => *line,
            Self::Rewrite(error) => error.line(),
        }
    }

    /// Returns the human-readable message without the line prefix.
    ///
    /// # Example
    /// ```
    /// use marmoset::{ast::InfixOperator, error::RuntimeError};
    ///
    /// let error = RuntimeError::TypeMismatch { left:  "INTEGER",
    ///                                          op:    InfixOperator::Add,
    ///                                          right: "BOOLEAN",
    ///                                          line:  4, };
    /// assert_eq!(error.message(), "type mismatch: INTEGER + BOOLEAN");
    /// assert_eq!(error.to_string(), "Error on line 4: type mismatch: INTEGER + BOOLEAN");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnknownIdentifier { name, .. } => format!("identifier not found: {name}"),
            Self::TypeMismatch { left, op, right, .. } => {
                format!("type mismatch: {left} {op} {right}")
            },
            Self::UnknownPrefixOperator { op, operand, .. } => {
                format!("unknown operator: {op}{operand}")
            },
            Self::UnknownInfixOperator { left, op, right, .. } => {
                format!("unknown operator: {left} {op} {right}")
            },
            Self::NotAFunction { kind, .. } => format!("not a function: {kind}"),
            Self::ArgumentCountMismatch { got, want, .. } => {
                format!("wrong number of arguments. got={got}, want={want}")
            },
            Self::UnsupportedIndex { left, index, .. } => {
                format!("index operator not supported: {left}[{index}]")
            },
            Self::UnhashableKey { kind, .. } => format!("unusable as hash key: {kind}"),
            Self::InvalidArgument { function,
                                    expected,
                                    found,
                                    .. } => {
                format!("argument to `{function}` must be {expected}, got {found}")
            },
            Self::DivisionByZero { .. } => "division by zero".to_string(),
            Self::IntegerOverflow { .. } => "integer overflow".to_string(),
            Self::UndeclaredAssignment { name, .. } => {
                format!("cannot assign to undeclared identifier: {name}")
            },
            Self::MacroOutsideDefinition { .. } => {
                "macro literals may only be bound by a top-level let".to_string()
            },
            Self::Unquotable { kind, .. } => format!("cannot unquote a value of type {kind}"),
            Self::AssertionFailed { .. } => "assertion failed".to_string(),
            Self::Output { details, .. } => format!("failed to write output: {details}"),
            Self::Rewrite(RewriteError::WrongCategory { expected, found, .. }) => {
                format!("rewrite produced a {found} where a {expected} was required")
            },
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error on line {}: {}", self.line(), self.message())
    }
}

impl std::error::Error for RuntimeError {}

impl From<RewriteError> for RuntimeError {
    fn from(error: RewriteError) -> Self {
        Self::Rewrite(error)
    }
}
