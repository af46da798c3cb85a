use std::fmt;

use crate::error::{RewriteError, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can abort macro expansion.
pub enum ExpansionError {
    /// The rewrite walk itself failed.
    Rewrite(RewriteError),
    /// Evaluating a macro body raised a runtime error.
    Evaluation(RuntimeError),
    /// A macro was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The macro name.
        name: String,
        got:  usize,
        want: usize,
        /// The line of the macro call.
        line: usize,
    },
    /// A macro body evaluated to something other than a quoted expression.
    NotQuote {
        /// The macro name.
        name:  String,
        /// The type the body produced.
        found: &'static str,
        /// The line of the macro call.
        line:  usize,
    },
}

impl ExpansionError {
    /// Returns the line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Rewrite(error) => error.line(),
            Self::Evaluation(error) => error.line(),
            Self::ArgumentCountMismatch { line, .. } | Self::NotQuote { line, .. } => *line,
        }
    }
}

impl fmt::Display for ExpansionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rewrite(error) => write!(f, "{error}"),
            Self::Evaluation(error) => write!(f, "{error}"),
            Self::ArgumentCountMismatch { name,
                                          got,
                                          want,
                                          line, } => write!(f,
                                                            "Error on line {line}: macro '{name}' takes {want} arguments, got {got}."),
            Self::NotQuote { name, found, line } => write!(f,
                                                           "Error on line {line}: macro '{name}' must return a quoted expression, got {found}."),
        }
    }
}

impl std::error::Error for ExpansionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rewrite(error) => Some(error),
            Self::Evaluation(error) => Some(error),
            Self::ArgumentCountMismatch { .. } | Self::NotQuote { .. } => None,
        }
    }
}

impl From<RewriteError> for ExpansionError {
    fn from(error: RewriteError) -> Self {
        Self::Rewrite(error)
    }
}

impl From<RuntimeError> for ExpansionError {
    fn from(error: RuntimeError) -> Self {
        Self::Evaluation(error)
    }
}
