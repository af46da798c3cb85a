/// Represents a failed bottom-up tree rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// A transformation returned a node that does not fit its position.
    WrongCategory {
        /// The category the position requires.
        expected: &'static str,
        /// The category that was returned.
        found:    &'static str,
        /// The source line of the returned node.
        line:     usize,
    },
}

impl RewriteError {
    /// Returns the line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::WrongCategory { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RewriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongCategory { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: rewrite produced a {found} where a {expected} was required.")
            },
        }
    }
}

impl std::error::Error for RewriteError {}
