use std::fmt;

use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A specific token was required next but another one was found.
    UnexpectedToken {
        /// The token kind that was required.
        expected: TokenKind,
        /// The token kind that was actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token cannot begin an expression.
    NoPrefixParse {
        /// The offending token kind.
        token: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit into 64 bits.
    InvalidInteger {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A float literal could not be converted.
    InvalidFloat {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The lexer found a character no rule matches.
    IllegalCharacter {
        /// The offending text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A string literal reached the end of input without a closing quote.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of `=` is not a plain identifier.
    InvalidAssignmentTarget {
        /// The rendered left-hand side.
        target: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// Returns the line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParse { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::InvalidFloat { line, .. }
            | Self::IllegalCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::InvalidAssignmentTarget { line, .. } => *line,
        }
    }

    /// Returns the human-readable message without the line prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                format!("expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParse { token, .. } => format!("no prefix parse function for {token} found"),
            Self::InvalidInteger { literal, .. } => format!("could not parse {literal} as integer"),
            Self::InvalidFloat { literal, .. } => format!("could not parse {literal} as float"),
            Self::IllegalCharacter { literal, .. } => format!("illegal character '{literal}'"),
            Self::UnterminatedString { .. } => "unterminated string literal".to_string(),
            Self::InvalidAssignmentTarget { target, .. } => {
                format!("cannot assign to {target}, expected an identifier")
            },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error on line {}: {}", self.line(), self.message())
    }
}

impl std::error::Error for ParseError {}

/// Every error collected while parsing one source unit, in source order.
///
/// A program that produced any of these must not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
