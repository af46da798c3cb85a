use std::fmt;

/// The lexical category of a [`Token`].
///
/// Every category renders as the name used in parser diagnostics, for example
/// `IDENT`, `INT` or `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte sequence no rule matches, including unterminated strings.
    Illegal,
    /// End of input. Repeats forever once reached.
    Eof,

    /// Identifier such as `x` or `new_adder`.
    Identifier,
    /// Integer literal such as `42`.
    Integer,
    /// Float literal such as `10.52`.
    Float,
    /// String literal. The token literal holds the decoded text.
    String,

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,

    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `macro`
    Macro,
    /// `while`
    While,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Identifier => "IDENT",
            Self::Integer => "INT",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Macro => "MACRO",
            Self::While => "WHILE",
        };
        f.write_str(name)
    }
}

/// A single lexical unit: category, literal text and the 1-based source line
/// it was read on.
///
/// # Example
/// ```
/// use marmoset::interpreter::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "x", 3);
/// assert_eq!(token.literal, "x");
/// assert_eq!(token.to_string(), "IDENT(x) on line 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind:    TokenKind,
    pub literal: String,
    pub line:    usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }

    /// Returns `true` if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) on line {}", self.kind, self.literal, self.line)
    }
}
