use logos::Logos;

use crate::interpreter::token::{Token, TokenKind};

/// Failure raised by a lexeme callback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexicalError {
    /// No rule matched the current byte.
    #[default]
    UnexpectedCharacter,
    /// End of input was reached before the closing quote.
    UnterminatedString,
}

/// Raw lexemes recognized by the generated state machine.
///
/// Whitespace is skipped here; line numbers are derived from the skipped gaps
/// by [`Lexer`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexicalError)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme {
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[token("\"", scan_string)]
    String(String),

    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("macro")]
    Macro,
    #[token("while")]
    While,

    #[token("=")]
    Assign,
    #[token("==")]
    Equal,
    #[token("!")]
    Bang,
    #[token("!=")]
    NotEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}

impl Lexeme {
    const fn kind(&self) -> TokenKind {
        match self {
            Self::Float => TokenKind::Float,
            Self::Integer => TokenKind::Integer,
            Self::Identifier => TokenKind::Identifier,
            Self::String(_) => TokenKind::String,
            Self::Function => TokenKind::Function,
            Self::Let => TokenKind::Let,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::Return => TokenKind::Return,
            Self::Macro => TokenKind::Macro,
            Self::While => TokenKind::While,
            Self::Assign => TokenKind::Assign,
            Self::Equal => TokenKind::Equal,
            Self::Bang => TokenKind::Bang,
            Self::NotEqual => TokenKind::NotEqual,
            Self::Less => TokenKind::Less,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Greater => TokenKind::Greater,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Slash => TokenKind::Slash,
            Self::Comma => TokenKind::Comma,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Colon => TokenKind::Colon,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
        }
    }
}

/// Consumes a string literal body after its opening quote.
///
/// On success the lexer is advanced past the closing quote. An unterminated
/// literal swallows the rest of the input so that the next token is `Eof`.
fn scan_string(lex: &mut logos::Lexer<Lexeme>) -> Result<String, LexicalError> {
    if let Some((decoded, consumed)) = decode_string(lex.remainder()) {
        lex.bump(consumed);
        Ok(decoded)
    } else {
        let rest = lex.remainder().len();
        lex.bump(rest);
        Err(LexicalError::UnterminatedString)
    }
}

/// Decodes a string body up to and including its closing quote.
///
/// Returns the decoded text and the number of bytes consumed, or `None` if
/// the input ends first. A backslash followed by a letter outside the escape
/// table is kept as-is.
fn decode_string(body: &str) -> Option<(String, usize)> {
    let mut decoded = String::new();
    let mut chars = body.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => return Some((decoded, offset + 1)),
            '\\' => match chars.peek().and_then(|&(_, next)| unescape(next)) {
                Some(escaped) => {
                    chars.next();
                    decoded.push(escaped);
                },
                None => decoded.push('\\'),
            },
            other => decoded.push(other),
        }
    }

    None
}

/// Maps the character after a backslash to its decoded form.
///
/// `\v`, `\"`, `\a`, `\b` and `\f` all decode to a carriage return. Programs
/// rely on this, so `\"` never terminates a literal.
const fn unescape(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        'r' | 'v' | '"' | 'a' | 'b' | 'f' => Some('\r'),
        _ => None,
    }
}

/// Converts source text into [`Token`]s on demand.
///
/// Line numbers start at 1 and advance on every newline skipped between
/// tokens. Newlines inside string literals do not count.
///
/// # Example
/// ```
/// use marmoset::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("5 < 10.52");
/// assert_eq!(lexer.next_token().kind, TokenKind::Integer);
/// assert_eq!(lexer.next_token().kind, TokenKind::Less);
///
/// let float = lexer.next_token();
/// assert_eq!(float.kind, TokenKind::Float);
/// assert_eq!(float.literal, "10.52");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'source> {
    inner:    logos::Lexer<'source, Lexeme>,
    source:   &'source str,
    cursor:   usize,
    line:     usize,
    finished: bool,
}

impl<'source> Lexer<'source> {
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: Lexeme::lexer(source),
               source,
               cursor: 0,
               line: 1,
               finished: false }
    }

    /// Produces the next token.
    ///
    /// Unrecognized bytes and unterminated strings come back as
    /// [`TokenKind::Illegal`] carrying the offending text. After the input is
    /// exhausted every call returns [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            self.advance_to(self.source.len());
            return Token::new(TokenKind::Eof, "", self.line);
        };

        let span = self.inner.span();
        self.advance_to(span.start);
        self.cursor = span.end;

        match result {
            Ok(Lexeme::String(text)) => Token::new(TokenKind::String, text, self.line),
            Ok(lexeme) => Token::new(lexeme.kind(), self.inner.slice(), self.line),
            Err(_) => Token::new(TokenKind::Illegal, self.inner.slice(), self.line),
        }
    }

    /// Counts the newlines in the skipped whitespace up to `offset`.
    fn advance_to(&mut self, offset: usize) {
        if offset > self.cursor {
            let gap = &self.source[self.cursor..offset];
            self.line += gap.bytes().filter(|&b| b == b'\n').count();
            self.cursor = offset;
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token including a single trailing `Eof`, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is(TokenKind::Eof);
        Some(token)
    }
}
