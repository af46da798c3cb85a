use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::token::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power of an operator, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `=`
    Assign,
    /// `==` `!=`
    Equals,
    /// `<` `>` `<=` `>=`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl Precedence {
    /// Returns the precedence a token has when it appears in infix position.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Assign => Self::Assign,
            TokenKind::Equal | TokenKind::NotEqual => Self::Equals,
            TokenKind::Less | TokenKind::Greater | TokenKind::LessEqual | TokenKind::GreaterEqual => {
                Self::LessGreater
            },
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            TokenKind::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// Handler for a token that starts an expression.
pub(super) type PrefixParseFn<I> = fn(&mut Parser<I>) -> ParseResult<Expression>;
/// Handler for a token that continues an expression.
pub(super) type InfixParseFn<I> = fn(&mut Parser<I>, Expression) -> ParseResult<Expression>;

/// A Pratt parser over a stream of [`Token`]s.
///
/// The parser keeps one token of lookahead. Errors are collected rather than
/// returned: after a failed statement the parser skips ahead to the next
/// statement boundary and carries on, so one pass reports as many problems as
/// it can find.
pub struct Parser<I> {
    tokens:             I,
    pub(super) current: Token,
    pub(super) peek:    Token,
    pub(super) errors:  Vec<ParseError>,
}

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Creates a parser and primes the current and lookahead tokens.
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        let mut tokens = tokens.into_iter();
        let current = tokens.next()
                            .unwrap_or_else(|| Token::new(TokenKind::Eof, "", 1));
        let peek = tokens.next()
                         .unwrap_or_else(|| Token::new(TokenKind::Eof, "", current.line));

        Self { tokens,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Parses every statement up to the end of input.
    ///
    /// # Returns
    /// The program together with every error encountered, in source order.
    /// The program is only meaningful when the error list is empty.
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                },
            }
            self.next_token();
        }

        (program, self.errors)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The current token selects a prefix handler; infix handlers are then
    /// applied for as long as the lookahead binds more tightly than the
    /// surrounding context.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let Some(prefix) = Self::prefix_rule(self.current.kind) else {
            return Err(self.no_prefix_error());
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            let Some(infix) = Self::infix_rule(self.peek.kind) else {
                return Ok(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    fn prefix_rule(kind: TokenKind) -> Option<PrefixParseFn<I>> {
        let rule: PrefixParseFn<I> = match kind {
            TokenKind::Identifier => Self::parse_identifier,
            TokenKind::Integer => Self::parse_integer_literal,
            TokenKind::Float => Self::parse_float_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean_literal,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::LBrace => Self::parse_hash_literal,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::While => Self::parse_while_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::Macro => Self::parse_macro_literal,
            _ => return None,
        };
        Some(rule)
    }

    fn infix_rule(kind: TokenKind) -> Option<InfixParseFn<I>> {
        let rule: InfixParseFn<I> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual
            | TokenKind::Equal
            | TokenKind::NotEqual => Self::parse_infix_expression,
            TokenKind::Assign => Self::parse_assign_expression,
            TokenKind::LParen => Self::parse_call_expression,
            TokenKind::LBracket => Self::parse_index_expression,
            _ => return None,
        };
        Some(rule)
    }

    /// Builds the error for a token that cannot start an expression.
    ///
    /// Illegal tokens from the lexer are reported as the lexical problem they
    /// stand for.
    fn no_prefix_error(&self) -> ParseError {
        let line = self.current.line;
        match self.current.kind {
            TokenKind::Illegal if self.current.literal.starts_with('"') => {
                ParseError::UnterminatedString { line }
            },
            TokenKind::Illegal => ParseError::IllegalCharacter { literal: self.current.literal.clone(),
                                                                 line },
            token => ParseError::NoPrefixParse { token, line },
        }
    }

    /// Advances by one token.
    pub(super) fn next_token(&mut self) {
        let next = self.tokens
                       .next()
                       .unwrap_or_else(|| Token::new(TokenKind::Eof, "", self.peek.line));
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(super) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances if the lookahead has the given kind, failing otherwise.
    ///
    /// # Errors
    /// `UnexpectedToken` naming both the expected and the actual lookahead.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: kind,
                                              found:    self.peek.kind,
                                              line:     self.peek.line, })
        }
    }

    /// Consumes a `;` if one follows.
    pub(super) fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Skips the rest of a broken statement.
    ///
    /// Stops on a `;`, at end of input, on a `}` the broken statement ran into,
    /// or just before a `}` so that an enclosing block can still close.
    pub(super) fn synchronize(&mut self) {
        while !self.current_is(TokenKind::Semicolon)
              && !self.current_is(TokenKind::Eof)
              && !self.current_is(TokenKind::RBrace)
              && !self.peek_is(TokenKind::RBrace)
        {
            self.next_token();
        }
    }
}

/// Parses a token stream into a program.
///
/// # Returns
/// The parsed program and every parse error, in the order they were found.
///
/// # Example
/// ```
/// use marmoset::{parse, tokenize};
///
/// let (program, errors) = parse(tokenize("let x = 1 + 2 * 3;"));
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3))");
///
/// let (_, errors) = parse(tokenize("let = 5;"));
/// assert_eq!(errors[0].message(), "expected next token to be IDENT, got = instead");
/// ```
pub fn parse<T>(tokens: T) -> (Program, Vec<ParseError>)
    where T: IntoIterator<Item = Token>
{
    Parser::new(tokens).parse_program()
}
