use crate::{
    ast::{Expression, Identifier, Statement},
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::{Token, TokenKind},
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses one statement starting at the current token.
    ///
    /// Dispatches on the leading token: `let` and `return` have their own
    /// forms, anything else is an expression statement. On return the current
    /// token is the last token of the statement.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>` with an optional `;`.
    ///
    /// A function literal bound this way remembers the binding name.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;

        self.expect_peek(TokenKind::Identifier)?;
        let name = Identifier::new(self.current.literal.clone(), self.current.line);

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let mut value = self.parse_expression(Precedence::Lowest)?;
        if let Expression::Function { name: function_name,
                                      .. } = &mut value
        {
            *function_name = Some(name.name.clone());
        }

        self.skip_semicolon();

        Ok(Statement::Let { name, value, line })
    }

    /// Parses `return`, with or without a value, and an optional `;`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;

        let value = if self.peek_is(TokenKind::Semicolon)
                       || self.peek_is(TokenKind::RBrace)
                       || self.peek_is(TokenKind::Eof)
        {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };

        self.skip_semicolon();

        Ok(Statement::Return { value, line })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;
        let expr = self.parse_expression(Precedence::Lowest)?;

        self.skip_semicolon();

        Ok(Statement::Expression { expr, line })
    }
}
