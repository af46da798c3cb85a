use crate::{
    ast::{Expression, Identifier},
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::{Token, TokenKind},
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses a comma-separated list of expressions until a closing token.
    ///
    /// This utility is shared by array literals and call argument lists. The
    /// current token is the opening delimiter; an immediately following
    /// closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := expression ("," expression)*`
    ///
    /// # Parameters
    /// - `closing`: The token that terminates the list (`]` or `)`).
    ///
    /// # Returns
    /// The parsed expressions, with the current token on `closing`.
    pub(super) fn parse_expression_list(&mut self, closing: TokenKind) -> ParseResult<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.next_token();
            return Ok(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;

        Ok(items)
    }

    /// Parses a parenthesized parameter list of bare identifiers.
    ///
    /// The current token is the `(`; on return it is the `)`.
    pub(super) fn parse_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier::new(self.current.literal.clone(), self.current.line));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Identifier)?;
            parameters.push(Identifier::new(self.current.literal.clone(), self.current.line));
        }

        self.expect_peek(TokenKind::RParen)?;

        Ok(parameters)
    }
}
