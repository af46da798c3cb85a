use crate::{
    ast::{BlockStatement, Expression},
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::{Token, TokenKind},
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses `{ statements }` with the current token on the `{`.
    ///
    /// Statements are collected until the closing `}` or the end of input,
    /// and the current token ends on whichever came first. A broken statement
    /// inside the block is recorded and skipped so the rest of the block still
    /// gets parsed.
    pub(super) fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        let line = self.current.line;
        let mut statements = Vec::new();

        self.next_token();
        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                    // The broken statement ran into this block's own `}`.
                    if self.current_is(TokenKind::RBrace) {
                        break;
                    }
                },
            }
            self.next_token();
        }

        Ok(BlockStatement { statements, line })
    }

    /// Parses `( condition ) {` and the block that follows.
    fn parse_condition_and_block(&mut self) -> ParseResult<(Expression, BlockStatement)> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let block = self.parse_block_statement()?;

        Ok((condition, block))
    }

    /// Parses `if (condition) { ... }` with an optional `else { ... }`.
    pub(super) fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let line = self.current.line;
        let (condition, consequence) = self.parse_condition_and_block()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative,
                            line })
    }

    /// Parses `while (condition) { ... }`.
    pub(super) fn parse_while_expression(&mut self) -> ParseResult<Expression> {
        let line = self.current.line;
        let (condition, body) = self.parse_condition_and_block()?;

        Ok(Expression::While { condition: Box::new(condition),
                               body,
                               line })
    }

    /// Parses `fn(parameters) { body }`.
    pub(super) fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let line = self.current.line;

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::Function { parameters,
                                  body,
                                  name: None,
                                  line })
    }

    /// Parses `macro(parameters) { body }`.
    pub(super) fn parse_macro_literal(&mut self) -> ParseResult<Expression> {
        let line = self.current.line;

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::Macro { parameters,
                               body,
                               line })
    }
}
