use crate::{
    ast::{Expression, Identifier, LiteralValue, PrefixOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::{Token, TokenKind},
    },
};

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    pub(super) fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(Identifier::new(self.current.literal.clone(), self.current.line)))
    }

    /// Parses an integer literal.
    ///
    /// # Errors
    /// `InvalidInteger` if the digits do not fit into an `i64`.
    pub(super) fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        let line = self.current.line;
        let value = self.current
                        .literal
                        .parse::<i64>()
                        .map_err(|_| ParseError::InvalidInteger { literal: self.current.literal.clone(),
                                                                  line })?;

        Ok(Expression::Literal { value: value.into(),
                                 line })
    }

    /// Parses a float literal such as `10.52`.
    ///
    /// # Errors
    /// `InvalidFloat` if the text cannot be converted.
    pub(super) fn parse_float_literal(&mut self) -> ParseResult<Expression> {
        let line = self.current.line;
        let value = self.current
                        .literal
                        .parse::<f64>()
                        .map_err(|_| ParseError::InvalidFloat { literal: self.current.literal.clone(),
                                                                line })?;

        Ok(Expression::Literal { value: value.into(),
                                 line })
    }

    pub(super) fn parse_string_literal(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Literal { value: LiteralValue::String(self.current.literal.clone()),
                                 line:  self.current.line, })
    }

    pub(super) fn parse_boolean_literal(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Literal { value: self.current_is(TokenKind::True).into(),
                                 line:  self.current.line, })
    }

    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand binds at prefix precedence, so `-a * b` is `(-a) * b`.
    /// `-9223372036854775808` is read as the single literal `i64::MIN`, whose
    /// magnitude alone does not fit.
    pub(super) fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let line = self.current.line;
        let op = if self.current_is(TokenKind::Bang) {
            PrefixOperator::Not
        } else {
            PrefixOperator::Negate
        };

        self.next_token();
        if op == PrefixOperator::Negate
           && self.current_is(TokenKind::Integer)
           && self.current.literal.parse::<u64>().is_ok_and(|n| n == i64::MIN.unsigned_abs())
           && Precedence::of(self.peek.kind) <= Precedence::Prefix
        {
            return Ok(Expression::Literal { value: i64::MIN.into(),
                                            line });
        }
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { op,
                                right: Box::new(right),
                                line })
    }

    /// Parses `( <expression> )`.
    pub(super) fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expr)
    }

    /// Parses `[a, b, ...]`.
    pub(super) fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let line = self.current.line;
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Ok(Expression::Array { elements, line })
    }

    /// Parses `{key: value, ...}`.
    ///
    /// Pairs are kept in source order. As in arrays and argument lists, a
    /// trailing comma is rejected.
    pub(super) fn parse_hash_literal(&mut self) -> ParseResult<Expression> {
        let line = self.current.line;
        let mut pairs = Vec::new();

        if self.peek_is(TokenKind::RBrace) {
            self.next_token();
            return Ok(Expression::Hash { pairs, line });
        }

        loop {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }
        self.expect_peek(TokenKind::RBrace)?;

        Ok(Expression::Hash { pairs, line })
    }
}
