use crate::{
    ast::{Expression, InfixOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::{Token, TokenKind},
    },
};

/// Maps an operator token to its infix operator.
const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    Some(match kind {
        TokenKind::Plus => InfixOperator::Add,
        TokenKind::Minus => InfixOperator::Subtract,
        TokenKind::Asterisk => InfixOperator::Multiply,
        TokenKind::Slash => InfixOperator::Divide,
        TokenKind::Less => InfixOperator::Less,
        TokenKind::Greater => InfixOperator::Greater,
        TokenKind::LessEqual => InfixOperator::LessEqual,
        TokenKind::GreaterEqual => InfixOperator::GreaterEqual,
        TokenKind::Equal => InfixOperator::Equal,
        TokenKind::NotEqual => InfixOperator::NotEqual,
        _ => return None,
    })
}

impl<I> Parser<I> where I: Iterator<Item = Token>
{
    /// Parses the right operand of a left-associative binary operator.
    ///
    /// The current token is the operator. The right side is parsed at the
    /// operator's own precedence, so `a - b - c` groups as `(a - b) - c`.
    pub(super) fn parse_infix_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let line = self.current.line;
        let Some(op) = infix_operator(self.current.kind) else {
            return Err(ParseError::NoPrefixParse { token: self.current.kind,
                                                   line });
        };
        let precedence = Precedence::of(self.current.kind);

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { left: Box::new(left),
                               op,
                               right: Box::new(right),
                               line })
    }

    /// Parses `name = value`.
    ///
    /// Assignment is right-associative: `a = b = 1` assigns `b` first.
    ///
    /// # Errors
    /// `InvalidAssignmentTarget` if the left side is not a bare identifier.
    pub(super) fn parse_assign_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let line = self.current.line;
        let name = match left {
            Expression::Identifier(name) => name,
            other => {
                return Err(ParseError::InvalidAssignmentTarget { target: other.to_string(),
                                                                 line });
            },
        };

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        Ok(Expression::Assign { name,
                                value: Box::new(value),
                                line })
    }

    /// Parses the argument list of `function(arguments)`.
    pub(super) fn parse_call_expression(&mut self, function: Expression) -> ParseResult<Expression> {
        let line = self.current.line;
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Ok(Expression::Call { function: Box::new(function),
                              arguments,
                              line })
    }

    /// Parses `left[index]`.
    pub(super) fn parse_index_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let line = self.current.line;

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Index { left: Box::new(left),
                               index: Box::new(index),
                               line })
    }
}
