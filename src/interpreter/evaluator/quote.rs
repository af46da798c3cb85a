use std::rc::Rc;

use crate::{
    ast::{
        Expression, LiteralValue,
        modify::{Node, modify},
    },
    error::{RewriteError, RuntimeError},
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::{core::Object, environment::Env},
    },
};

impl Context {
    /// Evaluates `quote(expr)`.
    ///
    /// The argument is not evaluated. Every `unquote(e)` call inside it is
    /// replaced by the syntax tree of `e`'s value, evaluated in `env`, and the
    /// result is returned as a [`Object::Quote`].
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` unless exactly one argument is given, to
    ///   `quote` or to any `unquote` inside it.
    /// - `Unquotable` if an unquoted value has no syntax form.
    /// - Any error raised while evaluating an unquoted expression.
    pub(crate) fn eval_quote(&mut self, arguments: &[Expression], env: &Env, line: usize) -> Flow<Object> {
        let [argument] = arguments else {
            return Err(RuntimeError::ArgumentCountMismatch { got: arguments.len(),
                                                             want: 1,
                                                             line }.into());
        };

        let quoted = self.eval_unquote_calls(argument.clone(), env)?;
        Ok(Object::Quote(Rc::new(quoted)))
    }

    fn eval_unquote_calls(&mut self, quoted: Expression, env: &Env) -> Flow<Expression> {
        let mut substitute = |node: Node| -> Flow<Node> {
            match node {
                Node::Expression(Expression::Call { function,
                                                    arguments,
                                                    line, }) if is_unquote(&function) => {
                    let [argument] = arguments.as_slice() else {
                        return Err(RuntimeError::ArgumentCountMismatch { got: arguments.len(),
                                                                         want: 1,
                                                                         line }.into());
                    };
                    let value = self.eval(argument, env)?;
                    Ok(Node::Expression(object_to_expression(value, line)?))
                },
                other => Ok(other),
            }
        };

        match modify(Node::Expression(quoted), &mut substitute)? {
            Node::Expression(expr) => Ok(expr),
            other => Err(RewriteError::WrongCategory { expected: "expression",
                                                       found:    other.category(),
                                                       line:     other.line_number(), }.into()),
        }
    }
}

fn is_unquote(function: &Expression) -> bool {
    matches!(function, Expression::Identifier(ident) if ident.name == "unquote")
}

/// Converts a value back into the syntax that produces it.
///
/// Scalars become literals and a quote becomes the expression it holds.
///
/// # Errors
/// `Unquotable` for arrays, hashes, functions, `null` and every other value
/// without a literal form.
///
/// # Example
/// ```
/// use marmoset::interpreter::{evaluator::quote::object_to_expression, value::core::Object};
///
/// let expr = object_to_expression(Object::Integer(8), 1).unwrap();
/// assert_eq!(expr.to_string(), "8");
/// assert!(object_to_expression(Object::Null, 1).is_err());
/// ```
pub fn object_to_expression(value: Object, line: usize) -> EvalResult<Expression> {
    let literal = match value {
        Object::Integer(n) => LiteralValue::Integer(n),
        Object::Float(x) => LiteralValue::Float(x),
        Object::Boolean(b) => LiteralValue::Boolean(b),
        Object::String(s) => LiteralValue::String(s),
        Object::Quote(expr) => return Ok(Rc::unwrap_or_clone(expr)),
        other => {
            return Err(RuntimeError::Unquotable { kind: other.type_name(),
                                                  line });
        },
    };

    Ok(Expression::Literal { value: literal,
                             line })
}
