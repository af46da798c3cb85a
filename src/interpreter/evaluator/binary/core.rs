use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Object,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Two numeric operands go to `eval_scalar_op`. Otherwise `==` and `!=`
    /// compare any two values, and `+` concatenates two strings. Every other
    /// combination is an error.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `TypeMismatch` for operands of different types, such as `1 + true`.
    /// - `UnknownInfixOperator` for an operator the operand type does not
    ///   support, such as `true + false` or `"a" - "b"`.
    /// - Any arithmetic error from `eval_scalar_op`.
    ///
    /// # Example
    /// ```
    /// use marmoset::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Object},
    /// };
    ///
    /// let result = Context::eval_infix(InfixOperator::Less, &Object::Integer(5), &Object::Float(10.52), 1);
    /// assert_eq!(result.unwrap(), Object::Boolean(true));
    ///
    /// let joined = Context::eval_infix(InfixOperator::Add, &Object::from("foo"), &Object::from("bar"), 1);
    /// assert_eq!(joined.unwrap(), Object::from("foobar"));
    /// ```
    pub fn eval_infix(op: InfixOperator, left: &Object, right: &Object, line: usize) -> EvalResult<Object> {
        if left.is_numeric() && right.is_numeric() {
            return Self::eval_scalar_op(op, left, right, line);
        }

        match op {
            InfixOperator::Equal => return Ok(Object::Boolean(Self::values_equal(left, right))),
            InfixOperator::NotEqual => return Ok(Object::Boolean(!Self::values_equal(left, right))),
            _ => {},
        }

        if left.type_name() != right.type_name() {
            return Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                    op,
                                                    right: right.type_name(),
                                                    line });
        }

        match (op, left, right) {
            (InfixOperator::Add, Object::String(a), Object::String(b)) => Ok(Object::String(format!("{a}{b}"))),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          op,
                                                          right: right.type_name(),
                                                          line }),
        }
    }
}
