use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Object,
    },
};

impl Context {
    /// Evaluates an arithmetic or comparison operation on two numbers.
    ///
    /// Two integers use checked integer arithmetic; division truncates toward
    /// zero. Any other pair is promoted to `f64` and follows IEEE rules, so
    /// float division by zero yields an infinity rather than an error.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand, an integer or float.
    /// - `right`: Right operand, an integer or float.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` for integer division by zero.
    /// - `IntegerOverflow` when an integer result leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use marmoset::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Object},
    /// };
    ///
    /// let result = Context::eval_scalar_op(InfixOperator::Divide, &Object::Integer(7), &Object::Integer(2), 1);
    /// assert_eq!(result.unwrap(), Object::Integer(3));
    ///
    /// let result = Context::eval_scalar_op(InfixOperator::Divide, &Object::Integer(7), &Object::Float(2.0), 1);
    /// assert_eq!(result.unwrap(), Object::Float(3.5));
    /// ```
    pub fn eval_scalar_op(op: InfixOperator, left: &Object, right: &Object, line: usize) -> EvalResult<Object> {
        match (left, right) {
            (Object::Integer(a), Object::Integer(b)) => Self::eval_integer_op(op, *a, *b, line),
            _ => match (left.as_float(), right.as_float()) {
                (Some(a), Some(b)) => Ok(Self::eval_float_op(op, a, b)),
                _ => Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                      op,
                                                      right: right.type_name(),
                                                      line }),
            },
        }
    }

    fn eval_integer_op(op: InfixOperator, a: i64, b: i64, line: usize) -> EvalResult<Object> {
        use InfixOperator::{
            Add, Divide, Equal, Greater, GreaterEqual, Less, LessEqual, Multiply, NotEqual, Subtract,
        };

        let overflow = RuntimeError::IntegerOverflow { line };
        let value = match op {
            Add => a.checked_add(b).ok_or(overflow)?,
            Subtract => a.checked_sub(b).ok_or(overflow)?,
            Multiply => a.checked_mul(b).ok_or(overflow)?,
            Divide => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(b).ok_or(overflow)?
            },
            Less => return Ok(Object::Boolean(a < b)),
            Greater => return Ok(Object::Boolean(a > b)),
            LessEqual => return Ok(Object::Boolean(a <= b)),
            GreaterEqual => return Ok(Object::Boolean(a >= b)),
            Equal => return Ok(Object::Boolean(a == b)),
            NotEqual => return Ok(Object::Boolean(a != b)),
        };

        Ok(Object::Integer(value))
    }

    #[allow(clippy::float_cmp)]
    fn eval_float_op(op: InfixOperator, a: f64, b: f64) -> Object {
        match op {
            InfixOperator::Add => Object::Float(a + b),
            InfixOperator::Subtract => Object::Float(a - b),
            InfixOperator::Multiply => Object::Float(a * b),
            InfixOperator::Divide => Object::Float(a / b),
            InfixOperator::Less => Object::Boolean(a < b),
            InfixOperator::Greater => Object::Boolean(a > b),
            InfixOperator::LessEqual => Object::Boolean(a <= b),
            InfixOperator::GreaterEqual => Object::Boolean(a >= b),
            InfixOperator::Equal => Object::Boolean(a == b),
            InfixOperator::NotEqual => Object::Boolean(a != b),
        }
    }
}
