use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Object},
};

/// Applies a prefix operator to an evaluated operand.
///
/// `!` negates truthiness and works on any value. `-` negates integers and
/// floats.
///
/// # Errors
/// - `IntegerOverflow` when negating `i64::MIN`.
/// - `UnknownPrefixOperator` when negating a non-numeric value.
pub fn eval_prefix(op: PrefixOperator, right: &Object, line: usize) -> EvalResult<Object> {
    match (op, right) {
        (PrefixOperator::Not, value) => Ok(Object::Boolean(!value.is_truthy())),
        (PrefixOperator::Negate, Object::Integer(n)) => {
            n.checked_neg()
             .map(Object::Integer)
             .ok_or(RuntimeError::IntegerOverflow { line })
        },
        (PrefixOperator::Negate, Object::Float(x)) => Ok(Object::Float(-x)),
        (PrefixOperator::Negate, other) => Err(RuntimeError::UnknownPrefixOperator { op,
                                                                                    operand: other.type_name(),
                                                                                    line }),
    }
}
