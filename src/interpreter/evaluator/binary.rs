/// Infix dispatch.
///
/// Routes an operator and its two evaluated operands to the numeric,
/// equality or string handlers and reports type errors.
pub mod core;

/// Numeric arithmetic and ordering.
///
/// Checked integer arithmetic, and floating-point arithmetic for any mix of
/// integer and float operands.
pub mod scalar;

/// Equality of non-numeric values.
pub mod comparison;
