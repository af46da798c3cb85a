/// Numeric conversion helpers.
///
/// This module provides the conversions between integer and floating-point
/// types that the evaluator relies on: the integer-to-float promotion used by
/// mixed arithmetic, and a checked conversion from lengths to `i64`.
pub mod num;
