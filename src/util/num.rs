/// Converts an `i64` to the nearest `f64`.
///
/// This is the promotion used whenever an integer meets a float in
/// arithmetic. Magnitudes above 2^53 are rounded.
///
/// ## Example
/// ```
/// use marmoset::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Safely converts a `usize` to an `i64`.
///
/// ## Errors
/// Returns `Err(error)` if the value does not fit.
///
/// ## Parameters
/// - `value`: The length or count to convert.
/// - `error`: The error to return if the value is too large.
///
/// ## Example
/// ```
/// use marmoset::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(3, "too big!"), Ok(3));
/// assert!(usize_to_i64_checked(usize::MAX, "too big!").is_err());
/// ```
pub fn usize_to_i64_checked<E>(value: usize, error: E) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| error)
}
