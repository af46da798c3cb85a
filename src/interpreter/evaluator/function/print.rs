use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Object,
};

/// Writes each argument to the context's output, one per line.
///
/// Values are formatted with their `Display` rendering, so strings appear
/// without quotes. Returns `null`.
///
/// # Errors
/// `Output` if the sink cannot be written to.
pub fn print(context: &mut Context, args: &[Object], line: usize) -> EvalResult<Object> {
    for arg in args {
        context.emit(&arg.render(), line)?;
    }

    Ok(Object::Null)
}
