use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Object, hash_key::HashKey},
    },
    util::num::usize_to_i64_checked,
};

/// Views `args` as exactly `N` arguments.
///
/// The call path checks arities before a builtin runs, but the builtins are
/// public and can be handed any slice.
fn arguments<const N: usize>(args: &[Object], line: usize) -> EvalResult<&[Object; N]> {
    args.try_into()
        .map_err(|_| RuntimeError::ArgumentCountMismatch { got: args.len(),
                                                           want: N,
                                                           line })
}

fn expect_array<'a>(function: &'static str, value: &'a Object, line: usize) -> EvalResult<&'a Rc<Vec<Object>>> {
    match value {
        Object::Array(elements) => Ok(elements),
        other => Err(RuntimeError::InvalidArgument { function,
                                                     expected: "ARRAY",
                                                     found: other.type_name(),
                                                     line }),
    }
}

/// Returns the length of a string, array or hash.
///
/// Strings count characters, not bytes.
///
/// # Example
/// ```
/// use marmoset::interpreter::{
///     evaluator::{core::Context, function::builtin::len},
///     value::core::Object,
/// };
///
/// let mut context = Context::new();
/// assert_eq!(len(&mut context, &[Object::from("héllo")], 1).unwrap(), Object::Integer(5));
/// assert!(len(&mut context, &[Object::Integer(1)], 1).is_err());
/// assert!(len(&mut context, &[], 1).is_err());
/// ```
pub fn len(_: &mut Context, args: &[Object], line: usize) -> EvalResult<Object> {
    let [value] = arguments::<1>(args, line)?;
    let count = match value {
        Object::String(s) => s.chars().count(),
        Object::Array(elements) => elements.len(),
        Object::Hash(pairs) => pairs.len(),
        other => {
            return Err(RuntimeError::InvalidArgument { function: "len",
                                                       expected: "STRING, ARRAY or HASH",
                                                       found: other.type_name(),
                                                       line });
        },
    };

    Ok(Object::Integer(usize_to_i64_checked(count, RuntimeError::IntegerOverflow { line })?))
}

/// Returns the first element of an array, or `null` if it is empty.
pub fn first(_: &mut Context, args: &[Object], line: usize) -> EvalResult<Object> {
    let [array] = arguments::<1>(args, line)?;
    let elements = expect_array("first", array, line)?;
    Ok(elements.first().cloned().unwrap_or(Object::Null))
}

/// Returns the last element of an array, or `null` if it is empty.
pub fn last(_: &mut Context, args: &[Object], line: usize) -> EvalResult<Object> {
    let [array] = arguments::<1>(args, line)?;
    let elements = expect_array("last", array, line)?;
    Ok(elements.last().cloned().unwrap_or(Object::Null))
}

/// Returns a new array without the first element, or `null` if the array is
/// empty.
pub fn rest(_: &mut Context, args: &[Object], line: usize) -> EvalResult<Object> {
    let [array] = arguments::<1>(args, line)?;
    let elements = expect_array("rest", array, line)?;
    match elements.split_first() {
        Some((_, tail)) => Ok(tail.to_vec().into()),
        None => Ok(Object::Null),
    }
}

/// Returns a new array with the value appended. The original is unchanged.
pub fn push(_: &mut Context, args: &[Object], line: usize) -> EvalResult<Object> {
    let [array, value] = arguments::<2>(args, line)?;
    let elements = expect_array("push", array, line)?;

    let mut extended = Vec::with_capacity(elements.len() + 1);
    extended.extend(elements.iter().cloned());
    extended.push(value.clone());

    Ok(extended.into())
}

/// Returns a new hash with `key` mapped to `value`. The original is unchanged.
///
/// # Example
/// ```
/// use marmoset::interpreter::{
///     evaluator::{core::Context, function::builtin::add},
///     value::core::Object,
/// };
///
/// let mut context = Context::new();
/// let empty = Object::from(std::collections::BTreeMap::new());
/// let hash = add(&mut context, &[empty, Object::from("a"), Object::Integer(1)], 1).unwrap();
/// assert_eq!(hash.render(), "{a: 1}");
/// ```
pub fn add(_: &mut Context, args: &[Object], line: usize) -> EvalResult<Object> {
    let [hash, key, value] = arguments::<3>(args, line)?;
    let Object::Hash(pairs) = hash else {
        return Err(RuntimeError::InvalidArgument { function: "add",
                                                   expected: "HASH",
                                                   found: hash.type_name(),
                                                   line });
    };
    let key = HashKey::from_object(key).ok_or_else(|| RuntimeError::UnhashableKey { kind: key.type_name(),
                                                                                    line })?;

    let mut updated = pairs.as_ref().clone();
    updated.insert(key, value.clone());

    Ok(updated.into())
}

/// Fails unless the argument is truthy. Returns `null`.
pub fn assert_fn(_: &mut Context, args: &[Object], line: usize) -> EvalResult<Object> {
    let [condition] = arguments::<1>(args, line)?;
    if condition.is_truthy() {
        Ok(Object::Null)
    } else {
        Err(RuntimeError::AssertionFailed { line })
    }
}
