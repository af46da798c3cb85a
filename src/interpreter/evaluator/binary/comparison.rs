use crate::interpreter::{evaluator::core::Context, value::core::Object};

impl Context {
    /// Equality used by `==` and `!=`.
    ///
    /// Numbers compare by value with integer/float coercion, also inside
    /// arrays. Values of other different types are never equal. Strings,
    /// booleans, null and hashes compare by value; functions compare by
    /// identity.
    #[allow(clippy::float_cmp)]
    pub(crate) fn values_equal(left: &Object, right: &Object) -> bool {
        match (left, right) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (l, r) if l.is_numeric() && r.is_numeric() => l.as_float() == r.as_float(),
            (Object::Array(a), Object::Array(b)) => {
                a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(x, y)| Self::values_equal(x, y))
            },
            _ => left == right,
        }
    }
}
