use std::fmt;

use ordered_float::OrderedFloat;

use crate::interpreter::value::core::Object;

/// A value that can be used as a key in a hash.
///
/// Keys keep their type: `1` and `1.0` are different keys. Floats are wrapped
/// in [`OrderedFloat`] so keys are totally ordered, which also fixes the order
/// in which hashes render.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashKey {
    Integer(i64),
    Float(OrderedFloat<f64>),
    Boolean(bool),
    String(String),
}

impl HashKey {
    /// Converts a runtime value into a key.
    ///
    /// # Returns
    /// `None` for values that are not hashable, such as arrays or functions.
    #[must_use]
    pub fn from_object(value: &Object) -> Option<Self> {
        match value {
            Object::Integer(n) => Some(Self::Integer(*n)),
            Object::Float(x) => Some(Self::Float(OrderedFloat(*x))),
            Object::Boolean(b) => Some(Self::Boolean(*b)),
            Object::String(s) => Some(Self::String(s.clone())),
            _ => None,
        }
    }

    /// Converts the key back into the value it was made from.
    #[must_use]
    pub fn to_object(&self) -> Object {
        match self {
            Self::Integer(n) => Object::Integer(*n),
            Self::Float(x) => Object::Float(x.into_inner()),
            Self::Boolean(b) => Object::Boolean(*b),
            Self::String(s) => Object::String(s.clone()),
        }
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{}", x.into_inner()),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
        }
    }
}
