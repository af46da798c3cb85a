use std::{collections::BTreeMap, fmt, rc::Rc};

use crate::{
    ast::{BlockStatement, Expression, Identifier},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::Builtin,
        value::{environment::Env, hash_key::HashKey},
    },
    util::num::i64_to_f64,
};

/// A user-defined function together with the scope it was created in.
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body:       BlockStatement,
    /// The defining scope. Calls run in a fresh scope enclosing this one.
    pub env:        Env,
    pub name:       Option<String>,
}

// The captured scope can contain this very function, so it is left out.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// A macro definition. Only ever bound in a macro scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Macro {
    pub parameters: Vec<Identifier>,
    pub body:       BlockStatement,
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce, plus `Error`,
/// which is what [`evaluate`](crate::evaluate) hands back for a failed run.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// An immutable string.
    String(String),
    /// An array of `Object` elements.
    Array(Rc<Vec<Self>>),
    /// A hash from hashable keys to values.
    Hash(Rc<BTreeMap<HashKey, Self>>),
    /// A closure.
    Function(Rc<Function>),
    /// A native function.
    Builtin(Builtin),
    /// A macro, only present in macro scopes during expansion.
    Macro(Rc<Macro>),
    /// An unevaluated expression produced by `quote`.
    Quote(Rc<Expression>),
    /// A runtime failure.
    Error(RuntimeError),
}

impl PartialEq for Object {
    /// Compares values structurally. Functions and macros are only equal to
    /// themselves; builtins compare by name.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Macro(a), Self::Macro(b)) => Rc::ptr_eq(a, b),
            (Self::Quote(a), Self::Quote(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Object {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Object {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<BTreeMap<HashKey, Self>> for Object {
    fn from(v: BTreeMap<HashKey, Self>) -> Self {
        Self::Hash(Rc::new(v))
    }
}

impl From<RuntimeError> for Object {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl Object {
    /// Returns the upper-case type name used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Macro(_) => "MACRO",
            Self::Quote(_) => "QUOTE",
            Self::Error(_) => "ERROR",
        }
    }

    /// Only `false` and `null` are falsy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Returns `true` for integers and floats.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns the value as an `f64` if it is numeric.
    ///
    /// Integers beyond 2^53 lose precision, like any promotion to floating
    /// point.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(i64_to_f64(*n)),
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Renders the value for display.
    ///
    /// Strings render without quotes and errors render as `ERROR: message`,
    /// so callers can tell failures apart from ordinary values.
    ///
    /// # Example
    /// ```
    /// use marmoset::interpreter::value::core::Object;
    ///
    /// let array = Object::from(vec![Object::Integer(1), Object::from("two"), Object::Null]);
    /// assert_eq!(array.render(), "[1, two, null]");
    /// assert_eq!(Object::Float(2.5).render(), "2.5");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::String(s) => f.write_str(s),
            Self::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            },
            Self::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;
                for (i, param) in function.parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") {{ {} }}", function.body)
            },
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Macro(definition) => {
                write!(f, "macro(")?;
                for (i, param) in definition.parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") {{ {} }}", definition.body)
            },
            Self::Quote(expr) => write!(f, "QUOTE({expr})"),
            Self::Error(error) => write!(f, "ERROR: {}", error.message()),
        }
    }
}
