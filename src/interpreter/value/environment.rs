use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Object;

/// A shared, mutable handle to a scope.
///
/// Closures keep their defining scope alive through this handle, so a scope
/// lives as long as any function or enclosed scope still refers to it.
pub type Env = Rc<RefCell<Environment>>;

/// One scope in a chain of lexical scopes.
///
/// Names are unique within a scope and the last `set` wins. Lookups that miss
/// locally continue in the enclosing scope.
///
/// # Example
/// ```
/// use marmoset::interpreter::value::{core::Object, environment::Environment};
///
/// let global = Environment::new();
/// global.borrow_mut().set("x", Object::Integer(1));
///
/// let local = Environment::new_enclosed(&global);
/// local.borrow_mut().set("y", Object::Integer(2));
///
/// assert_eq!(local.borrow().get("x"), Some(Object::Integer(1)));
/// assert_eq!(global.borrow().get("y"), None);
///
/// assert!(local.borrow_mut().assign("x", Object::Integer(5)));
/// assert_eq!(global.borrow().get("x"), Some(Object::Integer(5)));
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates an empty top-level scope.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty scope nested inside `outer`.
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Resolves `name`, walking outward through the enclosing scopes.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }

        self.outer
            .as_ref()
            .and_then(|outer| outer.borrow().get(name))
    }

    /// Binds `name` in this scope, replacing any previous local binding.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }

    /// Updates the nearest existing binding of `name`.
    ///
    /// # Returns
    /// `false` if no scope in the chain binds `name`; nothing is changed.
    pub fn assign(&mut self, name: &str, value: Object) -> bool {
        if let Some(slot) = self.store.get_mut(name) {
            *slot = value;
            return true;
        }

        self.outer
            .as_ref()
            .is_some_and(|outer| outer.borrow_mut().assign(name, value))
    }
}
