use std::collections::BTreeMap;

use crate::{
    ast::{Expression, Identifier, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Flow},
            function::core::lookup_builtin,
        },
        value::{core::Object, environment::Env, hash_key::HashKey},
    },
};

impl Context {
    /// Resolves a name through the scope chain, then the builtins.
    ///
    /// User bindings shadow builtins of the same name.
    pub(crate) fn eval_identifier(ident: &Identifier, env: &Env) -> EvalResult<Object> {
        let bound = env.borrow().get(&ident.name);
        if let Some(value) = bound {
            return Ok(value);
        }

        lookup_builtin(&ident.name).map(Object::Builtin)
                                   .ok_or_else(|| RuntimeError::UnknownIdentifier { name: ident.name.clone(),
                                                                                    line: ident.line, })
    }

    pub(crate) fn eval_literal(value: &LiteralValue) -> Object {
        match value {
            LiteralValue::Integer(n) => Object::Integer(*n),
            LiteralValue::Float(x) => Object::Float(*x),
            LiteralValue::Boolean(b) => Object::Boolean(*b),
            LiteralValue::String(s) => Object::String(s.clone()),
        }
    }

    /// Evaluates `name = value`, updating the nearest existing binding.
    ///
    /// # Errors
    /// `UndeclaredAssignment` if no enclosing scope binds `name`.
    pub(crate) fn eval_assign(&mut self,
                              name: &Identifier,
                              value: &Expression,
                              env: &Env,
                              line: usize)
                              -> Flow<Object> {
        let value = self.eval(value, env)?;

        if env.borrow_mut().assign(&name.name, value.clone()) {
            Ok(value)
        } else {
            Err(RuntimeError::UndeclaredAssignment { name: name.name.clone(),
                                                     line }.into())
        }
    }

    pub(crate) fn eval_array_literal(&mut self, elements: &[Expression], env: &Env) -> Flow<Object> {
        let values = elements.iter()
                             .map(|element| self.eval(element, env))
                             .collect::<Flow<Vec<_>>>()?;

        Ok(values.into())
    }

    /// Evaluates a hash literal, keys and values in source order.
    ///
    /// A repeated key keeps the last value.
    ///
    /// # Errors
    /// `UnhashableKey` if a key evaluates to an array, hash, function or other
    /// non-scalar value.
    pub(crate) fn eval_hash_literal(&mut self,
                                    pairs: &[(Expression, Expression)],
                                    env: &Env,
                                    line: usize)
                                    -> Flow<Object> {
        let mut hash = BTreeMap::new();

        for (key_expr, value_expr) in pairs {
            let key = self.eval(key_expr, env)?;
            let hash_key =
                HashKey::from_object(&key).ok_or_else(|| RuntimeError::UnhashableKey { kind: key.type_name(),
                                                                                        line })?;
            let value = self.eval(value_expr, env)?;
            hash.insert(hash_key, value);
        }

        Ok(hash.into())
    }

    /// Evaluates `left[index]`.
    ///
    /// Arrays take integer indices; a negative or out-of-range index yields
    /// `null`. Hashes take any hashable key and yield `null` for a missing
    /// one.
    ///
    /// # Errors
    /// - `UnhashableKey` for a hash indexed by a non-hashable value.
    /// - `UnsupportedIndex` for any other combination.
    pub(crate) fn eval_index(left: &Object, index: &Object, line: usize) -> EvalResult<Object> {
        match (left, index) {
            (Object::Array(elements), Object::Integer(i)) => {
                Ok(usize::try_from(*i).ok()
                                      .and_then(|i| elements.get(i))
                                      .cloned()
                                      .unwrap_or(Object::Null))
            },
            (Object::Hash(pairs), key) => {
                let key =
                    HashKey::from_object(key).ok_or_else(|| RuntimeError::UnhashableKey { kind: key.type_name(),
                                                                                           line })?;
                Ok(pairs.get(&key).cloned().unwrap_or(Object::Null))
            },
            _ => Err(RuntimeError::UnsupportedIndex { left: left.type_name(),
                                                      index: index.type_name(),
                                                      line }),
        }
    }
}
