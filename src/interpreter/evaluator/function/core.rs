use std::fmt;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Flow, catch_return},
            function::{builtin, print},
        },
        value::{
            core::Object,
            environment::{Env, Environment},
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context, a slice of evaluated argument
/// values and the line number. It returns a value wrapped in `EvalResult`.
pub type BuiltinFn = fn(&mut Context, &[Object], usize) -> EvalResult<Object>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` means any number of arguments is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::Variadic => true,
        }
    }
}

/// A native function value.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name:  &'static str,
    pub arity: Arity,
    pub func:  BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Defines builtin functions by generating the `BUILTIN_TABLE` lookup table.
///
/// Each entry gives the name, the arity and the function pointer implementing
/// the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"    => { arity: Arity::Exact(1), func: builtin::len },
    "first"  => { arity: Arity::Exact(1), func: builtin::first },
    "last"   => { arity: Arity::Exact(1), func: builtin::last },
    "rest"   => { arity: Arity::Exact(1), func: builtin::rest },
    "push"   => { arity: Arity::Exact(2), func: builtin::push },
    "add"    => { arity: Arity::Exact(3), func: builtin::add },
    "assert" => { arity: Arity::Exact(1), func: builtin::assert_fn },
    "print"  => { arity: Arity::Variadic, func: print::print },
}

/// Finds a builtin by name.
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .copied()
}

impl Context {
    /// Evaluates a call expression.
    ///
    /// `quote(...)` is handled as a special form and its argument is not
    /// evaluated. Otherwise the callee is evaluated first, then every
    /// argument from left to right.
    pub(crate) fn eval_call(&mut self,
                            function: &Expression,
                            arguments: &[Expression],
                            env: &Env,
                            line: usize)
                            -> Flow<Object> {
        if let Expression::Identifier(ident) = function
           && ident.name == "quote"
        {
            return self.eval_quote(arguments, env, line);
        }

        let callee = self.eval(function, env)?;
        let args = arguments.iter()
                            .map(|argument| self.eval(argument, env))
                            .collect::<Flow<Vec<_>>>()?;

        Ok(self.apply_function(&callee, &args, line)?)
    }

    /// Calls a function or builtin with already evaluated arguments.
    ///
    /// A user function runs in a new scope enclosing the scope it was defined
    /// in, not the caller's, with each parameter bound to its argument. A
    /// `return` inside the body ends the call with that value.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the argument count does not fit.
    /// - `NotAFunction` if `callee` is not callable.
    /// - Any error raised by the body or builtin.
    pub fn apply_function(&mut self, callee: &Object, args: &[Object], line: usize) -> EvalResult<Object> {
        match callee {
            Object::Function(function) => {
                if function.parameters.len() != args.len() {
                    return Err(RuntimeError::ArgumentCountMismatch { got: args.len(),
                                                                     want: function.parameters.len(),
                                                                     line });
                }

                let scope = Environment::new_enclosed(&function.env);
                {
                    let mut scope = scope.borrow_mut();
                    for (param, arg) in function.parameters.iter().zip(args) {
                        scope.set(param.name.clone(), arg.clone());
                    }
                }

                catch_return(self.eval_statements(&function.body.statements, &scope))
            },
            Object::Builtin(builtin) => {
                if !builtin.arity.check(args.len()) {
                    let want = match builtin.arity {
                        Arity::Exact(n) => n,
                        Arity::Variadic => args.len(),
                    };
                    return Err(RuntimeError::ArgumentCountMismatch { got: args.len(),
                                                                     want,
                                                                     line });
                }
                (builtin.func)(self, args, line)
            },
            other => Err(RuntimeError::NotAFunction { kind: other.type_name(),
                                                      line }),
        }
    }
}
