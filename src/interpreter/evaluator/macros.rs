use std::rc::Rc;

use crate::{
    ast::{
        Expression, Program, Statement,
        modify::{Node, modify},
    },
    error::{ExpansionError, RewriteError},
    interpreter::{
        evaluator::core::{Context, catch_return},
        value::{
            core::{Macro, Object},
            environment::{Env, Environment},
        },
    },
};

/// Moves top-level macro definitions out of a program.
///
/// Every `let name = macro(...) { ... }` statement at the top level is removed
/// from `program` and bound as `name` in `macro_env`. Macro literals anywhere
/// else are left alone and fail if they are ever evaluated.
///
/// # Example
/// ```
/// use marmoset::{
///     interpreter::{evaluator::macros::define_macros, value::environment::Environment},
///     parse, tokenize,
/// };
///
/// let (mut program, _) = parse(tokenize("let number = 1; let m = macro(x) { x; }; number;"));
/// let macro_env = Environment::new();
/// define_macros(&mut program, &macro_env);
///
/// assert_eq!(program.statements.len(), 2);
/// assert!(macro_env.borrow().get("m").is_some());
/// assert!(macro_env.borrow().get("number").is_none());
/// ```
pub fn define_macros(program: &mut Program, macro_env: &Env) {
    program.statements.retain(|statement| {
                          let Statement::Let { name,
                                               value: Expression::Macro { parameters, body, .. },
                                               .. } = statement
                          else {
                              return true;
                          };

                          let definition = Macro { parameters: parameters.clone(),
                                                   body:       body.clone(), };
                          macro_env.borrow_mut()
                                   .set(name.name.clone(), Object::Macro(Rc::new(definition)));
                          false
                      });
}

fn lookup_macro(function: &Expression, macro_env: &Env) -> Option<(String, Rc<Macro>)> {
    let Expression::Identifier(ident) = function else {
        return None;
    };
    let bound = macro_env.borrow().get(&ident.name);
    match bound {
        Some(Object::Macro(definition)) => Some((ident.name.clone(), definition)),
        _ => None,
    }
}

impl Context {
    /// Replaces every macro call in a program with the code the macro
    /// produces.
    ///
    /// For a call whose callee names a macro in `macro_env`, each argument is
    /// wrapped unevaluated in a quote and bound to the matching parameter in a
    /// scope enclosing `macro_env`. The macro body is evaluated there and must
    /// produce a quote, whose expression takes the place of the call. Calls to
    /// anything else are kept as they are.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` for a macro called with the wrong number of
    ///   arguments.
    /// - `NotQuote` if a macro body produces anything but a quote.
    /// - `Evaluation` for a runtime error inside a macro body.
    /// - `Rewrite` if the tree cannot be rebuilt.
    ///
    /// No partially expanded program is returned on failure.
    pub fn expand_macros(&mut self, program: Program, macro_env: &Env) -> Result<Program, ExpansionError> {
        let mut expand = |node: Node| -> Result<Node, ExpansionError> {
            let (function, arguments, line) = match node {
                Node::Expression(Expression::Call { function,
                                                    arguments,
                                                    line, }) => (function, arguments, line),
                other => return Ok(other),
            };
            let Some((name, definition)) = lookup_macro(&function, macro_env) else {
                return Ok(Node::Expression(Expression::Call { function,
                                                              arguments,
                                                              line }));
            };

            if definition.parameters.len() != arguments.len() {
                return Err(ExpansionError::ArgumentCountMismatch { name,
                                                                   got: arguments.len(),
                                                                   want: definition.parameters.len(),
                                                                   line });
            }

            let scope = Environment::new_enclosed(macro_env);
            {
                let mut scope = scope.borrow_mut();
                for (param, argument) in definition.parameters.iter().zip(arguments) {
                    scope.set(param.name.clone(), Object::Quote(Rc::new(argument)));
                }
            }

            let expanded = catch_return(self.eval_statements(&definition.body.statements, &scope))?;

            match expanded {
                Object::Quote(expr) => Ok(Node::Expression(Rc::unwrap_or_clone(expr))),
                other => Err(ExpansionError::NotQuote { name,
                                                        found: other.type_name(),
                                                        line }),
            }
        };

        match modify(Node::Program(program), &mut expand)? {
            Node::Program(program) => Ok(program),
            other => Err(RewriteError::WrongCategory { expected: "program",
                                                       found:    other.category(),
                                                       line:     other.line_number(), }.into()),
        }
    }
}
