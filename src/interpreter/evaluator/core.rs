use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::{RewriteError, RuntimeError},
    interpreter::{
        evaluator::unary::eval_prefix,
        value::{
            core::{Function, Object},
            environment::{Env, Environment},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Returning `Err` is how an error
/// short-circuits every enclosing evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Why an expression stopped before producing a value.
///
/// Both variants travel on the `Err` side, so every `?` in the evaluator stops
/// a `return` the same way it stops a failure.
#[derive(Debug)]
pub(crate) enum Unwind {
    /// A `return` on its way to the nearest function call, or to the top of
    /// the program.
    Return(Object),
    /// A runtime failure.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl From<RewriteError> for Unwind {
    fn from(error: RewriteError) -> Self {
        Self::Error(error.into())
    }
}

/// Result of evaluating statements and expressions.
pub(crate) type Flow<T> = Result<T, Unwind>;

/// Ends a `return` at a function-call boundary.
///
/// A pending return becomes the value; a failure stays a failure.
pub(crate) fn catch_return(flow: Flow<Object>) -> EvalResult<Object> {
    match flow {
        Ok(value) | Err(Unwind::Return(value)) => Ok(value),
        Err(Unwind::Error(error)) => Err(error),
    }
}

/// Stores the runtime evaluation context.
///
/// Bindings live in [`Env`] scopes that are passed explicitly, so the context
/// itself only owns the sink that `print` writes to.
///
/// ## Usage
///
/// A `Context` is created once and reused for every program evaluated in a
/// session.
///
/// ```
/// use marmoset::{
///     interpreter::{evaluator::core::Context, value::{core::Object, environment::Environment}},
///     parse, tokenize,
/// };
///
/// let (program, errors) = parse(tokenize("let x = 5; let y = 10; x + y;"));
/// assert!(errors.is_empty());
///
/// let mut context = Context::new();
/// let env = Environment::new();
/// assert_eq!(context.evaluate(&program, &env), Object::Integer(15));
/// ```
pub struct Context {
    output: Box<dyn Write>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Creates a context that prints to the given sink.
    #[must_use]
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self { output }
    }

    /// Evaluates a program and returns its value.
    ///
    /// A top-level `return` stops the program and yields the returned value.
    /// Runtime failures never escape as panics; they come back as
    /// [`Object::Error`].
    pub fn evaluate(&mut self, program: &Program, env: &Env) -> Object {
        self.eval_program(program, env)
            .unwrap_or_else(Object::Error)
    }

    /// Evaluates a program, propagating the first runtime error.
    ///
    /// # Returns
    /// The value of the last statement, or `null` for an empty program. A
    /// top-level `return` ends the program with its value.
    pub fn eval_program(&mut self, program: &Program, env: &Env) -> EvalResult<Object> {
        catch_return(self.eval_statements(&program.statements, env))
    }

    /// Evaluates statements in order and yields the last value.
    pub(crate) fn eval_statements(&mut self, statements: &[Statement], env: &Env) -> Flow<Object> {
        let mut result = Object::Null;

        for statement in statements {
            result = self.eval_statement(statement, env)?;
        }

        Ok(result)
    }

    /// Evaluates a block.
    ///
    /// Blocks that declare names get their own scope so their bindings do not
    /// leak into the surrounding one.
    pub(crate) fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> Flow<Object> {
        if block.introduces_bindings() {
            let scope = Environment::new_enclosed(env);
            self.eval_statements(&block.statements, &scope)
        } else {
            self.eval_statements(&block.statements, env)
        }
    }

    /// Evaluates a single statement.
    ///
    /// `let` binds in the current scope and yields the bound value. `return`
    /// evaluates its value (default `null`) and starts unwinding.
    pub(crate) fn eval_statement(&mut self, statement: &Statement, env: &Env) -> Flow<Object> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().set(name.name.clone(), value.clone());
                Ok(value)
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Object::Null,
                };
                Err(Unwind::Return(value))
            },
            Statement::Expression { expr, .. } => self.eval(expr, env),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, identifiers, prefix and
    /// infix operations, assignment, conditionals, loops, function literals,
    /// calls, collections and indexing.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Scope the expression is evaluated in.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the expression or its operands, or a
    /// `return` reached inside it.
    pub(crate) fn eval(&mut self, expr: &Expression, env: &Env) -> Flow<Object> {
        match expr {
            Expression::Identifier(ident) => Ok(Self::eval_identifier(ident, env)?),
            Expression::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expression::Prefix { op, right, line } => {
                let right = self.eval(right, env)?;
                Ok(eval_prefix(*op, &right, *line)?)
            },
            Expression::Infix { left, op, right, line } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Ok(Self::eval_infix(*op, &left, &right, *line)?)
            },
            Expression::Assign { name, value, line } => self.eval_assign(name, value, env, *line),
            Expression::If { condition,
                             consequence,
                             alternative,
                             .. } => self.eval_if(condition, consequence, alternative.as_ref(), env),
            Expression::While { condition, body, .. } => self.eval_while(condition, body, env),
            Expression::Function { parameters,
                                   body,
                                   name,
                                   .. } => {
                Ok(Object::Function(Rc::new(Function { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env),
                                                       name:       name.clone(), })))
            },
            Expression::Call { function,
                               arguments,
                               line, } => self.eval_call(function, arguments, env, *line),
            Expression::Array { elements, .. } => self.eval_array_literal(elements, env),
            Expression::Index { left, index, line } => {
                let left = self.eval(left, env)?;
                let index = self.eval(index, env)?;
                Ok(Self::eval_index(&left, &index, *line)?)
            },
            Expression::Hash { pairs, line } => self.eval_hash_literal(pairs, env, *line),
            Expression::Macro { line, .. } => Err(RuntimeError::MacroOutsideDefinition { line: *line }.into()),
        }
    }

    /// Writes one line to the output sink.
    pub(crate) fn emit(&mut self, text: &str, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                          line })
    }
}
