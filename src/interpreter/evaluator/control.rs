use crate::{
    ast::{BlockStatement, Expression},
    interpreter::{
        evaluator::core::{Context, Flow},
        value::{core::Object, environment::Env},
    },
};

impl Context {
    /// Evaluates an `if` expression.
    ///
    /// The condition's truthiness picks the branch. Without an `else`, a falsy
    /// condition yields `null`.
    pub(crate) fn eval_if(&mut self,
                          condition: &Expression,
                          consequence: &BlockStatement,
                          alternative: Option<&BlockStatement>,
                          env: &Env)
                          -> Flow<Object> {
        if self.eval(condition, env)?.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Object::Null)
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// Body values are discarded. A `return` or a failure inside the body ends
    /// the loop; a loop that finishes normally yields `null`.
    pub(crate) fn eval_while(&mut self,
                             condition: &Expression,
                             body: &BlockStatement,
                             env: &Env)
                             -> Flow<Object> {
        while self.eval(condition, env)?.is_truthy() {
            self.eval_block(body, env)?;
        }

        Ok(Object::Null)
    }
}
