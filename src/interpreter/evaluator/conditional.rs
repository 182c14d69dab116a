use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an `if` statement.
    ///
    /// The condition is coerced to truthiness and exactly one branch runs; the
    /// other is never evaluated, so a fault inside it cannot surface.
    ///
    /// # Parameters
    /// - `condition`: The condition expression.
    /// - `then_branch`: Evaluated when the condition holds.
    /// - `else_branch`: Evaluated otherwise.
    ///
    /// # Returns
    /// The value of the selected branch.
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   then_branch: &Statement,
                   else_branch: &Statement)
                   -> EvalResult<Option<Value>> {
        if self.eval(condition)?.is_truthy() {
            self.eval_statement(then_branch)
        } else {
            self.eval_statement(else_branch)
        }
    }
}
