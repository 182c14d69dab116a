use tracing::debug;

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::clamp_iterations,
};

impl Context {
    /// Evaluates a `for` statement.
    ///
    /// The body runs `min(max(bound, 0), 10)` times. The loop variable is
    /// never bound, so every iteration evaluates the same body.
    ///
    /// A fault while running the body does not escape: it is recorded as a
    /// `RuntimeError::ForLoopFault` and the loop yields no value.
    ///
    /// # Parameters
    /// - `variable`: Name of the loop variable.
    /// - `bound`: The requested number of iterations.
    /// - `body`: The loop body.
    /// - `line`: Line of the `for` keyword.
    ///
    /// # Returns
    /// A sequence holding the body's value from each iteration, or `None`.
    ///
    /// # Example
    /// ```
    /// use bounded_calc::{
    ///     ast::{BinaryOperator, Expr, Statement},
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let body = Statement::Expression { expr: Expr::Number { value: 42, line: 1 },
    ///                                    line: 1, };
    ///
    /// // for i in range(20) do 42
    /// let result = context.eval_for("i", 20, &body, 1).unwrap();
    /// assert_eq!(result.as_sequence().unwrap().len(), 10);
    ///
    /// // for i in range(3) do 1 / 0
    /// let faulty = Statement::Expression {
    ///     expr: Expr::BinaryOp { left:  Box::new(Expr::Number { value: 1, line: 2 }),
    ///                            op:    BinaryOperator::Div,
    ///                            right: Box::new(Expr::Number { value: 0, line: 2 }),
    ///                            line:  2, },
    ///     line: 2,
    /// };
    /// assert_eq!(context.eval_for("i", 3, &faulty, 2), None);
    /// assert!(matches!(context.diagnostics[0], RuntimeError::ForLoopFault { line: 2, .. }));
    /// ```
    pub fn eval_for(&mut self,
                    variable: &str,
                    bound: i64,
                    body: &Statement,
                    line: usize)
                    -> Option<Value> {
        let iterations = clamp_iterations(bound);
        debug!(variable, bound, iterations, "for loop");

        match self.repeat(body, iterations) {
            Ok(value) => value,
            Err(source) => {
                self.report(RuntimeError::ForLoopFault { source: Box::new(source),
                                                         line });
                None
            },
        }
    }

    /// Runs `body` exactly `iterations` times, collecting each value.
    fn repeat(&mut self, body: &Statement, iterations: usize) -> EvalResult<Option<Value>> {
        let mut results = Vec::with_capacity(iterations);

        for _ in 0..iterations {
            let Some(value) = self.eval_statement(body)? else {
                return Ok(None);
            };
            results.push(value);
        }

        Ok(Some(Value::from(results)))
    }
}
