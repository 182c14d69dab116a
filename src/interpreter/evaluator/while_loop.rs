use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::MAX_ITERATIONS,
};

impl Context {
    /// Evaluates a `while` statement.
    ///
    /// The condition is checked before every iteration and the body runs at
    /// most [`MAX_ITERATIONS`] times, so `while (1 == 1) do 100` terminates
    /// with ten results.
    ///
    /// If the body yields no value the loop stops and yields none either.
    ///
    /// # Returns
    /// A sequence holding the body's value from each iteration.
    ///
    /// # Example
    /// ```
    /// use bounded_calc::{
    ///     ast::{BinaryOperator, Expr, Statement},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    ///
    /// // while (1 == 1) do 100
    /// let condition = Expr::BinaryOp { left:  Box::new(Expr::Number { value: 1, line: 1 }),
    ///                                  op:    BinaryOperator::Equal,
    ///                                  right: Box::new(Expr::Number { value: 1, line: 1 }),
    ///                                  line:  1, };
    /// let body = Statement::Expression { expr: Expr::Number { value: 100, line: 1 },
    ///                                    line: 1, };
    ///
    /// let result = context.eval_while(&condition, &body).unwrap().unwrap();
    ///
    /// assert_eq!(result.as_sequence().unwrap(), vec![Value::Integer(100); 10].as_slice());
    /// ```
    pub fn eval_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<Option<Value>> {
        let mut results = Vec::new();

        while results.len() < MAX_ITERATIONS && self.eval(condition)?.is_truthy() {
            let Some(value) = self.eval_statement(body)? else {
                return Ok(None);
            };
            results.push(value);
        }

        debug!(iterations = results.len(), "while loop finished");
        Ok(Some(Value::from(results)))
    }
}
