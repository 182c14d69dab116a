use tracing::error;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The language has no variables, so the only state a run carries is the list
/// of faults it recovered from.
///
/// ## Usage
///
/// A `Context` is created for each program and dropped afterwards. Nothing is
/// shared between runs, so evaluating the same program twice gives the same
/// result and the same diagnostics.
#[derive(Debug, Default)]
pub struct Context {
    /// Faults recorded during evaluation, in the order they arose.
    pub diagnostics: Vec<RuntimeError>,
}

impl Context {
    /// Creates a new evaluation context with no recorded faults.
    #[must_use]
    pub const fn new() -> Self {
        Self { diagnostics: Vec::new() }
    }

    /// Evaluates a whole program.
    ///
    /// A fault that reaches the program root is recorded and the program
    /// yields no value; this function never fails.
    ///
    /// # Example
    /// ```
    /// use bounded_calc::{
    ///     ast::{Expr, Statement},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let program = Statement::Expression { expr: Expr::Number { value: 4, line: 1 },
    ///                                       line: 1, };
    ///
    /// assert_eq!(context.eval_program(&program), Some(Value::Integer(4)));
    /// assert!(context.diagnostics.is_empty());
    /// ```
    pub fn eval_program(&mut self, program: &Statement) -> Option<Value> {
        match self.eval_statement(program) {
            Ok(value) => value,
            Err(e) => {
                self.report(e);
                None
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Expressions always produce a value: a literal, the value of a
    /// parenthesized expression, or the result of a binary operator applied
    /// to both (always evaluated) operands.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed `Value`.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Integer(*value)),
            Expr::Group { expr, .. } => self.eval(expr),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for statements that yield a result, or `None` when a
    /// `for` loop somewhere inside recovered from a fault.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Expression { expr, .. } => Ok(Some(self.eval(expr)?)),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.eval_if(condition, then_branch, else_branch),
            Statement::While { condition, body, .. } => self.eval_while(condition, body),
            Statement::For { variable,
                             bound,
                             body,
                             line, } => Ok(self.eval_for(variable, *bound, body, *line)),
        }
    }

    /// Logs a fault and keeps it for the caller.
    pub(crate) fn report(&mut self, fault: RuntimeError) {
        error!("{fault}");
        self.diagnostics.push(fault);
    }
}
