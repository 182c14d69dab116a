use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::real_operands,
        },
        value::core::Value,
    },
};

/// Maps a relational operator and the ordering of its operands to the final
/// boolean.
///
/// An unordered pair (`None`) is only ever unequal.
///
/// # Errors
/// Returns `RuntimeError::TypeError` for an arithmetic operator.
pub fn relation_holds(op: BinaryOperator,
                      ordering: Option<Ordering>,
                      line: usize)
                      -> EvalResult<bool> {
    Ok(match op {
        BinaryOperator::Less => ordering == Some(Ordering::Less),
        BinaryOperator::Greater => ordering == Some(Ordering::Greater),
        BinaryOperator::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOperator::GreaterEqual => {
            matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
        },
        BinaryOperator::Equal => ordering == Some(Ordering::Equal),
        BinaryOperator::NotEqual => ordering != Some(Ordering::Equal),
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
            return Err(RuntimeError::TypeError { details: format!("'{op}' is not a comparison"),
                                                 line });
        },
    })
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Integers and booleans compare exactly as integers, so `true == 1`
    /// holds. If either side is real, both sides are promoted to real first.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use bounded_calc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Real(2.5);
    /// let b = Value::Integer(3);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal,
    ///                                       &Value::Bool(true),
    ///                                       &Value::Integer(1),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let ordering = match (left.as_integer(), right.as_integer()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => {
                let (a, b) = real_operands(op, left, right, line)?;
                a.partial_cmp(&b)
            },
        };

        Ok(Value::Bool(relation_holds(op, ordering, line)?))
    }
}
