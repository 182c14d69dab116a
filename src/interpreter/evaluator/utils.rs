use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Converts both operands of `op` to reals.
///
/// Loop results never appear as operands in a parsed program, but values
/// handed in by library callers can be sequences.
///
/// # Errors
/// Returns `RuntimeError::TypeError` if an operand is a sequence.
///
/// # Example
/// ```
/// use bounded_calc::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::{evaluator::utils::real_operands, value::core::Value},
/// };
///
/// let pair = real_operands(BinaryOperator::Div, &Value::Integer(3), &Value::Bool(false), 1);
/// assert_eq!(pair.unwrap(), (3.0, 0.0));
///
/// let loop_result = Value::from(vec![Value::Integer(1)]);
/// let err = real_operands(BinaryOperator::Add, &loop_result, &Value::Integer(1), 2).unwrap_err();
/// assert!(matches!(err, RuntimeError::TypeError { line: 2, .. }));
/// ```
pub fn real_operands(op: BinaryOperator,
                     left: &Value,
                     right: &Value,
                     line: usize)
                     -> EvalResult<(f64, f64)> {
    match (left.as_real(), right.as_real()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(RuntimeError::TypeError { details: format!("'{op}' expects numbers"),
                                           line }),
    }
}

/// The error for a comparison operator that reached the arithmetic path.
#[must_use]
pub fn not_arithmetic(op: BinaryOperator, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator"),
                              line }
}
