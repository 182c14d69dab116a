use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{not_arithmetic, real_operands},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Integer (and boolean) operands use checked 64-bit arithmetic. A real
    /// operand promotes both sides to real. Division always promotes, so `7 /
    /// 2` is `3.5`, and a zero divisor is an error whatever its type.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` for a zero divisor.
    /// - `RuntimeError::Overflow` when the result does not fit.
    /// - `RuntimeError::TypeError` when an operand is a loop result.
    ///
    /// # Example
    /// ```
    /// use bounded_calc::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let x = Value::Integer(7);
    /// let y = Value::Integer(2);
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, &x, &y, 1).unwrap();
    /// assert_eq!(result, Value::Real(3.5));
    ///
    /// // Large integers are rounded rather than rejected.
    /// let big = Value::Integer(10_000_000_000_000_000);
    /// let ten = Value::Integer(10);
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, &big, &ten, 1).unwrap();
    /// assert_eq!(result, Value::Real(1e15));
    ///
    /// let zero = Value::Integer(0);
    /// let err = Context::eval_scalar_op(BinaryOperator::Div, &x, &zero, 4).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { line: 4 });
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if op != Div
           && let (Some(a), Some(b)) = (left.as_integer(), right.as_integer())
        {
            let result = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                Mul => a.checked_mul(b),
                _ => return Err(not_arithmetic(op, line)),
            };
            return result.map(Value::Integer)
                         .ok_or(RuntimeError::Overflow { line });
        }

        let (left, right) = real_operands(op, left, right, line)?;
        let result = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                left / right
            },
            _ => return Err(not_arithmetic(op, line)),
        };

        if result.is_finite() {
            Ok(Value::Real(result))
        } else {
            Err(RuntimeError::Overflow { line })
        }
    }
}
