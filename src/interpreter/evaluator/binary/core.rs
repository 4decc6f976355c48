use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// The result is a float if either operand is a float, and an integer
    /// otherwise. Integer operands are widened to `f64` before the float
    /// path runs.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use numscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Float(2.5), 1);
    /// assert_eq!(sum.unwrap(), Value::Float(5.5));
    ///
    /// let quotient = Context::eval_binary(BinaryOperator::Div, Value::Integer(7), Value::Integer(2), 1);
    /// assert_eq!(quotient.unwrap(), Value::Integer(3));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(l), Value::Integer(r)) => {
                Self::eval_integer_op(op, l, r, line).map(Value::Integer)
            },
            _ if left.is_float() || right.is_float() => {
                let (Some(l), Some(r)) = (left.as_float(), right.as_float()) else {
                    return Err(Self::unknown_operand(op, left, right, line));
                };
                Self::eval_float_op(op, l, r, line).map(Value::Float)
            },
            _ => Err(Self::unknown_operand(op, left, right, line)),
        }
    }

    fn unknown_operand(op: BinaryOperator, left: Value, right: Value, line: usize) -> RuntimeError {
        RuntimeError::InternalInvariant { details: format!("'{op}' applied to {} and {}",
                                                           left.type_name(),
                                                           right.type_name()),
                                          line }
    }
}
