use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an operator on two integers.
    ///
    /// `+`, `-` and `*` wrap around on overflow. `/` truncates toward zero
    /// and `%` takes the sign of the dividend. Both fail on a zero divisor.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] for `/` or `%` with a zero
    /// right operand.
    ///
    /// # Example
    /// ```
    /// use numscript::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_integer_op(BinaryOperator::Div, -7, 2, 1).unwrap(), -3);
    /// assert_eq!(Context::eval_integer_op(BinaryOperator::Mod, -7, 2, 1).unwrap(), -1);
    /// assert!(Context::eval_integer_op(BinaryOperator::Mod, 7, 0, 1).is_err());
    /// ```
    pub fn eval_integer_op(op: BinaryOperator,
                           left: i64,
                           right: i64,
                           line: usize)
                           -> EvalResult<i64> {
        match op {
            BinaryOperator::Add => Ok(left.wrapping_add(right)),
            BinaryOperator::Sub => Ok(left.wrapping_sub(right)),
            BinaryOperator::Mul => Ok(left.wrapping_mul(right)),
            BinaryOperator::Div | BinaryOperator::Mod if right == 0 => {
                Err(RuntimeError::DivisionByZero { op, line })
            },
            BinaryOperator::Div => Ok(left.wrapping_div(right)),
            BinaryOperator::Mod => Ok(left.wrapping_rem(right)),
        }
    }

    /// Evaluates an operator on two floats.
    ///
    /// Division by zero yields the IEEE result (`inf`, `-inf` or `NaN`).
    ///
    /// # Errors
    /// Returns [`RuntimeError::TypeError`] for `%`, which is not defined on
    /// floats.
    pub fn eval_float_op(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => Ok(left / right),
            BinaryOperator::Mod => {
                Err(RuntimeError::TypeError { details: format!("'{op}' is not defined for FLOAT operands"),
                                              line })
            },
        }
    }
}
