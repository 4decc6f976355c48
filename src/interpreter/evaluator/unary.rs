use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Context, value::Value},
};

impl Context {
    /// Applies a sign prefix to a value.
    ///
    /// `-` flips the sign and keeps the type tag; `+` returns the value
    /// unchanged.
    ///
    /// # Example
    /// ```
    /// use numscript::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, Value::Integer(5));
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Plus, Value::Float(-1.5));
    /// assert_eq!(v, Value::Float(-1.5));
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: Value) -> Value {
        match op {
            UnaryOperator::Negate => value.negate(),
            UnaryOperator::Plus => value,
        }
    }
}
