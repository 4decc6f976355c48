use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Token,
        value::Value,
    },
    util::num::{is_float_literal, parse_float_literal, parse_integer_literal},
};

impl Context {
    /// Evaluates a numeric literal token.
    ///
    /// The text is parsed on every call. A literal containing `.` becomes a
    /// float, anything else an integer with radix prefixes honoured (see
    /// [`parse_integer_literal`]).
    ///
    /// # Errors
    /// Returns [`RuntimeError::InvalidLiteral`] when the text does not parse,
    /// for example `1.2.3`, `08` or `0b102`.
    ///
    /// # Example
    /// ```
    /// use numscript::interpreter::{
    ///     evaluator::core::Context,
    ///     lexer::{Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let token = Token::new(TokenKind::Integer, "0b101", 1);
    /// assert_eq!(Context::eval_number_literal(&token).unwrap(), Value::Integer(5));
    ///
    /// let token = Token::new(TokenKind::Float, "2.5", 1);
    /// assert_eq!(Context::eval_number_literal(&token).unwrap(), Value::Float(2.5));
    /// ```
    pub fn eval_number_literal(token: &Token) -> EvalResult<Value> {
        let invalid = || RuntimeError::InvalidLiteral { literal: token.text.clone(),
                                                        line:    token.line, };

        if is_float_literal(&token.text) {
            parse_float_literal(&token.text).map(Value::Float)
                                            .map_err(|_| invalid())
        } else {
            parse_integer_literal(&token.text).map(Value::Integer)
                                              .map_err(|_| invalid())
        }
    }
}
