use thiserror::Error;

use crate::ast::BinaryOperator;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A numeric literal does not parse under its inferred radix.
    #[error("Error on line {line}: Invalid numeric literal '{literal}'.")]
    InvalidLiteral {
        /// The literal text as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer division or modulo with a zero divisor.
    #[error("Error on line {line}: Division by zero in '{op}'.")]
    DivisionByZero {
        /// The operator that was applied.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Read of a variable that was never assigned.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands it is not defined for.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The evaluator met a node in a position the parser never produces.
    #[error("Error on line {line}: Internal error: {details}.")]
    InternalInvariant {
        /// Description of the violated invariant.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
