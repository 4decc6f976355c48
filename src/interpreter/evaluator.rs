/// Core evaluation logic and context management.
///
/// Contains the evaluation context that owns the variable store, the node
/// dispatch, and statement execution.
pub mod core;

/// Numeric literal evaluation.
///
/// Turns the raw text of `INTEGER` and `FLOAT` tokens into values.
pub mod literal;

/// Unary operator evaluation.
///
/// Implements sign prefixes.
pub mod unary;

/// Binary operator evaluation.
///
/// Handles operand promotion and the integer and float arithmetic paths.
pub mod binary;
