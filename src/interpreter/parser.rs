/// Parser state and the token-consumption primitives.
///
/// Holds the lexer and the single token of lookahead, and exposes the
/// top-level `parse` entry point.
pub mod core;

/// Statement parsing.
///
/// Implements `var` statements, single and grouped assignments, and the empty
/// statement.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences, including the program itself.
pub mod block;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels as
/// left-associative loops.
pub mod binary;

/// Unary operator and operand parsing.
///
/// Handles sign prefixes, literals, variable reads and parenthesized
/// expressions.
pub mod unary;

pub use self::core::Parser;
