use thiserror::Error;

/// Lexing and parsing errors.
///
/// Covers unrecognized characters and every grammar violation found while the
/// parser pulls tokens from the lexer.
pub mod parse_error;
/// Evaluation errors.
///
/// Covers malformed literals, integer division by zero, reads of undefined
/// variables, unsupported operand types and broken internal invariants.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that can end a run.
///
/// This is what the public entry points return; the caller decides how to
/// report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source failed to lex or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
