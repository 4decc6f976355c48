use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during lexing or parsing.
///
/// None of these are recovered from: the first one aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("Error on line {line}: Unrecognized character '{found}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        found: char,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A token of a specific kind was required but another one was found.
    #[error("Error on line {line}: Syntax error, expected {expected} but found {found} (\"{text}\").")]
    UnexpectedToken {
        /// The kind the grammar required at this point.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// Literal text of the token that was found.
        text:     String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No statement alternative starts with the current token.
    #[error("Error on line {line}: Expected a statement ('var', '{{' or ';') but found {found} (\"{text}\").")]
    UnexpectedStatement {
        /// The kind actually found.
        found: TokenKind,
        /// Literal text of the token that was found.
        text:  String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// No operand alternative starts with the current token.
    #[error("Error on line {line}: Expected a number, variable, sign or '(' but found {found} (\"{text}\").")]
    UnexpectedFactor {
        /// The kind actually found.
        found: TokenKind,
        /// Literal text of the token that was found.
        text:  String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedStatement { line, .. }
            | Self::UnexpectedFactor { line, .. } => *line,
        }
    }
}
