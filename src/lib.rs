//! # numscript
//!
//! numscript evaluates a small scripting language of arithmetic expressions
//! and `var` assignments. Source text is scanned, parsed into a syntax tree
//! and executed in one pass; the result of a run is the final set of
//! variables.
//!
//! ```
//! use numscript::{interpreter::value::Value, run};
//!
//! let variables = run("{ var ( a = 7 / 2; b = a + 0.5; ) }").unwrap();
//!
//! assert_eq!(variables.get("a"), Some(Value::Integer(3)));
//! assert_eq!(variables.get("b"), Some(Value::Float(3.5)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::{Lexer, Token, TokenKind},
        parser::Parser,
        store::VariableStore,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator types that represent
/// a program as a tree. The tree is built by the parser and walked by the
/// evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Every failure ends the run; these types carry what went wrong and on which
/// line.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, values and variable store.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General helpers shared by several phases.
pub mod util;

/// Options for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Log every token the parser pulls at `debug` level.
    pub trace_tokens: bool,
}

/// Parses and executes a program, returning its final variables.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. Nothing is
/// returned for a failed run, even if some assignments had already happened.
///
/// # Examples
/// ```
/// use numscript::run;
///
/// // Simple program: the result will be calculated and no error should occur.
/// let source = "{ var x = 2 + 2; }";
/// assert!(run(source).is_ok());
///
/// // Example with an intentional error (undefined variable).
/// let source = "{ var y = x + 1; }";
/// assert!(run(source).is_err());
/// ```
pub fn run(source: &str) -> Result<VariableStore, Error> {
    run_with(source, RunOptions::default())
}

/// Like [`run`], with explicit [`RunOptions`].
pub fn run_with(source: &str, options: RunOptions) -> Result<VariableStore, Error> {
    let lexer = Lexer::new(source).with_token_trace(options.trace_tokens);
    let mut parser = Parser::new(lexer)?;
    let program = parser.parse()?;

    let mut context = Context::new();
    context.interpret(&program)?;

    debug!(variables = context.variables().len(), "program finished");
    Ok(context.into_variables())
}

/// Drains a fresh lexer and returns every token up to and including `EOF`.
///
/// The parser is never involved, so this works on text that is not a valid
/// program.
///
/// # Errors
/// Returns a lexical error for an unrecognized character.
///
/// # Examples
/// ```
/// use numscript::dump_tokens;
///
/// let tokens = dump_tokens("x = 1.5 % ;").unwrap();
/// let log: Vec<String> = tokens.iter().map(ToString::to_string).collect();
///
/// assert_eq!(log,
///            ["TOKEN(IDENTIFIER, \"x\")",
///             "TOKEN(ASSIGN, \"=\")",
///             "TOKEN(FLOAT, \"1.5\")",
///             "TOKEN(OP_MOD, \"%\")",
///             "TOKEN(SEMI, \";\")",
///             "TOKEN(EOF, \"EOF\")"]);
/// ```
pub fn dump_tokens(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source).with_token_trace(true);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
