use std::mem;

use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::lexer::{Lexer, ParseResult, Token, TokenKind},
};

/// Recursive-descent parser with one token of lookahead.
///
/// Tokens are pulled from the lexer only when the current one is consumed,
/// so lexing and parsing interleave. Grammar rules live in sibling modules as
/// further `impl Parser` blocks.
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// Returns a lexical error if the very first token cannot be scanned.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses a whole program and returns its root [`Node::Block`].
    ///
    /// Grammar: `program := block EOF`
    ///
    /// # Errors
    /// Returns the first lexical or syntax error met; there is no recovery.
    ///
    /// # Example
    /// ```
    /// use numscript::{
    ///     ast::Node,
    ///     interpreter::{lexer::Lexer, parser::Parser},
    /// };
    ///
    /// let mut parser = Parser::new(Lexer::new("{ ; }")).unwrap();
    /// let program = parser.parse().unwrap();
    ///
    /// assert_eq!(program, Node::Block { statements: vec![Node::NoOp] });
    /// ```
    pub fn parse(&mut self) -> ParseResult<Node> {
        let program = self.parse_block()?;
        self.advance(TokenKind::Eof)?;

        if let Node::Block { statements } = &program {
            debug!(statements = statements.len(), "parsed program");
        }
        Ok(program)
    }

    /// The token currently under the cursor.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Kind of the token currently under the cursor.
    pub(in crate::interpreter::parser) const fn peek_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Consumes the current token if it has the `expected` kind.
    ///
    /// On success the consumed token is returned and the next one is pulled
    /// from the lexer.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] naming both kinds on a
    /// mismatch, or a lexical error from reading the next token.
    pub fn advance(&mut self, expected: TokenKind) -> ParseResult<Token> {
        if self.current.kind != expected {
            return Err(ParseError::UnexpectedToken { expected,
                                                     found: self.current.kind,
                                                     text: self.current.text.clone(),
                                                     line: self.current.line });
        }

        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }
}
