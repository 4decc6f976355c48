use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{ParseResult, TokenKind},
        parser::Parser,
    },
};

impl Parser<'_> {
    /// Parses a factor: a signed factor, a literal, a variable read or a
    /// parenthesized expression.
    ///
    /// Signs recurse into `factor` itself, so chains such as `--5` or `+-3`
    /// nest right to left.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | INTEGER | FLOAT | IDENTIFIER
    ///             | "(" expr ")"
    /// ```
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedFactor`] when the current token starts
    /// none of these.
    pub fn parse_factor(&mut self) -> ParseResult<Node> {
        match self.peek_kind() {
            kind @ (TokenKind::OpAdd | TokenKind::OpSub) => {
                let line = self.advance(kind)?.line;
                let op = if kind == TokenKind::OpSub {
                    UnaryOperator::Negate
                } else {
                    UnaryOperator::Plus
                };
                let operand = self.parse_factor()?;
                Ok(Node::UnaryOp { op,
                                   operand: Box::new(operand),
                                   line })
            },
            kind @ (TokenKind::Integer | TokenKind::Float) => {
                let token = self.advance(kind)?;
                Ok(Node::NumberLiteral { token })
            },
            TokenKind::Identifier => {
                let token = self.advance(TokenKind::Identifier)?;
                Ok(Node::VariableRef { name: token.text,
                                       line: token.line, })
            },
            TokenKind::LParen => {
                self.advance(TokenKind::LParen)?;
                let expr = self.parse_expr()?;
                self.advance(TokenKind::RParen)?;
                Ok(expr)
            },
            found => {
                let token = self.current();
                Err(ParseError::UnexpectedFactor { found,
                                                   text: token.text.clone(),
                                                   line: token.line })
            },
        }
    }
}
