use crate::{
    ast::Node,
    interpreter::{
        lexer::{ParseResult, TokenKind},
        parser::Parser,
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// Statements are parsed until the closing `}`. Running into the end of
    /// input first is reported by the statement parser, since `EOF` starts no
    /// statement.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Returns
    /// A [`Node::Block`] holding the statements in source order.
    pub fn parse_block(&mut self) -> ParseResult<Node> {
        self.advance(TokenKind::LBrace)?;

        let mut statements = Vec::new();
        while self.peek_kind() != TokenKind::RBrace {
            statements.push(self.parse_statement()?);
        }

        self.advance(TokenKind::RBrace)?;
        Ok(Node::Block { statements })
    }
}
