use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{ParseResult, TokenKind},
        parser::Parser,
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `var` statement,
    /// - a nested block,
    /// - a lone `;`, which becomes [`Node::NoOp`].
    ///
    /// Grammar: `statement := var_statement | block | ";"`
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedStatement`] when the current token
    /// starts none of these.
    pub fn parse_statement(&mut self) -> ParseResult<Node> {
        match self.peek_kind() {
            TokenKind::KeywordVar => self.parse_var_statement(),
            TokenKind::LBrace => self.parse_block(),
            TokenKind::Semi => {
                self.advance(TokenKind::Semi)?;
                Ok(Node::NoOp)
            },
            found => {
                let token = self.current();
                Err(ParseError::UnexpectedStatement { found,
                                                      text: token.text.clone(),
                                                      line: token.line })
            },
        }
    }

    /// Parses a `var` statement with one assignment or a parenthesized
    /// group of them.
    ///
    /// A group becomes a [`Node::Block`] whose children are the assignments
    /// in the order they were written.
    ///
    /// Grammar: `var_statement := "var" ( "(" assign_part* ")" | assign_part )`
    pub fn parse_var_statement(&mut self) -> ParseResult<Node> {
        self.advance(TokenKind::KeywordVar)?;

        if self.peek_kind() != TokenKind::LParen {
            return self.parse_assign_part();
        }

        self.advance(TokenKind::LParen)?;
        let mut assignments = Vec::new();
        while self.peek_kind() != TokenKind::RParen {
            assignments.push(self.parse_assign_part()?);
        }
        self.advance(TokenKind::RParen)?;

        Ok(Node::Block { statements: assignments })
    }

    /// Parses `name = expr;`.
    ///
    /// Only a plain identifier may be the target.
    ///
    /// Grammar: `assign_part := IDENTIFIER "=" expr ";"`
    pub fn parse_assign_part(&mut self) -> ParseResult<Node> {
        let target = self.advance(TokenKind::Identifier)?;
        self.advance(TokenKind::Assign)?;
        let value = self.parse_expr()?;
        self.advance(TokenKind::Semi)?;

        Ok(Node::Assignment { target: target.text,
                              value:  Box::new(value),
                              line:   target.line, })
    }
}
