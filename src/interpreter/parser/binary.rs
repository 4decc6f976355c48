use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{ParseResult, TokenKind},
        parser::Parser,
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// The loop folds operands into a left-leaning tree, so `10 - 3 - 2` is
    /// `(10 - 3) - 2`.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`
    pub fn parse_expr(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_term()?;

        while let Some(op) = binary_operator(self.peek_kind())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = self.advance(self.peek_kind())?.line;
            let right = self.parse_term()?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }

    /// Parses multiplication, division and modulo.
    ///
    /// Grammar: `term := factor (("*" | "/" | "%") factor)*`
    pub fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;

        while let Some(op) = binary_operator(self.peek_kind())
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = self.advance(self.peek_kind())?.line;
            let right = self.parse_factor()?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(left)
    }
}

/// Maps a token kind to its binary operator, if it is one.
///
/// # Example
/// ```
/// use numscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::binary_operator},
/// };
///
/// assert_eq!(binary_operator(TokenKind::OpMod), Some(BinaryOperator::Mod));
/// assert_eq!(binary_operator(TokenKind::Semi), None);
/// ```
#[must_use]
pub const fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::OpAdd => Some(BinaryOperator::Add),
        TokenKind::OpSub => Some(BinaryOperator::Sub),
        TokenKind::OpMul => Some(BinaryOperator::Mul),
        TokenKind::OpDiv => Some(BinaryOperator::Div),
        TokenKind::OpMod => Some(BinaryOperator::Mod),
        _ => None,
    }
}
