use std::fmt;

use crate::interpreter::lexer::Token;

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`, returns the operand unchanged.
    Plus,
    /// `-x`, flips the sign and keeps the numeric type.
    Negate,
}

/// Infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl BinaryOperator {
    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of the abstract syntax tree.
///
/// The set of variants is closed. Every node owns its children, so a parsed
/// program is a plain tree that is built once, evaluated and dropped.
///
/// Expression variants (`NumberLiteral`, `UnaryOp`, `BinaryOp`,
/// `VariableRef`) produce a value when evaluated. Statement variants
/// (`Assignment`, `Block`, `NoOp`) only have side effects on the variable
/// store.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal. The raw token is kept; its text is parsed when the
    /// node is evaluated.
    NumberLiteral {
        /// The `INTEGER` or `FLOAT` token.
        token: Token,
    },
    /// A prefix `+` or `-`.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// An infix arithmetic operation.
    BinaryOp {
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// Read of a variable.
    VariableRef {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = value;` inside a `var` statement.
    Assignment {
        /// Name of the variable being written.
        target: String,
        /// Expression whose value is stored.
        value:  Box<Self>,
        /// Line number of the target name.
        line:   usize,
    },
    /// An ordered sequence of statements: `{ ... }` or a `var ( ... )`
    /// group.
    Block {
        /// Child statements, executed in order.
        statements: Vec<Self>,
    },
    /// The empty statement `;`.
    NoOp,
}

impl Node {
    /// Source line of the node, where it has one.
    ///
    /// Blocks report the line of their first statement; `NoOp` and empty
    /// blocks have no line.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::NumberLiteral { token } => Some(token.line),
            Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::VariableRef { line, .. }
            | Self::Assignment { line, .. } => Some(*line),
            Self::Block { statements } => statements.iter().find_map(Self::line),
            Self::NoOp => None,
        }
    }
}
