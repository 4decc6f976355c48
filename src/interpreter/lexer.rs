use std::fmt;

use logos::Logos;
use tracing::{debug, trace, warn};

use crate::{error::ParseError, util::num::is_float_literal};

/// Result type used by the lexer and parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// The closed set of token kinds produced by the lexer.
///
/// Whitespace and comments are matched here as well but are skipped by their
/// callbacks, so they never reach the parser.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Numeric literal without a `.`, such as `42`, `017` or `0x1F`.
    ///
    /// Digits, `.` and the radix letters `x`, `b`, `o` are consumed greedily;
    /// after a `0x` prefix hexadecimal digits are consumed too. The callback
    /// reclassifies the literal as [`TokenKind::Float`] when it contains a
    /// `.`.
    #[regex(r"0x[0-9a-fA-F.xbo]*|[0-9][0-9.xbo]*", classify_number)]
    Integer,
    /// Numeric literal containing a `.`, such as `2.5`.
    Float,
    /// `+`
    #[token("+")]
    OpAdd,
    /// `-`
    #[token("-")]
    OpSub,
    /// `*`
    #[token("*")]
    OpMul,
    /// `/`
    #[token("/")]
    OpDiv,
    /// `%`
    #[token("%")]
    OpMod,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semi,
    /// `=`
    #[token("=")]
    Assign,
    /// Names such as `x`, `_tmp` or `größe`.
    ///
    /// A name starts with an ASCII letter, an underscore or any non-ASCII
    /// character that is not whitespace, and continues with the same set plus
    /// ASCII digits.
    #[regex(r"([a-zA-Z_]|[^\x00-\x7F\s])([a-zA-Z0-9_]|[^\x00-\x7F\s])*")]
    Identifier,
    /// `var`
    #[token("var")]
    KeywordVar,
    /// End of input. Never matched; produced by [`Lexer::next_token`].
    Eof,

    /// Any run of Unicode whitespace.
    #[regex(r"\s+", |lex| {
        let newlines = lex.slice().matches('\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    Whitespace,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `/* Block comments. */`
    #[token("/*", skip_block_comment)]
    BlockComment,
}

impl TokenKind {
    /// Returns the upper-case name used in token logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::OpAdd => "OP_ADD",
            Self::OpSub => "OP_SUB",
            Self::OpMul => "OP_MUL",
            Self::OpDiv => "OP_DIV",
            Self::OpMod => "OP_MOD",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Semi => "SEMI",
            Self::Assign => "ASSIGN",
            Self::Identifier => "IDENTIFIER",
            Self::KeywordVar => "KEYWORD_VAR",
            Self::Eof => "EOF",
            Self::Whitespace => "WHITESPACE",
            Self::Comment => "COMMENT",
            Self::BlockComment => "BLOCK_COMMENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

fn classify_number(lex: &logos::Lexer<TokenKind>) -> TokenKind {
    if is_float_literal(lex.slice()) {
        TokenKind::Float
    } else {
        TokenKind::Integer
    }
}

/// Skips a block comment up to and including the closing `*/`.
///
/// A comment left open at the end of input swallows the rest of the source
/// without raising an error.
fn skip_block_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let opened_on = lex.extras.line;
    let remainder = lex.remainder();
    let consumed = match remainder.find("*/") {
        Some(end) => end + 2,
        None => {
            warn!(line = opened_on, "block comment is never closed");
            remainder.len()
        },
    };

    lex.extras.line += remainder[..consumed].matches('\n').count();
    lex.bump(consumed);
    logos::Skip
}

/// A single lexical unit: its kind, its literal text and the line it starts
/// on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The literal source text. `EOF` for the end-of-input token.
    pub text: String,
    /// 1-based line number.
    pub line: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "EOF", line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TOKEN({}, \"{}\")", self.kind, self.text)
    }
}

/// Pull-based scanner over a source string.
///
/// Tokens are produced one at a time on demand; nothing is scanned ahead of
/// the caller. Once the input is exhausted every further call returns an
/// `EOF` token.
///
/// # Example
/// ```
/// use numscript::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x = 0x1F; // trailing");
/// let kinds: Vec<_> = std::iter::repeat_with(|| lexer.next_token().unwrap().kind).take(6)
///                                                                               .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::KeywordVar,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Integer,
///             TokenKind::Semi,
///             TokenKind::Eof]);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner:        logos::Lexer<'src, TokenKind>,
    trace_tokens: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:        TokenKind::lexer_with_extras(source, LexerExtras::default()),
               trace_tokens: false, }
    }

    /// Logs every produced token at `debug` level instead of `trace`.
    #[must_use]
    pub fn with_token_trace(mut self, enabled: bool) -> Self {
        self.trace_tokens = enabled;
        self
    }

    /// The line the scanner is currently on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Scans and returns the next token.
    ///
    /// # Errors
    /// Returns [`ParseError::UnrecognizedCharacter`] for a character that
    /// starts no token.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        let token = match self.inner.next() {
            None => Token::eof(self.line()),
            Some(Ok(kind)) => Token::new(kind, self.inner.slice(), self.line()),
            Some(Err(())) => {
                let found = self.inner.slice().chars().next().unwrap_or('\u{FFFD}');
                return Err(ParseError::UnrecognizedCharacter { found,
                                                               line: self.line() });
            },
        };

        if self.trace_tokens {
            debug!(kind = %token.kind, text = %token.text, line = token.line, "token");
        } else {
            trace!(kind = %token.kind, text = %token.text, line = token.line, "token");
        }

        Ok(token)
    }
}
