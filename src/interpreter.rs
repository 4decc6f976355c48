/// The evaluator module executes AST nodes.
///
/// The evaluator walks the tree depth first, computes a typed value for each
/// expression and applies assignments to the variable store.
///
/// # Responsibilities
/// - Evaluates every AST node variant with exhaustive dispatch.
/// - Applies integer/float promotion and the two arithmetic paths.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// The lexer reads the raw source text and produces tokens on demand:
/// numbers, identifiers, the `var` keyword, operators and punctuation.
/// Whitespace and comments are skipped.
///
/// # Responsibilities
/// - Converts the input characters into tokens with kind, text and line.
/// - Classifies numeric literals as integer or float.
/// - Reports unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead that encodes
/// operator precedence and the statement grammar.
pub mod parser;
/// The variable store shared by every statement of a program.
pub mod store;
/// Runtime values.
pub mod value;
