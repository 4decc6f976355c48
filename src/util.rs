/// Numeric literal helpers.
///
/// This module owns the one place where literal text is classified as integer
/// or float and where radix-prefixed integer literals are decoded. Both the
/// lexer and the evaluator go through these helpers so that classification is
/// computed the same way in every stage.
pub mod num;
