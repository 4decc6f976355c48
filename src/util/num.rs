use std::num::{ParseFloatError, ParseIntError};

/// Radix prefixes recognised on integer literals, in the order they are
/// tried.
const RADIX_PREFIXES: &[(&str, u32)] = &[("0x", 16), ("0o", 8), ("0b", 2)];

/// Returns `true` when a numeric literal denotes a floating-point value.
///
/// Classification is purely syntactic: any literal containing a `.` is a
/// float, everything else is an integer. The lexer uses this to pick the
/// token kind and the evaluator uses it again when parsing the literal, so
/// both stages always agree.
///
/// ## Example
/// ```
/// use numscript::util::num::is_float_literal;
///
/// assert!(is_float_literal("2.5"));
/// assert!(is_float_literal("1."));
/// assert!(!is_float_literal("0x1F"));
/// ```
#[must_use]
pub fn is_float_literal(text: &str) -> bool {
    text.contains('.')
}

/// Parses an integer literal, honouring radix prefixes.
///
/// Prefixes are tried in this order:
/// 1. `0x` - hexadecimal
/// 2. `0o` - octal
/// 3. `0b` - binary
/// 4. a leading `0` followed by more digits - legacy octal
/// 5. anything else - decimal
///
/// ## Errors
/// Returns the underlying [`ParseIntError`] when the digits do not fit the
/// selected radix, when the prefix has no digits, or when the value does not
/// fit into an `i64`.
///
/// ## Example
/// ```
/// use numscript::util::num::parse_integer_literal;
///
/// assert_eq!(parse_integer_literal("0x1F").unwrap(), 31);
/// assert_eq!(parse_integer_literal("0o17").unwrap(), 15);
/// assert_eq!(parse_integer_literal("0b101").unwrap(), 5);
/// assert_eq!(parse_integer_literal("017").unwrap(), 15);
/// assert_eq!(parse_integer_literal("17").unwrap(), 17);
/// assert!(parse_integer_literal("08").is_err());
/// ```
pub fn parse_integer_literal(text: &str) -> Result<i64, ParseIntError> {
    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = text.strip_prefix(prefix) {
            return i64::from_str_radix(digits, *radix);
        }
    }

    if text.len() > 1
       && let Some(digits) = text.strip_prefix('0')
    {
        return i64::from_str_radix(digits, 8);
    }

    text.parse()
}

/// Parses a floating-point literal such as `2.5` or `10.`.
///
/// ## Errors
/// Returns the underlying [`ParseFloatError`] for malformed text like
/// `1.2.3`.
pub fn parse_float_literal(text: &str) -> Result<f64, ParseFloatError> {
    text.parse()
}
