use std::fmt;

/// Represents a runtime value in the interpreter.
///
/// Numbers are either 64-bit signed integers or 64-bit floats. `Unknown` is
/// what statements evaluate to: they have effects but no value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// No value. Produced by assignments, blocks and empty statements.
    #[default]
    Unknown,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl Value {
    /// Returns the upper-case type tag: `INTEGER`, `FLOAT` or `UNKNOWN`.
    ///
    /// # Example
    /// ```
    /// use numscript::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Float(1.0).type_name(), "FLOAT");
    /// assert_eq!(Value::Unknown.type_name(), "UNKNOWN");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
        }
    }

    /// Returns `true` for `Value::Float`.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns `true` for `Value::Unknown`.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Widens a number to `f64`. Integers are converted, `Unknown` yields
    /// `None`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(x) => Some(*x),
            Self::Unknown => None,
        }
    }

    /// Flips the sign while keeping the type tag.
    ///
    /// Integer negation wraps, so `i64::MIN` stays `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use numscript::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(5).negate(), Value::Integer(-5));
    /// assert_eq!(Value::Float(-2.5).negate(), Value::Float(2.5));
    /// ```
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Integer(n) => Self::Integer(n.wrapping_neg()),
            Self::Float(x) => Self::Float(-x),
            Self::Unknown => Self::Unknown,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
