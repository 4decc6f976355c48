/// Operand promotion and operator dispatch.
pub mod core;

/// Integer and float arithmetic.
///
/// The integer path wraps on overflow and rejects zero divisors; the float
/// path follows IEEE 754.
pub mod scalar;
