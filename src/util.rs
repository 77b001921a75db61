/// Numeric conversion helpers.
///
/// Provides the integer coercion used by the bitwise operators and by the
/// integer builtins (`gcd`, `lcm`), and the conversion back to `f64`.
pub mod num;
