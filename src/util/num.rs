/// Rounds a value to the nearest integer, halfway cases away from zero.
///
/// The conversion saturates at the bounds of `i64`; NaN becomes `0`.
///
/// ## Example
/// ```
/// use flux::util::num::round_to_i64;
///
/// assert_eq!(round_to_i64(2.5), 3);
/// assert_eq!(round_to_i64(-2.5), -3);
/// assert_eq!(round_to_i64(1.4), 1);
/// assert_eq!(round_to_i64(f64::NAN), 0);
/// assert_eq!(round_to_i64(1e300), i64::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

/// Converts an integer result back to `f64`.
///
/// Values beyond `2^53` lose precision.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a boolean to `1.0` or `0.0`.
#[must_use]
pub const fn bool_to_f64(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Returns `true` for every nonzero value, NaN included.
#[must_use]
pub fn truthy(value: f64) -> bool {
    value != 0.0
}
