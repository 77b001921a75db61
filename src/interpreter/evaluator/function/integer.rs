use crate::{
    error::Arity,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
    util::num::round_to_i64,
};

/// Euclid's algorithm on magnitudes.
const fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Rounds both arguments to integers and returns their magnitudes.
fn integer_pair(name: &str, args: &[f64]) -> EvalResult<(u64, u64)> {
    check_arity(name, args, Arity::Exact(2))?;
    Ok((round_to_i64(args[0]).unsigned_abs(), round_to_i64(args[1]).unsigned_abs()))
}

/// Greatest common divisor of the arguments rounded to integers.
///
/// The result is never negative; `gcd(0, 0)` is `0`.
///
/// # Example
/// ```
/// use flux::interpreter::evaluator::function::integer::gcd;
///
/// assert_eq!(gcd(&[12.0, -18.0]).unwrap(), 6.0);
/// assert_eq!(gcd(&[7.4, 0.0]).unwrap(), 7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn gcd(args: &[f64]) -> EvalResult<f64> {
    let (a, b) = integer_pair("gcd", args)?;
    Ok(gcd_u64(a, b) as f64)
}

/// Least common multiple of the arguments rounded to integers.
///
/// Zero if either argument rounds to zero. Saturates instead of overflowing.
///
/// # Example
/// ```
/// use flux::interpreter::evaluator::function::integer::lcm;
///
/// assert_eq!(lcm(&[4.0, 6.0]).unwrap(), 12.0);
/// assert_eq!(lcm(&[0.0, 6.0]).unwrap(), 0.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn lcm(args: &[f64]) -> EvalResult<f64> {
    let (a, b) = integer_pair("lcm", args)?;
    if a == 0 || b == 0 {
        return Ok(0.0);
    }
    Ok((a / gcd_u64(a, b)).saturating_mul(b) as f64)
}
