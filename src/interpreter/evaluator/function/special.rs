use crate::{
    error::Arity,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
    util::num::round_to_i64,
};

/// The Euler beta function `B(x, y) = Γ(x) Γ(y) / Γ(x + y)`.
///
/// Computed through `lgamma` so large arguments do not overflow the
/// intermediate gamma values.
///
/// # Example
/// ```
/// use flux::interpreter::evaluator::function::special::beta;
///
/// let b = beta(&[2.0, 3.0]).unwrap();
/// assert!((b - 1.0 / 12.0).abs() < 1e-12);
/// ```
pub fn beta(args: &[f64]) -> EvalResult<f64> {
    check_arity("beta", args, Arity::Exact(2))?;

    let (x, y) = (args[0], args[1]);
    let (ln_x, sign_x) = libm::lgamma_r(x);
    let (ln_y, sign_y) = libm::lgamma_r(y);
    let (ln_xy, sign_xy) = libm::lgamma_r(x + y);
    let sign = f64::from(sign_x * sign_y * sign_xy);

    Ok(sign * (ln_x + ln_y - ln_xy).exp())
}

/// Rounds a Bessel order to the nearest `i32`, saturating.
#[allow(clippy::cast_possible_truncation)]
fn order(value: f64) -> i32 {
    round_to_i64(value).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// `cyl_bessel_j(n, x)`: Bessel function of the first kind, `J_n(x)`.
///
/// The order is rounded to an integer.
///
/// # Example
/// ```
/// use flux::interpreter::evaluator::function::special::cyl_bessel_j;
///
/// assert_eq!(cyl_bessel_j(&[0.0, 0.0]).unwrap(), 1.0);
/// assert_eq!(cyl_bessel_j(&[1.0, 0.0]).unwrap(), 0.0);
/// ```
pub fn cyl_bessel_j(args: &[f64]) -> EvalResult<f64> {
    check_arity("cyl_bessel_j", args, Arity::Exact(2))?;
    Ok(libm::jn(order(args[0]), args[1]))
}

/// `cyl_neumann(n, x)`: Bessel function of the second kind, `Y_n(x)`.
///
/// The order is rounded to an integer. `Y_n(0)` is negative infinity.
pub fn cyl_neumann(args: &[f64]) -> EvalResult<f64> {
    check_arity("cyl_neumann", args, Arity::Exact(2))?;
    Ok(libm::yn(order(args[0]), args[1]))
}
