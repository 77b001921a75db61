use crate::{
    error::Arity,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
};

/// `lerp(a, b, t)`: linear interpolation, `a` at `t = 0` and `b` at `t = 1`.
///
/// Values of `t` outside `[0, 1]` extrapolate.
///
/// # Example
/// ```
/// use flux::interpreter::evaluator::function::interpolate::lerp;
///
/// assert_eq!(lerp(&[10.0, 20.0, 0.25]).unwrap(), 12.5);
/// assert_eq!(lerp(&[10.0, 20.0, 1.0]).unwrap(), 20.0);
/// ```
pub fn lerp(args: &[f64]) -> EvalResult<f64> {
    check_arity("lerp", args, Arity::Exact(3))?;

    let (a, b, t) = (args[0], args[1], args[2]);
    if t == 1.0 {
        return Ok(b);
    }
    Ok(t.mul_add(b - a, a))
}

/// `midpoint(a, b)`: the average of `a` and `b` without intermediate overflow.
pub fn midpoint(args: &[f64]) -> EvalResult<f64> {
    check_arity("midpoint", args, Arity::Exact(2))?;
    Ok(args[0].midpoint(args[1]))
}
