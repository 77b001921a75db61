use crate::{
    error::{Arity, EvalError},
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
};

/// Clamps a value between a lower and an upper bound.
///
/// Arguments are `[value, lo, hi]`. If `lo > hi`, an `InvalidArgument`
/// error is returned. A NaN value passes through unchanged.
///
/// # Example
/// ```
/// use flux::interpreter::evaluator::function::clamp::clamp;
///
/// // 5 clamped between 0 and 3 yields 3
/// assert_eq!(clamp(&[5.0, 0.0, 3.0]).unwrap(), 3.0);
/// assert_eq!(clamp(&[-1.0, 0.0, 3.0]).unwrap(), 0.0);
/// assert!(clamp(&[1.0, 3.0, 0.0]).is_err());
/// ```
pub fn clamp(args: &[f64]) -> EvalResult<f64> {
    check_arity("clamp", args, Arity::Exact(3))?;

    let (value, lo, hi) = (args[0], args[1], args[2]);

    if lo > hi {
        return Err(EvalError::InvalidArgument { function: "clamp".to_string(),
                                                details:  format!("lower bound {lo} exceeds upper bound {hi}"), });
    }

    Ok(if value < lo {
           lo
       } else if value > hi {
           hi
       } else {
           value
       })
}
