use crate::{
    ast::BinaryOperator,
    error::Arity,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        utils::check_arity,
    },
};

/// Folds the arguments with `<?` or `>?`, left to right.
fn select(name: &str, op: BinaryOperator, args: &[f64]) -> EvalResult<f64> {
    check_arity(name, args, Arity::AtLeast(1))?;

    Ok(args[1..].iter()
                .fold(args[0], |acc, &value| Context::eval_scalar_op(op, acc, value)))
}

/// The smallest argument.
///
/// # Example
/// ```
/// use flux::interpreter::evaluator::function::min_max::min;
///
/// assert_eq!(min(&[4.0, -2.0, 7.0]).unwrap(), -2.0);
/// assert!(min(&[]).is_err());
/// ```
pub fn min(args: &[f64]) -> EvalResult<f64> {
    select("min", BinaryOperator::Min, args)
}

/// The largest argument.
pub fn max(args: &[f64]) -> EvalResult<f64> {
    select("max", BinaryOperator::Max, args)
}
