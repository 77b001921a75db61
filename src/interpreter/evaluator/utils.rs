use crate::{
    error::{Arity, EvalError},
    interpreter::evaluator::core::EvalResult,
};

/// Checks if the argument list matches the accepted arity.
/// Returns an [`EvalError::InvalidArity`] naming `function` otherwise.
///
/// Every builtin calls this before touching its arguments. Functions
/// registered by the embedding application are expected to do the same.
///
/// ## Example
/// ```
/// use flux::{error::Arity, interpreter::evaluator::utils::check_arity};
///
/// assert!(check_arity("atan2", &[1.0, 2.0], Arity::Exact(2)).is_ok());
/// assert!(check_arity("atan2", &[1.0], Arity::Exact(2)).is_err());
/// ```
pub fn check_arity(function: &str, args: &[f64], arity: Arity) -> EvalResult<()> {
    if arity.check(args.len()) {
        Ok(())
    } else {
        Err(EvalError::InvalidArity { function: function.to_string(),
                                      expected: arity,
                                      found:    args.len(), })
    }
}
