use crate::interpreter::evaluator::core::Context;

impl Context<'_> {
    /// `base ** exponent`.
    #[must_use]
    pub fn eval_pow(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    /// `left // right`, the quotient rounded toward negative infinity.
    ///
    /// # Example
    /// ```
    /// use flux::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_floor_div(7.0, 2.0), 3.0);
    /// assert_eq!(Context::eval_floor_div(-7.0, 2.0), -4.0);
    /// ```
    #[must_use]
    pub fn eval_floor_div(left: f64, right: f64) -> f64 {
        (left / right).floor()
    }
}
