use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::Context,
    util::num::truthy,
};

impl Context<'_> {
    /// Evaluates an arithmetic or selection operation.
    ///
    /// - `+ - * /` follow IEEE 754.
    /// - `%` is the truncating remainder; the result has the sign of `left`.
    /// - `%%` adds `right` once to a negative remainder, so `-10 %% 3` is `2`.
    /// - `<?` and `>?` return the smaller or larger operand. When the
    ///   comparison fails because of NaN, `left` is returned.
    /// - `!!` is the absolute difference.
    /// - `??` returns `left` unless it is zero, then `right`.
    ///
    /// # Example
    /// ```
    /// use flux::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Rem, -10.0, 3.0), -1.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::AbsDiff, 3.0, 10.0), 7.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Coalesce, 0.0, 5.0), 5.0);
    /// ```
    #[must_use]
    pub(crate) fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{AbsDiff, Add, Coalesce, Div, Max, Min, Mul, Rem, Sub, WrapRem};

        match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => left / right,
            Rem => left % right,
            WrapRem => {
                let remainder = left % right;
                if remainder < 0.0 {
                    remainder + right
                } else {
                    remainder
                }
            },
            Min => {
                if right < left {
                    right
                } else {
                    left
                }
            },
            Max => {
                if left < right {
                    right
                } else {
                    left
                }
            },
            AbsDiff => (left - right).abs(),
            Coalesce => {
                if truthy(left) {
                    left
                } else {
                    right
                }
            },
            _ => unreachable!("eval_scalar_op used with non-scalar operator"),
        }
    }
}
