use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::Context,
    util::num::{i64_to_f64, round_to_i64},
};

impl Context<'_> {
    /// Evaluates a bitwise operator.
    ///
    /// Both values are rounded to the nearest `i64` first. Shift counts wrap
    /// to the width of `i64`, so `1 << 65` equals `1 << 1`.
    ///
    /// # Example
    /// ```
    /// use flux::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::BitAnd, 6.0, 3.0), 2.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Shl, 1.0, 4.4), 16.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Shr, -16.0, 2.0), -4.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn eval_bitwise(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{BitAnd, BitOr, BitXor, Shl, Shr};

        let left = round_to_i64(left);
        let right = round_to_i64(right);

        i64_to_f64(match op {
                       BitAnd => left & right,
                       BitOr => left | right,
                       BitXor => left ^ right,
                       Shl => left.wrapping_shl(right as u32),
                       Shr => left.wrapping_shr(right as u32),
                       _ => unreachable!("eval_bitwise used with non-bitwise operator"),
                   })
    }
}
