use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::Context,
    util::num::bool_to_f64,
};

impl Context<'_> {
    /// Evaluates a comparison of the form `left <Operator> right`.
    ///
    /// Returns `1` when the comparison holds and `0` otherwise. The negated
    /// forms are the logical negation of their positive counterpart, which
    /// differs from the opposite comparison when NaN is involved:
    /// `NaN !< 1` is `1` while `NaN >= 1` is `0`.
    ///
    /// # Example
    /// ```
    /// use flux::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Less, 3.0, 5.0), 1.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::NotLess, f64::NAN, 1.0), 1.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::GreaterEqual, f64::NAN, 1.0), 0.0);
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp, clippy::neg_cmp_op_on_partial_ord)]
    pub(crate) fn eval_comparison(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{
            Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, NotGreater, NotGreaterEqual,
            NotLess, NotLessEqual,
        };

        bool_to_f64(match op {
                        Equal => left == right,
                        NotEqual => left != right,
                        Less => left < right,
                        Greater => left > right,
                        LessEqual => left <= right,
                        GreaterEqual => left >= right,
                        NotLess => !(left < right),
                        NotGreater => !(left > right),
                        NotLessEqual => !(left <= right),
                        NotGreaterEqual => !(left >= right),
                        _ => unreachable!("eval_comparison used with non-comparison operator"),
                    })
    }
}
