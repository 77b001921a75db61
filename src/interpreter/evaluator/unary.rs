use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{bool_to_f64, i64_to_f64, round_to_i64},
};

impl Context<'_> {
    /// Evaluates the operand, then applies the operator.
    pub(crate) fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval(expr)?;
        Ok(Self::eval_unary(op, value))
    }

    /// Applies a unary operator to a value.
    ///
    /// Supported operators:
    /// - `Plus` and `Identity`: the value unchanged.
    /// - `Negate`: arithmetic negation.
    /// - `Reciprocal`: `1 / value`.
    /// - `Not`: `1` for zero, `0` for everything else.
    /// - `BitNot`: bitwise complement of the value rounded to an integer.
    ///
    /// # Example
    /// ```
    /// use flux::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Reciprocal, 4.0), 0.25);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Not, 0.0), 1.0);
    /// assert_eq!(Context::eval_unary(UnaryOperator::BitNot, 4.6), -6.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus | UnaryOperator::Identity => value,
            UnaryOperator::Negate => -value,
            UnaryOperator::Reciprocal => 1.0 / value,
            UnaryOperator::Not => bool_to_f64(value == 0.0),
            UnaryOperator::BitNot => i64_to_f64(!round_to_i64(value)),
        }
    }
}
