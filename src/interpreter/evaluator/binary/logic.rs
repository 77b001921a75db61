use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::Context,
    util::num::{bool_to_f64, truthy},
};

impl Context<'_> {
    /// Evaluates `&&`, `||` and `=>` on the truthiness of both values.
    ///
    /// Both values are already computed when this runs.
    #[must_use]
    pub(crate) fn eval_logic(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{And, Implies, Or};

        let (left, right) = (truthy(left), truthy(right));
        bool_to_f64(match op {
                        And => left && right,
                        Or => left || right,
                        Implies => !left || right,
                        _ => unreachable!("eval_logic used with non-logical operator"),
                    })
    }
}
