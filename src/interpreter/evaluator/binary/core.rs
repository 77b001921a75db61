use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates both operands left to right, then applies the operator.
    ///
    /// No operator short-circuits: `&&`, `||` and `=>` evaluate their right
    /// side even when the left side already decides the result.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Ok(Self::eval_binary(op, left, right))
    }

    /// Applies a binary operator to two values.
    ///
    /// Routes the operator to the handler of its group: arithmetic and
    /// selection go to `eval_scalar_op`, `**` and `//` to `eval_pow` and
    /// `eval_floor_div`, relational operators to `eval_comparison`, logical
    /// operators to `eval_logic` and bitwise operators to `eval_bitwise`.
    ///
    /// Every binary operator yields a value; there are no evaluation errors at
    /// this stage. Division by zero follows IEEE 754.
    ///
    /// # Example
    /// ```
    /// use flux::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::WrapRem, -10.0, 3.0), 2.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Min, 250.0, 100.0), 100.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// ```
    ///
    /// The group handlers are internal, so an operator can never reach the
    /// handler of another group:
    /// ```compile_fail
    /// use flux::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let _ = Context::eval_bitwise(BinaryOperator::Add, 1.0, 2.0);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{
            AbsDiff, Add, And, BitAnd, BitOr, BitXor, Coalesce, Div, Equal, FloorDiv, Greater,
            GreaterEqual, Implies, Less, LessEqual, Max, Min, Mul, NotEqual, NotGreater,
            NotGreaterEqual, NotLess, NotLessEqual, Or, Pow, Rem, Shl, Shr, Sub, WrapRem,
        };

        match op {
            Add | Sub | Mul | Div | Rem | WrapRem | Min | Max | AbsDiff | Coalesce => {
                Self::eval_scalar_op(op, left, right)
            },

            Pow => Self::eval_pow(left, right),
            FloorDiv => Self::eval_floor_div(left, right),

            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual | NotLess | NotGreater
            | NotLessEqual | NotGreaterEqual => Self::eval_comparison(op, left, right),

            And | Or | Implies => Self::eval_logic(op, left, right),

            BitAnd | BitOr | BitXor | Shl | Shr => Self::eval_bitwise(op, left, right),
        }
    }
}
