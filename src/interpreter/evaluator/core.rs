use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::registry::Registry,
    util::num::truthy,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Local variable bindings of one evaluation.
pub type Locals = HashMap<String, f64>;

/// Stores what an evaluation can see.
///
/// ## Usage
///
/// A `Context` borrows the local bindings and the registry for the duration of
/// one evaluation. Evaluation never mutates either, so the same tree can be
/// evaluated again with different locals.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Constants and functions.
    pub registry: &'a Registry,
    /// Local variables, consulted before constants.
    pub locals:   &'a Locals,
}

impl<'a> Context<'a> {
    /// Creates an evaluation context.
    #[must_use]
    pub const fn new(registry: &'a Registry, locals: &'a Locals) -> Self {
        Self { registry, locals }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands of
    /// every unary and binary operator and all call arguments are always
    /// evaluated; only the conditional skips work, by evaluating exactly one
    /// branch.
    ///
    /// # Errors
    /// Unknown identifiers and functions, and errors raised by called
    /// functions.
    ///
    /// # Example
    /// ```
    /// use flux::{
    ///     Registry,
    ///     interpreter::evaluator::core::{Context, Locals},
    /// };
    ///
    /// let registry = Registry::with_builtins();
    /// let mut locals = Locals::new();
    /// locals.insert("psx".to_string(), 300.0);
    ///
    /// let expr = flux::parse("psx - 20").unwrap();
    /// let context = Context::new(&registry, &locals);
    /// assert_eq!(context.eval(&expr).unwrap(), 280.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value } => Ok(*value),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::Call { name, arguments } => self.eval_function_call(name, arguments),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                self.eval_conditional(condition, then_branch, else_branch)
            },
        }
    }

    /// Resolves a name: locals first, then registered constants.
    fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.locals
            .get(name)
            .copied()
            .or_else(|| self.registry.constant(name))
            .ok_or_else(|| EvalError::UnknownIdentifier { name: name.to_string() })
    }

    /// Evaluates the condition, then only the selected branch.
    fn eval_conditional(&self,
                        condition: &Expr,
                        then_branch: &Expr,
                        else_branch: &Expr)
                        -> EvalResult<f64> {
        if truthy(self.eval(condition)?) {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }
}
