//! # flux
//!
//! flux is a small numeric expression language meant to be embedded in a host
//! application. The host stores expressions such as `psx - 20` or
//! `w * 2 <? 100` as text, binds variables, and evaluates them to an `f64`
//! against a [`Registry`] of named constants and functions.
//!
//! ```
//! use flux::{Expression, Registry};
//!
//! let registry = Registry::with_builtins();
//! let mut expr = Expression::new("max(w * 2 <? 100, 40)");
//! expr.set_var("w", 30.0);
//!
//! assert_eq!(expr.evaluate(&registry).unwrap(), 60.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an expression as an owned tree. The tree is built by the parser, cached by
/// the expression handle and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node type per language construct.
/// - Maps every operator to and from its source text.
/// - Prints trees fully parenthesized for inspection.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// Each phase has its own error type carrying the offending text, name or
/// byte position. [`Error`] wraps all three.
pub mod error;
/// Orchestrates lexing, parsing, evaluation and the handles built on them.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Holds the registry of constants and functions.
/// - Provides the cached expression handle and its vector form.
pub mod interpreter;
/// Numeric conversion helpers shared by the evaluator and the builtins.
pub mod util;

pub use crate::{
    error::{Arity, Error, EvalError, LexError, ParseError},
    interpreter::{
        evaluator::{core::Locals, utils::check_arity},
        expression::Expression,
        registry::Registry,
        vector::{Expr2, Expr3, Expr4, ExprVec},
    },
};
use crate::{
    ast::Expr,
    interpreter::{evaluator::core::Context, lexer::Token},
};

/// Splits source text into tokens.
///
/// # Example
/// ```
/// let tokens = flux::tokenize("a <? b").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].text, "<?");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Ok(interpreter::lexer::tokenize(source)?)
}

/// Lexes and parses source text into an expression tree.
///
/// # Example
/// ```
/// let ast = flux::parse("1 | 2 == 2").unwrap();
/// assert_eq!(ast.to_string(), "(1 | (2 == 2))");
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source)?;
    Ok(interpreter::parser::core::parse(&tokens)?)
}

/// Parses and evaluates source text once, without caching.
///
/// An empty source evaluates to `0`.
///
/// # Example
/// ```
/// use flux::{Locals, Registry};
///
/// let registry = Registry::with_builtins();
/// let mut locals = Locals::new();
/// locals.insert("r".to_string(), 2.0);
///
/// let area = flux::evaluate("pi * r ** 2", &locals, &registry).unwrap();
/// assert!((area - 12.566_370_614_359_172).abs() < 1e-12);
/// ```
pub fn evaluate(source: &str, locals: &Locals, registry: &Registry) -> Result<f64, Error> {
    if source.is_empty() {
        return Ok(0.0);
    }
    let ast = parse(source)?;
    Ok(Context::new(registry, locals).eval(&ast)?)
}
