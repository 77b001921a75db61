use thiserror::Error;

/// Lexing errors.
///
/// Raised when the source contains a character that belongs to no token
/// class.
pub mod lex_error;
/// Parsing errors.
///
/// Defines everything that can go wrong while turning a token sequence into an
/// expression tree: running out of tokens, finding the wrong token, operator
/// text that is invalid where it appears, and leftover tokens.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while walking an expression tree: unresolved names, unknown
/// functions, and functions rejecting their arguments.
pub mod eval_error;

pub use eval_error::{Arity, EvalError};
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure of the compile-and-evaluate pipeline.
///
/// Returned by [`crate::Expression::evaluate`] and the crate-level convenience
/// functions. Each phase keeps its own error type; this enum only tags which
/// phase failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
