use std::fmt;

use thiserror::Error;

/// The number of arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// `n` or more arguments.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity.
    ///
    /// # Example
    /// ```
    /// use flux::error::Arity;
    ///
    /// assert!(Arity::Exact(2).check(2));
    /// assert!(!Arity::Exact(2).check(3));
    /// assert!(Arity::AtLeast(1).check(5));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// ```
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// A name is neither a local variable nor a registered constant.
    #[error("Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The name.
        name: String,
    },
    /// A called function is not registered.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The function name.
        name: String,
    },
    /// A function received the wrong number of arguments.
    #[error("Function '{function}' expects {expected} argument(s), but {found} were given.")]
    InvalidArity {
        /// The function name.
        function: String,
        /// The accepted arity.
        expected: Arity,
        /// The number of arguments actually passed.
        found:    usize,
    },
    /// A function rejected the values of its arguments.
    #[error("Invalid argument to '{function}': {details}.")]
    InvalidArgument {
        /// The function name.
        function: String,
        /// Why the arguments were rejected.
        details:  String,
    },
}
