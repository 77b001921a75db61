use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// The tokens ran out in the middle of an expression.
    #[error("Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
    },
    /// A specific token was required but another one was found.
    #[error("Expected {expected} at position {position}, found '{found}'.")]
    ExpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// Text of the token actually found.
        found:    String,
        /// Byte offset of the token actually found.
        position: usize,
    },
    /// Operator text that is not valid where it appears.
    #[error("Invalid operator '{op}' at position {position}.")]
    InvalidOperator {
        /// The operator text.
        op:       String,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A number token that does not denote a valid number.
    #[error("Invalid number '{text}' at position {position}.")]
    InvalidNumber {
        /// The number text, digit separators included.
        text:     String,
        /// Byte offset of the number.
        position: usize,
    },
    /// A complete expression was parsed but tokens remain.
    #[error("Extra tokens after expression, starting with '{token}' at position {position}.")]
    UnexpectedTrailingTokens {
        /// Text of the first unconsumed token.
        token:    String,
        /// Byte offset of the first unconsumed token.
        position: usize,
    },
}
