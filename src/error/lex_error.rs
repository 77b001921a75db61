use thiserror::Error;

/// A character outside every lexical class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid character '{character}' at position {position}.")]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the source.
    pub position:  usize,
}
