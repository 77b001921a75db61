use logos::Logos;

use crate::error::LexError;

/// The lexical class of a token.
///
/// Identifier, number and operator tokens are maximal runs of their character
/// class. Punctuation is never merged: `((` lexes as two tokens while `**`
/// lexes as one.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Names of variables, constants and functions, such as `psx` or
    /// `layout.width`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.]*")]
    Identifier,
    /// Numeric literals such as `42`, `3.5` or `1'000`.
    #[regex(r"[0-9][0-9.']*")]
    Number,
    /// Runs of operator characters, such as `+`, `<?` or `!<=`.
    #[regex(r"[+\-*/%\^=!~&|<>?:\[\]]+")]
    Operator,
    /// One of `@ # $ ( ) { } \ ; ,`.
    #[regex(r"[@#$(){}\\;,]")]
    Punctuation,

    /// Whitespace.
    #[regex(r"[ \t\n\r\f\v]+", logos::skip)]
    Ignored,
}

/// A single token with its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical class.
    pub kind:     TokenKind,
    /// The exact source text, digit separators included.
    pub text:     String,
    /// Byte offset of the first character in the source.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// Returns `true` if this is a punctuation token with the given character.
    #[must_use]
    pub fn is_punctuation(&self, c: char) -> bool {
        self.kind == TokenKind::Punctuation && self.text.starts_with(c)
    }

    /// Returns `true` if this is an operator token with exactly the given text.
    #[must_use]
    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }
}

/// Splits source text into tokens.
///
/// Whitespace separates tokens and is otherwise ignored. Any character outside
/// the identifier, number, operator and punctuation classes aborts the scan.
///
/// # Errors
/// Returns a [`LexError`] carrying the offending character and its byte
/// offset.
///
/// # Example
/// ```
/// use flux::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("w * 2 <? 1'000").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Operator,
///             TokenKind::Number,
///             TokenKind::Operator,
///             TokenKind::Number]);
/// assert_eq!(tokens[4].text, "1'000");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let position = lexer.span().start;
        match kind {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), position)),
            Err(()) => {
                let character = source.get(position..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError { character,
                                      position });
            },
        }
    }

    Ok(tokens)
}
