use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing punctuation token.
///
/// An immediately encountered closing token produces an empty list. A comma
/// must be followed by another item, so `f(1,)` is rejected.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The punctuation character that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: char)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if tokens.next_if(|token| token.is_punctuation(closing)).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(token) if token.is_punctuation(',') => {},
            Some(token) if token.is_punctuation(closing) => break,
            Some(token) => {
                return Err(ParseError::ExpectedToken { expected: format!("',' or '{closing}'"),
                                                       found:    token.text.clone(),
                                                       position: token.position, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: format!("',' or '{closing}'") });
            },
        }
    }
    Ok(items)
}

/// Consumes a punctuation token with the given character.
///
/// # Errors
/// Returns a `ParseError` if the next token is anything else or the input
/// ends.
pub(in crate::interpreter::parser) fn expect_punctuation<'a, I>(tokens: &mut Peekable<I>,
                                                                expected: char)
                                                                -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.is_punctuation(expected) => Ok(()),
        Some(token) => Err(ParseError::ExpectedToken { expected: format!("'{expected}'"),
                                                       found:    token.text.clone(),
                                                       position: token.position, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: format!("'{expected}'") }),
    }
}

/// Consumes an operator token with exactly the given text.
///
/// # Errors
/// Returns a `ParseError` if the next token is anything else or the input
/// ends.
pub(in crate::interpreter::parser) fn expect_operator<'a, I>(tokens: &mut Peekable<I>,
                                                             expected: &str)
                                                             -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.is_operator(expected) => Ok(()),
        Some(token) => Err(ParseError::ExpectedToken { expected: format!("'{expected}'"),
                                                       found:    token.text.clone(),
                                                       position: token.position, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: format!("'{expected}'") }),
    }
}
