use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_punctuation, parse_comma_separated},
        },
    },
};

const PRIMARY: &str = "a number, an identifier or '('";

/// Parses a unary expression.
///
/// Supports the prefix operators `+`, `-`, `*`, `/`, `!` and `~`. Unary
/// operators are right-associative, so `-!x` is parsed as `-(!x)`.
///
/// Operator tokens are maximal runs of operator characters, so `!-x` is one
/// `!-` token followed by `x`, and is rejected. Write `! -x` instead.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "*" | "/" | "!" | "~") unary
///            | primary
/// ```
/// # Errors
/// [`ParseError::InvalidOperator`] when operator text in prefix position is
/// not a unary operator.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next_if(|token| token.kind == TokenKind::Operator) else {
        return parse_primary(tokens);
    };

    let op = UnaryOperator::from_symbol(&token.text).ok_or_else(|| {
                 ParseError::InvalidOperator { op:       token.text.clone(),
                                               position: token.position, }
             })?;
    let expr = parse_unary(tokens)?;

    Ok(Expr::unary(op, expr))
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are numeric literals, variables, function calls and
/// parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER ("(" (expression ("," expression)*)? ")")?
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token =
        tokens.next()
              .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected: PRIMARY.to_string() })?;

    match token.kind {
        TokenKind::Number => parse_number(token),
        TokenKind::Identifier => parse_identifier_or_function(tokens, token),
        TokenKind::Punctuation if token.is_punctuation('(') => parse_grouping(tokens),
        _ => Err(ParseError::ExpectedToken { expected: PRIMARY.to_string(),
                                             found:    token.text.clone(),
                                             position: token.position, }),
    }
}

/// Converts a number token to a literal node.
///
/// Digit separators (`'`) are removed before conversion, so `1'000` is
/// `1000.0`.
///
/// # Errors
/// [`ParseError::InvalidNumber`] for text such as `1.2.3`.
fn parse_number(token: &Token) -> ParseResult<Expr> {
    let digits: String = token.text.chars().filter(|&c| c != '\'').collect();

    digits.parse::<f64>()
          .map(Expr::number)
          .map_err(|_| ParseError::InvalidNumber { text:     token.text.clone(),
                                                   position: token.position, })
}

/// Parses a parenthesized expression once `(` has been consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;
    expect_punctuation(tokens, ')')?;
    Ok(expr)
}

/// Parses a variable reference or, when `(` follows immediately, a call.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       token: &Token)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let name = token.text.clone();

    if tokens.next_if(|next| next.is_punctuation('(')).is_some() {
        let arguments = parse_comma_separated(tokens, parse_expression, ')')?;
        return Ok(Expr::Call { name, arguments });
    }

    Ok(Expr::Variable { name })
}
