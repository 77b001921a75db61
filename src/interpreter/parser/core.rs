use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_binary, utils::expect_operator},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into one expression.
///
/// Every token must be consumed. Leftover operator text that names no operator
/// at all is reported as [`ParseError::InvalidOperator`]; any other leftover
/// token as [`ParseError::UnexpectedTrailingTokens`].
///
/// # Errors
/// Any [`ParseError`] raised while parsing, or a trailing-token error.
///
/// # Example
/// ```
/// use flux::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("psx - 20").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "(psx - 20)");
///
/// let tokens = tokenize("1 2").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        None => Ok(expr),
        Some(token) if is_unknown_operator(token) => {
            Err(ParseError::InvalidOperator { op:       token.text.clone(),
                                              position: token.position, })
        },
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token:    token.text.clone(),
                                                                  position: token.position, }),
    }
}

/// Parses a full expression.
///
/// This is the rule used at the top level and recursively for call arguments,
/// parenthesized groups and both branches of a conditional. The binary chain
/// is parsed first; a following `?` turns it into the condition of a ternary.
///
/// Grammar: `expression := binary(0) ("?" expression ":" expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let condition = parse_binary(tokens, 0)?;

    if tokens.next_if(|token| token.is_operator("?")).is_some() {
        return parse_conditional(tokens, condition);
    }

    Ok(condition)
}

/// Parses the branches of a conditional once `?` has been consumed.
///
/// Each branch is a full expression, so conditionals nest in either branch
/// without parentheses: `a ? b ? c : d : e`.
fn parse_conditional<'a, I>(tokens: &mut Peekable<I>, condition: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let then_branch = parse_expression(tokens)?;
    expect_operator(tokens, ":")?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::Conditional { condition:   Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch), })
}

fn is_unknown_operator(token: &Token) -> bool {
    token.kind == TokenKind::Operator
    && !matches!(token.text.as_str(), "?" | ":")
    && BinaryOperator::from_symbol(&token.text).is_none()
}
