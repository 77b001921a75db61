use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Binary operators grouped by precedence, loosest-binding first.
///
/// Bitwise operators bind more loosely than arithmetic, and relational and
/// logical operators bind more tightly than arithmetic. Existing expressions
/// rely on this order.
///
/// `!!` ([`BinaryOperator::AbsDiff`]) is deliberately absent: it can be
/// evaluated but not parsed.
pub const PRECEDENCE_LEVELS: [&[BinaryOperator]; 11] = {
    use BinaryOperator::{
        Add, And, BitAnd, BitOr, BitXor, Coalesce, Div, Equal, FloorDiv, Greater, GreaterEqual,
        Implies, Less, LessEqual, Max, Min, Mul, NotEqual, NotGreater, NotGreaterEqual, NotLess,
        NotLessEqual, Or, Pow, Rem, Shl, Shr, Sub, WrapRem,
    };
    [&[BitAnd, BitOr, BitXor],
     &[Shl, Shr],
     &[Add, Sub],
     &[Mul, Div],
     &[Rem, WrapRem],
     &[Pow, FloorDiv],
     &[Min, Max],
     &[Equal,
       NotEqual,
       Less,
       Greater,
       LessEqual,
       GreaterEqual,
       NotLess,
       NotGreater,
       NotLessEqual,
       NotGreaterEqual],
     &[And, Or],
     &[Implies],
     &[Coalesce]]
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not operators and for operator text that
/// names no binary operator.
///
/// # Example
/// ```
/// use flux::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// let token = Token::new(TokenKind::Operator, "<?", 0);
/// assert_eq!(token_to_binary_operator(&token), Some(BinaryOperator::Min));
///
/// let token = Token::new(TokenKind::Identifier, "min", 0);
/// assert_eq!(token_to_binary_operator(&token), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token.kind {
        TokenKind::Operator => BinaryOperator::from_symbol(&token.text),
        _ => None,
    }
}

/// Returns the precedence level of a binary operator, `0` being the loosest.
///
/// Returns `None` for operators that are not part of the grammar.
///
/// # Example
/// ```
/// use flux::{ast::BinaryOperator, interpreter::parser::binary::precedence};
///
/// assert_eq!(precedence(BinaryOperator::BitOr), Some(0));
/// assert_eq!(precedence(BinaryOperator::Coalesce), Some(10));
/// assert_eq!(precedence(BinaryOperator::AbsDiff), None);
/// ```
#[must_use]
pub fn precedence(op: BinaryOperator) -> Option<usize> {
    PRECEDENCE_LEVELS.iter().position(|level| level.contains(&op))
}

/// Parses a left-associative chain of binary operators at `level`.
///
/// Operands are parsed at the next tighter level; past the tightest level the
/// operands are unary expressions. The loop consumes operators as long as they
/// belong to `level`, folding each new operand into the left-hand side.
///
/// The rule is: `binary(n) := binary(n + 1) (op(n) binary(n + 1))*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
/// - `level`: Index into [`PRECEDENCE_LEVELS`].
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the operand itself when no operator follows.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>, level: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(operators) = PRECEDENCE_LEVELS.get(level) else {
        return parse_unary(tokens);
    };

    let mut left = parse_binary(tokens, level + 1)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && operators.contains(&op)
        {
            tokens.next();
            let right = parse_binary(tokens, level + 1)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}
