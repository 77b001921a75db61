/// Parser entry points and the conditional (ternary) rule.
///
/// Contains [`core::parse`], which turns a complete token sequence into one
/// expression tree, and the top-level expression rule shared by every nested
/// context (call arguments, parenthesized groups, ternary branches).
pub mod core;

/// Binary operator parsing.
///
/// Holds the precedence table and the precedence-climbing loop that builds
/// left-associative chains level by level.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix operators, numeric literals, variables, function calls and
/// parenthesized groups.
pub mod unary;

/// Shared parsing helpers.
///
/// Token expectations and comma-separated list parsing.
pub mod utils;
