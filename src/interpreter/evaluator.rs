/// Core evaluation logic and the evaluation context.
///
/// Contains the main evaluation engine: variable resolution, conditionals and
/// dispatch to the operator and function modules.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators: sign, identity, reciprocal, logical NOT
/// and bitwise complement.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, logical and bitwise operators, and the
/// selection operators (`<?`, `>?`, `!!`, `??`).
pub mod binary;

/// Function evaluation.
///
/// Dispatches calls to registered functions and provides the builtin function
/// library.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides the arity check shared by every builtin and available to
/// user-registered functions.
pub mod utils;
