/// Dispatch of binary operators to the groups below.
pub mod core;

/// Arithmetic and the selection operators.
pub mod scalar;

/// Power and flooring division.
pub mod power;

/// Relational operators and their negations.
pub mod comparison;

/// Logical operators on nonzero truthiness.
pub mod logic;

/// Bitwise operators on values rounded to integers.
pub mod bitwise;
