/// Function call dispatch and the builtin function table.
///
/// Evaluates call arguments, looks the name up in the registry and installs
/// the builtins listed in `BUILTIN_FUNCTIONS`.
pub mod core;

/// Built-in function implementations.
///
/// Thin wrappers over the `f64` methods of the standard library.
pub mod builtin;

/// The `clamp` function implementation.
///
/// Restricts a value to an inclusive range.
pub mod clamp;

/// `gcd` and `lcm` on values rounded to integers.
pub mod integer;

/// `lerp` and `midpoint`.
pub mod interpolate;

/// Gamma-derived and Bessel functions backed by `libm`.
pub mod special;

/// `min` and `max` function implementations.
///
/// Returns the smallest or largest of one or more arguments.
pub mod min_max;
