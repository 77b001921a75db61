use crate::{
    error::Arity,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
};

/// Applies a one-argument `f64` method, or a `libm` function with `=`.
///
/// The generated function is named after the builtin and reports arity
/// errors under that name.
///
/// # Example
/// ```
/// use flux::interpreter::evaluator::function::builtin::{erfc, log, sin};
///
/// assert_eq!(sin(&[0.0]).unwrap(), 0.0);
/// assert_eq!(log(&[1.0]).unwrap(), 0.0);
/// assert_eq!(erfc(&[0.0]).unwrap(), 1.0);
/// assert!(sin(&[1.0, 2.0]).is_err());
/// ```
macro_rules! unary_builtin {
    ($fname:ident = $func:path) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            check_arity(stringify!($fname), args, Arity::Exact(1))?;
            Ok($func(args[0]))
        }
    };
    ($fname:ident => $method:ident) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            check_arity(stringify!($fname), args, Arity::Exact(1))?;
            Ok(args[0].$method())
        }
    };
    ($fname:ident) => {
        unary_builtin!($fname => $fname);
    };
}

/// Applies a two-argument function under the given builtin name.
macro_rules! binary_builtin {
    ($fname:ident, $name:literal, | $x:ident, $y:ident | $body:expr) => {
        pub fn $fname(args: &[f64]) -> EvalResult<f64> {
            check_arity($name, args, Arity::Exact(2))?;
            let ($x, $y) = (args[0], args[1]);
            Ok($body)
        }
    };
}

unary_builtin!(abs);
unary_builtin!(acos);
unary_builtin!(acosh);
unary_builtin!(asin);
unary_builtin!(asinh);
unary_builtin!(atan);
unary_builtin!(atanh);
unary_builtin!(cbrt);
unary_builtin!(ceil);
unary_builtin!(cos);
unary_builtin!(cosh);
unary_builtin!(exp);
unary_builtin!(exp2);
unary_builtin!(expm1 => exp_m1);
unary_builtin!(floor);
unary_builtin!(log => ln);
unary_builtin!(log10);
unary_builtin!(log1p => ln_1p);
unary_builtin!(log2);
unary_builtin!(nearbyint => round_ties_even);
unary_builtin!(rint => round_ties_even);
unary_builtin!(round);
unary_builtin!(sin);
unary_builtin!(sinh);
unary_builtin!(sqrt);
unary_builtin!(tan);
unary_builtin!(tanh);
unary_builtin!(trunc);
unary_builtin!(erf = libm::erf);
unary_builtin!(erfc = libm::erfc);
unary_builtin!(tgamma = libm::tgamma);
unary_builtin!(lgamma = libm::lgamma);

binary_builtin!(atan2, "atan2", |y, x| y.atan2(x));
binary_builtin!(hypot, "hypot", |x, y| x.hypot(y));
binary_builtin!(pow, "pow", |base, exponent| base.powf(exponent));
binary_builtin!(fmod, "mod", |x, y| x % y);
binary_builtin!(dim, "dim", |x, y| libm::fdim(x, y));
binary_builtin!(remainder, "remainder", |x, y| libm::remainder(x, y));

/// Returns the sign of a value: `1`, `-1`, or the value itself for zero and
/// NaN.
///
/// # Example
/// ```
/// use flux::interpreter::evaluator::function::builtin::sign;
///
/// assert_eq!(sign(&[-3.5]).unwrap(), -1.0);
/// assert_eq!(sign(&[0.0]).unwrap(), 0.0);
/// ```
pub fn sign(args: &[f64]) -> EvalResult<f64> {
    check_arity("sign", args, Arity::Exact(1))?;

    let x = args[0];
    Ok(if x > 0.0 {
           1.0
       } else if x < 0.0 {
           -1.0
       } else {
           x
       })
}

/// `fma(x, y, z)`: `x * y + z` with a single rounding.
pub fn fma(args: &[f64]) -> EvalResult<f64> {
    check_arity("fma", args, Arity::Exact(3))?;
    Ok(args[0].mul_add(args[1], args[2]))
}

/// A quiet NaN.
pub fn nan(args: &[f64]) -> EvalResult<f64> {
    check_arity("nan", args, Arity::Exact(0))?;
    Ok(f64::NAN)
}
