use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, clamp, integer, interpolate, min_max, special},
        },
        registry::Registry,
    },
};

type BuiltinFn = fn(&[f64]) -> EvalResult<f64>;

macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, BuiltinFn)] = &[
            $(
                ($name, $func),
            )*
        ];
        /// Names of every builtin function, in installation order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"       => builtin::abs,
    "acos"      => builtin::acos,
    "acosh"     => builtin::acosh,
    "asin"      => builtin::asin,
    "asinh"     => builtin::asinh,
    "atan"      => builtin::atan,
    "atan2"     => builtin::atan2,
    "atanh"     => builtin::atanh,
    "beta"      => special::beta,
    "cbrt"      => builtin::cbrt,
    "ceil"      => builtin::ceil,
    "clamp"     => clamp::clamp,
    "cos"       => builtin::cos,
    "cosh"      => builtin::cosh,
    "cyl_bessel_j" => special::cyl_bessel_j,
    "cyl_neumann"  => special::cyl_neumann,
    "dim"       => builtin::dim,
    "erf"       => builtin::erf,
    "erfc"      => builtin::erfc,
    "exp"       => builtin::exp,
    "exp2"      => builtin::exp2,
    "expm1"     => builtin::expm1,
    "floor"     => builtin::floor,
    "fma"       => builtin::fma,
    "gcd"       => integer::gcd,
    "hypot"     => builtin::hypot,
    "lcm"       => integer::lcm,
    "lerp"      => interpolate::lerp,
    "lgamma"    => builtin::lgamma,
    "log"       => builtin::log,
    "log10"     => builtin::log10,
    "log1p"     => builtin::log1p,
    "log2"      => builtin::log2,
    "max"       => min_max::max,
    "midpoint"  => interpolate::midpoint,
    "min"       => min_max::min,
    "mod"       => builtin::fmod,
    "nan"       => builtin::nan,
    "nearbyint" => builtin::nearbyint,
    "pow"       => builtin::pow,
    "remainder" => builtin::remainder,
    "rint"      => builtin::rint,
    "round"     => builtin::round,
    "sign"      => builtin::sign,
    "sin"       => builtin::sin,
    "sinh"      => builtin::sinh,
    "sqrt"      => builtin::sqrt,
    "tan"       => builtin::tan,
    "tanh"      => builtin::tanh,
    "tgamma"    => builtin::tgamma,
    "trunc"     => builtin::trunc,
}

impl Registry {
    /// Installs every function listed in [`BUILTIN_FUNCTIONS`].
    ///
    /// Functions already registered under a builtin name are replaced.
    pub fn add_builtin_functions(&mut self) {
        for &(name, func) in BUILTIN_TABLE {
            self.register_function(name, func);
        }
        log::debug!("installed {} builtin functions", BUILTIN_TABLE.len());
    }
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// Every argument is evaluated left to right before the name is looked
    /// up, so an unknown variable inside the arguments of an unknown function
    /// reports the variable. The function itself validates how many arguments
    /// it received.
    ///
    /// # Errors
    /// - Any error raised while evaluating an argument.
    /// - [`EvalError::UnknownFunction`] if nothing is registered under `name`.
    /// - Whatever the called function returns.
    pub(crate) fn eval_function_call(&self, name: &str, arguments: &[Expr]) -> EvalResult<f64> {
        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        let function =
            self.registry
                .function(name)
                .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })?;

        function(&values)
    }
}
