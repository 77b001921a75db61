use std::{collections::HashMap, fmt};

use crate::interpreter::evaluator::core::EvalResult;

/// A function callable from expressions.
///
/// Receives the evaluated arguments in source order. The function is
/// responsible for checking how many arguments it got; see
/// [`crate::interpreter::evaluator::utils::check_arity`].
pub type NativeFunction = Box<dyn Fn(&[f64]) -> EvalResult<f64> + Send + Sync>;

/// Named constants provided by [`Registry::add_builtin_constants`].
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("e", std::f64::consts::E),
                                                ("log2e", std::f64::consts::LOG2_E),
                                                ("log10e", std::f64::consts::LOG10_E),
                                                ("pi", std::f64::consts::PI),
                                                ("inv_pi", std::f64::consts::FRAC_1_PI),
                                                ("inv_sqrtpi", 0.564_189_583_547_756_3),
                                                ("ln2", std::f64::consts::LN_2),
                                                ("ln10", std::f64::consts::LN_10),
                                                ("sqrt2", std::f64::consts::SQRT_2),
                                                ("sqrt3", 1.732_050_807_568_877_2),
                                                ("inv_sqrt3", 0.577_350_269_189_625_8),
                                                ("egamma", 0.577_215_664_901_532_9),
                                                ("phi", 1.618_033_988_749_895)];

/// Stores the named constants and functions visible to every expression.
///
/// ## Usage
///
/// A `Registry` is populated once during setup and then shared by reference
/// with every evaluation. Evaluation never mutates it, so a populated
/// registry can be read from many threads at once.
///
/// Local variables of an expression shadow constants of the same name.
/// Registering a name twice replaces the earlier entry; nothing is ever
/// removed.
///
/// ```
/// use flux::Registry;
///
/// let mut registry = Registry::new();
/// registry.register_constant("gap", 8.0);
/// registry.register_function("twice", |args: &[f64]| Ok(args.iter().sum::<f64>() * 2.0));
///
/// assert_eq!(registry.constant("gap"), Some(8.0));
/// assert!(registry.contains_function("twice"));
/// ```
#[derive(Default)]
pub struct Registry {
    constants: HashMap<String, f64>,
    functions: HashMap<String, NativeFunction>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every builtin function and constant.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.add_builtin_functions();
        registry.add_builtin_constants();
        registry
    }

    /// Registers a named constant, replacing any previous value.
    pub fn register_constant(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        log::trace!("registering constant `{name}` = {value}");
        self.constants.insert(name, value);
    }

    /// Registers a named function, replacing any previous function.
    pub fn register_function<F>(&mut self, name: impl Into<String>, function: F)
        where F: Fn(&[f64]) -> EvalResult<f64> + Send + Sync + 'static
    {
        let name = name.into();
        log::trace!("registering function `{name}`");
        self.functions.insert(name, Box::new(function));
    }

    /// Installs [`BUILTIN_CONSTANTS`].
    pub fn add_builtin_constants(&mut self) {
        for &(name, value) in BUILTIN_CONSTANTS {
            self.register_constant(name, value);
        }
        log::debug!("installed {} builtin constants", BUILTIN_CONSTANTS.len());
    }

    /// Returns the value of a constant.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Returns a registered function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.get(name)
    }

    #[must_use]
    pub fn contains_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    #[must_use]
    pub fn contains_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Names of all constants, sorted.
    #[must_use]
    pub fn constant_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.constants.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Names of all functions, sorted.
    #[must_use]
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
         .field("constants", &self.constants)
         .field("functions", &self.function_names())
         .finish()
    }
}
