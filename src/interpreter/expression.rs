use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::{Context, Locals},
        registry::Registry,
    },
};

/// A numeric expression with its local variables and a cached syntax tree.
///
/// ## Usage
///
/// The source is parsed the first time [`evaluate`](Self::evaluate) runs and
/// the tree is kept for every later call. Changing the source through
/// [`source_mut`](Self::source_mut) does not touch the cached tree; call
/// [`refresh`](Self::refresh) afterwards.
///
/// An empty source evaluates to `0` without being parsed.
///
/// ```
/// use flux::{Expression, Registry};
///
/// let registry = Registry::with_builtins();
/// let mut width = Expression::new("psx - 20");
/// width.set_var("psx", 300.0);
///
/// assert_eq!(width.evaluate(&registry).unwrap(), 280.0);
/// assert!(width.is_cached());
///
/// width.source_mut().push_str(" * 2");
/// assert_eq!(width.evaluate(&registry).unwrap(), 280.0);
///
/// width.refresh().unwrap();
/// assert_eq!(width.evaluate(&registry).unwrap(), 260.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Expression {
    source: String,
    locals: Locals,
    ast:    Option<Expr>,
}

impl Expression {
    /// Creates an expression from source text. Nothing is parsed yet.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into(),
               ..Self::default() }
    }

    /// Evaluates the expression against its locals and the given registry.
    ///
    /// Parses the source on first use and caches the tree.
    ///
    /// # Errors
    /// Lexing and parsing errors on first use, evaluation errors on every
    /// call. A failed parse leaves nothing cached, so the next call parses
    /// again.
    pub fn evaluate(&mut self, registry: &Registry) -> Result<f64, Error> {
        if self.source.is_empty() {
            return Ok(0.0);
        }

        let ast = match self.ast.take() {
            Some(ast) => ast,
            None => {
                log::debug!("parsing expression `{}`", self.source);
                crate::parse(&self.source)?
            },
        };
        let ast = self.ast.insert(ast);

        Ok(Context::new(registry, &self.locals).eval(ast)?)
    }

    /// Discards the cached tree and parses the current source again.
    ///
    /// # Errors
    /// Lexing and parsing errors. The cache stays empty in that case.
    pub fn refresh(&mut self) -> Result<(), Error> {
        self.ast = None;
        if self.source.is_empty() {
            log::debug!("cleared cache of empty expression");
            return Ok(());
        }

        log::debug!("refreshing expression `{}`", self.source);
        self.ast = Some(crate::parse(&self.source)?);
        Ok(())
    }

    /// The source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Mutable access to the source text.
    ///
    /// Edits take effect after the next [`refresh`](Self::refresh).
    pub const fn source_mut(&mut self) -> &mut String {
        &mut self.source
    }

    #[must_use]
    pub const fn locals(&self) -> &Locals {
        &self.locals
    }

    pub const fn locals_mut(&mut self) -> &mut Locals {
        &mut self.locals
    }

    /// Binds a local variable, replacing any previous value.
    pub fn set_var(&mut self, name: impl Into<String>, value: f64) {
        self.locals.insert(name.into(), value);
    }

    /// Replaces every local variable.
    pub fn set_locals(&mut self, locals: Locals) {
        self.locals = locals;
    }

    /// The cached tree, if the source has been parsed.
    #[must_use]
    pub const fn ast(&self) -> Option<&Expr> {
        self.ast.as_ref()
    }

    #[must_use]
    pub const fn is_cached(&self) -> bool {
        self.ast.is_some()
    }
}

impl From<&str> for Expression {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Expression {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

/// Stores the shortest text that reads back as `value`.
///
/// Non-finite values become `NaN`, `inf` or `-inf`, which evaluate as
/// identifiers unless a constant or local of that name exists.
impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::new(value.to_string())
    }
}
