use crate::{
    error::Error,
    interpreter::{expression::Expression, registry::Registry},
};

/// Axis names substituted by [`ExprVec::from_template`].
pub const AXES: [&str; 4] = ["x", "y", "z", "w"];

/// A fixed number of expressions evaluated together, one per axis.
///
/// ```
/// use flux::{Expr2, Registry};
///
/// let registry = Registry::with_builtins();
/// let mut size = Expr2::from_template("parent.{} - 2 * margin");
/// size.set_var("parent.x", 640.0);
/// size.set_var("parent.y", 480.0);
/// size.set_var("margin", 8.0);
///
/// assert_eq!(size.evaluate(&registry).unwrap(), [624.0, 464.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ExprVec<const N: usize> {
    components: [Expression; N],
}

/// Two expressions, `x` and `y`.
pub type Expr2 = ExprVec<2>;
/// Three expressions, `x`, `y` and `z`.
pub type Expr3 = ExprVec<3>;
/// Four expressions, `x`, `y`, `z` and `w`.
pub type Expr4 = ExprVec<4>;

impl<const N: usize> ExprVec<N> {
    /// Creates one expression per axis from separate sources.
    #[must_use]
    pub fn new<S>(sources: [S; N]) -> Self
        where S: Into<String>
    {
        Self { components: sources.map(Expression::new) }
    }

    /// Creates one expression per axis from a shared template.
    ///
    /// Every `{}` in the template is replaced by the axis name.
    ///
    /// ```
    /// use flux::Expr3;
    ///
    /// let position = Expr3::from_template("origin.{} + offset");
    /// assert_eq!(position.components()[2].source(), "origin.z + offset");
    /// ```
    #[must_use]
    pub fn from_template(template: &str) -> Self {
        const { assert!(N <= AXES.len(), "templates support at most four axes") };

        Self { components: std::array::from_fn(|axis| {
                               Expression::new(template.replace("{}", AXES[axis]))
                           }), }
    }

    /// Creates constant expressions from values.
    #[must_use]
    pub fn from_values(values: [f64; N]) -> Self {
        Self { components: values.map(Expression::from) }
    }

    /// Binds a local variable in every component.
    pub fn set_var(&mut self, name: &str, value: f64) {
        for component in &mut self.components {
            component.set_var(name, value);
        }
    }

    /// Evaluates every component in axis order.
    ///
    /// # Errors
    /// The first error raised by a component.
    pub fn evaluate(&mut self, registry: &Registry) -> Result<[f64; N], Error> {
        let mut values = [0.0; N];
        for (value, component) in values.iter_mut().zip(&mut self.components) {
            *value = component.evaluate(registry)?;
        }
        Ok(values)
    }

    /// Re-parses every component.
    ///
    /// # Errors
    /// The first parsing error. Components after it keep their old cache.
    pub fn refresh(&mut self) -> Result<(), Error> {
        self.components.iter_mut().try_for_each(Expression::refresh)
    }

    #[must_use]
    pub const fn components(&self) -> &[Expression; N] {
        &self.components
    }

    pub const fn components_mut(&mut self) -> &mut [Expression; N] {
        &mut self.components
    }
}
