use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children. The tree never shares nodes and has no
/// back-references, so it can be cloned, compared and dropped freely.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value, digit separators removed.
        value: f64,
    },
    /// Reference to a local variable or a registered constant.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// Call of a registered function (e.g. `max(w, 10)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// A prefix operation (e.g. `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `condition ? then_branch : else_branch`.
    Conditional {
        /// The condition, true when nonzero.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
    },
}

impl Expr {
    /// Builds a number node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// Builds a variable node.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds a binary operation node.
    ///
    /// # Example
    /// ```
    /// use flux::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::variable("w"), BinaryOperator::Min, Expr::number(100.0));
    /// assert_eq!(expr.to_string(), "(w <? 100)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }
}

/// Prints the expression fully parenthesized, so the grouping chosen by the
/// parser is visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                write!(f, "({condition} ? {then_branch} : {else_branch})")
            },
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+x`, the value unchanged.
    Plus,
    /// `-x`
    Negate,
    /// `*x`, the value unchanged.
    Identity,
    /// `/x`, the reciprocal `1 / x`.
    Reciprocal,
    /// `!x`, `1` when `x` is zero, `0` otherwise.
    Not,
    /// `~x`, bitwise complement of `x` rounded to an integer.
    BitNot,
}

impl UnaryOperator {
    /// Every unary operator.
    pub const ALL: [Self; 6] = [Self::Plus,
                                Self::Negate,
                                Self::Identity,
                                Self::Reciprocal,
                                Self::Not,
                                Self::BitNot];

    /// Returns the source text of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Identity => "*",
            Self::Reciprocal => "/",
            Self::Not => "!",
            Self::BitNot => "~",
        }
    }

    /// Looks up a unary operator by its source text.
    ///
    /// # Example
    /// ```
    /// use flux::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::from_symbol("~"), Some(UnaryOperator::BitNot));
    /// assert_eq!(UnaryOperator::from_symbol("!!"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, truncating remainder.
    Rem,
    /// `%%`, remainder wrapped to be non-negative for a positive modulus.
    WrapRem,
    /// `**`
    Pow,
    /// `//`, flooring division.
    FloorDiv,
    /// `<?`
    Min,
    /// `>?`
    Max,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `!<`
    NotLess,
    /// `!>`
    NotGreater,
    /// `!<=`
    NotLessEqual,
    /// `!>=`
    NotGreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `=>`, material implication.
    Implies,
    /// `??`, the left value unless it is zero.
    Coalesce,
    /// `!!`, absolute difference. Evaluable, but not part of the grammar.
    AbsDiff,
}

impl BinaryOperator {
    /// Every binary operator.
    pub const ALL: [Self; 30] = [Self::BitAnd,
                                 Self::BitOr,
                                 Self::BitXor,
                                 Self::Shl,
                                 Self::Shr,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Rem,
                                 Self::WrapRem,
                                 Self::Pow,
                                 Self::FloorDiv,
                                 Self::Min,
                                 Self::Max,
                                 Self::Equal,
                                 Self::NotEqual,
                                 Self::Less,
                                 Self::Greater,
                                 Self::LessEqual,
                                 Self::GreaterEqual,
                                 Self::NotLess,
                                 Self::NotGreater,
                                 Self::NotLessEqual,
                                 Self::NotGreaterEqual,
                                 Self::And,
                                 Self::Or,
                                 Self::Implies,
                                 Self::Coalesce,
                                 Self::AbsDiff];

    /// Returns the source text of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::WrapRem => "%%",
            Self::Pow => "**",
            Self::FloorDiv => "//",
            Self::Min => "<?",
            Self::Max => ">?",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::NotLess => "!<",
            Self::NotGreater => "!>",
            Self::NotLessEqual => "!<=",
            Self::NotGreaterEqual => "!>=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Implies => "=>",
            Self::Coalesce => "??",
            Self::AbsDiff => "!!",
        }
    }

    /// Looks up a binary operator by its source text.
    ///
    /// # Example
    /// ```
    /// use flux::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("%%"), Some(BinaryOperator::WrapRem));
    /// assert_eq!(BinaryOperator::from_symbol("+-"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
