use std::fmt;

/// An abstract syntax tree (AST) node representing one program fragment.
///
/// Each variant fixes the number and meaning of its children, so a node can
/// never mix operator kinds. Trees are built once by the parser and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A single-digit integer literal.
    Literal {
        /// The digit, `0..=9`.
        value: u8,
    },
    /// Reference to a variable by its one-letter name.
    Variable {
        /// Name of the variable.
        name: char,
    },
    /// A prefix operation (negation or logical NOT).
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
    /// `$name = value`. Evaluates to the assigned value.
    Assignment {
        /// The variable being bound.
        name:  char,
        /// The value which is being assigned.
        value: Box<Self>,
    },
    /// A `;`-separated list of statements, evaluated for the last one.
    Sequence {
        /// Statements in source order. Always at least two.
        statements: Vec<Self>,
    },
}

impl Expr {
    /// Shorthand for a [`Expr::Literal`].
    #[must_use]
    pub const fn literal(value: u8) -> Self {
        Self::Literal { value }
    }

    /// Shorthand for a [`Expr::Variable`].
    #[must_use]
    pub const fn variable(name: char) -> Self {
        Self::Variable { name }
    }

    /// Shorthand for a boxed [`Expr::UnaryOp`].
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Shorthand for a boxed [`Expr::BinaryOp`].
    ///
    /// ## Example
    /// ```
    /// use runic::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::literal(1), BinaryOperator::Add, Expr::literal(2));
    /// assert_eq!(sum.to_string(), "(+ 1 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Shorthand for a boxed [`Expr::Assignment`].
    #[must_use]
    pub fn assignment(name: char, value: Self) -> Self {
        Self::Assignment { name,
                           value: Box::new(value) }
    }
}

/// Renders the tree as an s-expression, e.g. `(; ($ a 1) (+ a 2))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "({op} {expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({op} {left} {right})"),
            Self::Assignment { name, value } => write!(f, "($ {name} {value})"),
            Self::Sequence { statements } => {
                write!(f, "(;")?;
                for statement in statements {
                    write!(f, " {statement}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents a binary operator.
///
/// `And` and `Or` short-circuit; every other operator evaluates both operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Decimal join (`.`), builds a real from an integer part and a digit
    /// sequence.
    Decimal,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`=`)
    Equal,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, And, Decimal, Div, Equal, Greater, Less, Mod, Mul, Or, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Decimal => ".",
            Less => "<",
            Greater => ">",
            Equal => "=",
            And => "&",
            Or => "|",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_nested_sexpr() {
        let tree = Expr::Sequence { statements: vec![Expr::assignment('a', Expr::literal(1)),
                                                     Expr::binary(Expr::variable('a'),
                                                                  BinaryOperator::Mul,
                                                                  Expr::unary(UnaryOperator::Negate,
                                                                              Expr::literal(2)))] };
        assert_eq!(tree.to_string(), "(; ($ a 1) (* a (- 2)))");
    }

    #[test]
    fn operators_render_as_source_symbols() {
        assert_eq!(BinaryOperator::Decimal.to_string(), ".");
        assert_eq!(BinaryOperator::Equal.to_string(), "=");
        assert_eq!(UnaryOperator::Not.to_string(), "!");
    }
}
