use crate::ast::BinaryOperator;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("undefined variable {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name: char,
    },
    /// Integer division or modulo with a zero divisor.
    #[error("dividing by zero")]
    DivisionByZero,
    /// A boolean value was expected, but not found.
    #[error("expected boolean value, got {found}")]
    ExpectedBoolean {
        /// Type name of the value that was produced instead.
        found: &'static str,
    },
    /// A numeric value was expected, but not found.
    #[error("expected numeric value, got {found}")]
    ExpectedNumber {
        /// Type name of the value that was produced instead.
        found: &'static str,
    },
    /// The two operands of a binary operator have different types.
    #[error("unexpected values for {op}: {left} and {right}")]
    UnexpectedValues {
        /// The operator being applied.
        op:    BinaryOperator,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// The operand types agree but do not support the operator.
    #[error("invalid operator {op} for {operand} values")]
    InvalidOperator {
        /// The operator being applied.
        op:      BinaryOperator,
        /// Type name shared by both operands.
        operand: &'static str,
    },
    /// The fractional part of a decimal join was negative.
    #[error("negative decimal part {value}")]
    NegativeDecimalPart {
        /// The offending right operand.
        value: i64,
    },
    /// A sequence node with no statements. The parser never builds one.
    #[error("empty statement sequence")]
    EmptySequence,
    /// Integer arithmetic overflowed.
    #[error("integer overflow")]
    Overflow,
    /// An integer could not be widened to a real without losing precision.
    #[error("integer {value} cannot be represented exactly as a real")]
    PrecisionLoss {
        /// The integer being widened.
        value: i64,
    },
}
