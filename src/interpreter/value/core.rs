use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every evaluation step produces a fresh value; values are never mutated in
/// place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer. Digit literals evaluate to this.
    Integer(i64),
    /// A double precision floating-point number. Only the decimal join
    /// operator (`.`) creates one.
    Real(f64),
    /// A boolean value, produced by comparisons and logical operators.
    Bool(bool),
}

impl Value {
    /// Returns the user-facing name of the value's type.
    ///
    /// # Example
    /// ```
    /// use runic::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "integer");
    /// assert_eq!(Value::Real(0.5).type_name(), "real");
    /// assert_eq!(Value::Bool(true).type_name(), "boolean");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used by `!`, `&` and `|`.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    pub const fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.type_name() }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Keep a fractional part so reals never look like integers.
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
