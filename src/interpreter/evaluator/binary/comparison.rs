use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Compares two operands of the same numeric type.
    ///
    /// Only `<`, `>` and `=` reach this function. Reals compare with IEEE-754
    /// semantics, so NaN is unequal to everything including itself.
    ///
    /// # Example
    /// ```
    /// use runic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_comparison(BinaryOperator::Less, &1, &2), Value::Bool(true));
    /// assert_eq!(Context::eval_comparison(BinaryOperator::Equal, &f64::NAN, &f64::NAN),
    ///            Value::Bool(false));
    /// ```
    #[must_use]
    pub fn eval_comparison<T: PartialOrd>(op: BinaryOperator, a: &T, b: &T) -> Value {
        match op {
            BinaryOperator::Less => Value::Bool(a < b),
            BinaryOperator::Greater => Value::Bool(a > b),
            _ => Value::Bool(a == b),
        }
    }

    /// Evaluates an operator on two already-evaluated booleans.
    ///
    /// Only equality and the logical operators are defined. Ordering,
    /// arithmetic and decimal join on booleans are type errors.
    ///
    /// # Errors
    /// `InvalidOperator` for anything but `=`, `&` and `|`.
    pub fn eval_bool_op(op: BinaryOperator, a: bool, b: bool) -> EvalResult<Value> {
        match op {
            BinaryOperator::Equal => Ok(Value::Bool(a == b)),
            BinaryOperator::And => Ok(Value::Bool(a && b)),
            BinaryOperator::Or => Ok(Value::Bool(a || b)),
            _ => {
                Err(RuntimeError::InvalidOperator { op,
                                                    operand: "boolean" })
            },
        }
    }
}
