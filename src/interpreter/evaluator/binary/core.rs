use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation node.
    ///
    /// `&` and `|` are routed to [`Context::eval_logic`] before either operand
    /// is touched. Every other operator evaluates the left operand, then the
    /// right one, and applies [`Context::eval_binary`] to the results.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logic(op, left, right);
        }

        let left = self.eval(left)?;
        let right = self.eval(right)?;
        trace!(%left, %op, %right, "binary");
        Self::eval_binary(op, &left, &right)
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// Dispatch happens on the pair of runtime types. Both operands must have
    /// the same type; nothing is ever promoted.
    ///
    /// - integers: arithmetic, comparison and decimal join.
    /// - reals: arithmetic and comparison.
    /// - booleans: equality, plus `&` and `|`.
    ///
    /// # Errors
    /// - `UnexpectedValues` when the operand types differ.
    /// - `InvalidOperator` when the shared type does not support `op`.
    /// - whatever the type-specific handler reports (division by zero,
    ///   overflow, negative decimal part).
    ///
    /// # Example
    /// ```
    /// use runic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4));
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let mixed = Context::eval_binary(BinaryOperator::Add, &Value::Integer(1), &Value::Real(2.0));
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Value::{Bool, Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => Self::eval_integer_op(op, *a, *b),
            (Real(a), Real(b)) => Self::eval_real_op(op, *a, *b),
            (Bool(a), Bool(b)) => Self::eval_bool_op(op, *a, *b),
            _ => Err(RuntimeError::UnexpectedValues { op,
                                                      left: left.type_name(),
                                                      right: right.type_name() }),
        }
    }
}
