use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a prefix operation.
    ///
    /// `!` goes through [`Context::eval_bool`], so its operand must be a
    /// boolean. `-` evaluates its operand and hands it to
    /// [`Context::eval_negate`].
    pub fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Expr) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Self::eval_negate(&self.eval(expr)?),
            UnaryOperator::Not => Ok(Value::Bool(!self.eval_bool(expr)?)),
        }
    }

    /// Negates a number.
    ///
    /// # Errors
    /// - `ExpectedNumber` for booleans.
    /// - `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use runic::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::eval_negate(&Value::Integer(5)).unwrap(), Value::Integer(-5));
    /// assert_eq!(Context::eval_negate(&Value::Real(0.5)).unwrap(), Value::Real(-0.5));
    /// assert!(Context::eval_negate(&Value::Bool(true)).is_err());
    /// ```
    pub fn eval_negate(value: &Value) -> EvalResult<Value> {
        match value {
            Value::Integer(n) => n.checked_neg().map(Value::Integer).ok_or(RuntimeError::Overflow),
            Value::Real(r) => Ok(Value::Real(-r)),
            Value::Bool(_) => Err(RuntimeError::ExpectedNumber { found: value.type_name() }),
        }
    }
}
