use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `&` or `|` with short-circuiting.
    ///
    /// The left operand is evaluated and coerced to a boolean first. `&` stops
    /// on `false` and `|` stops on `true`; in both cases the right operand is
    /// never evaluated, so its errors cannot surface. Otherwise the right
    /// operand decides the result and must be a boolean as well.
    ///
    /// # Example
    /// ```
    /// use runic::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let falsy = Expr::binary(Expr::literal(1), BinaryOperator::Equal, Expr::literal(2));
    /// let boom = Expr::binary(Expr::literal(1), BinaryOperator::Div, Expr::literal(0));
    ///
    /// let result = context.eval_logic(BinaryOperator::And, &falsy, &boom);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_logic(&mut self,
                      op: BinaryOperator,
                      left: &Expr,
                      right: &Expr)
                      -> EvalResult<Value> {
        let left = self.eval_bool(left)?;

        match op {
            BinaryOperator::And if !left => Ok(Value::Bool(false)),
            BinaryOperator::Or if left => Ok(Value::Bool(true)),
            _ => Ok(Value::Bool(self.eval_bool(right)?)),
        }
    }
}
