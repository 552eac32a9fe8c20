use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an operator on two integers.
    ///
    /// Arithmetic is checked: overflow is an error rather than wrapping.
    /// Division truncates toward zero and the remainder takes the sign of the
    /// dividend. Comparisons are delegated to
    /// [`Context::eval_comparison`] and `.` to
    /// [`Context::eval_decimal_join`].
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `Overflow` when the result does not fit in an `i64`.
    /// - `InvalidOperator` for `&` and `|`.
    ///
    /// # Example
    /// ```
    /// use runic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_integer_op(BinaryOperator::Mod, -7, 3).unwrap(),
    ///            Value::Integer(-1));
    /// assert!(Context::eval_integer_op(BinaryOperator::Div, 5, 0).is_err());
    /// ```
    pub fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
        use BinaryOperator::{Add, And, Decimal, Div, Equal, Greater, Less, Mod, Mul, Or, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div | Mod if b == 0 => return Err(RuntimeError::DivisionByZero),
            Div => a.checked_div(b),
            Mod => a.checked_rem(b),
            Less | Greater | Equal => return Ok(Self::eval_comparison(op, &a, &b)),
            Decimal => return Self::eval_decimal_join(a, b),
            And | Or => {
                return Err(RuntimeError::InvalidOperator { op,
                                                           operand: "integer" });
            },
        };

        result.map(Value::Integer).ok_or(RuntimeError::Overflow)
    }

    /// Evaluates an operator on two reals.
    ///
    /// Follows IEEE-754: dividing by zero yields an infinity or NaN instead of
    /// an error.
    ///
    /// # Errors
    /// `InvalidOperator` for `%`, `.`, `&` and `|`.
    ///
    /// # Example
    /// ```
    /// use runic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_real_op(BinaryOperator::Div, 5.0, 0.0).unwrap(),
    ///            Value::Real(f64::INFINITY));
    /// assert!(Context::eval_real_op(BinaryOperator::Mod, 5.0, 3.0).is_err());
    /// ```
    pub fn eval_real_op(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
        use BinaryOperator::{Add, And, Decimal, Div, Equal, Greater, Less, Mod, Mul, Or, Sub};

        match op {
            Add => Ok(Value::Real(a + b)),
            Sub => Ok(Value::Real(a - b)),
            Mul => Ok(Value::Real(a * b)),
            Div => Ok(Value::Real(a / b)),
            Less | Greater | Equal => Ok(Self::eval_comparison(op, &a, &b)),
            Mod | Decimal | And | Or => {
                Err(RuntimeError::InvalidOperator { op,
                                                    operand: "real" })
            },
        }
    }
}
