use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{decimal_digits, i64_to_f64_checked},
};

impl Context {
    /// Joins an integer part and a fractional digit sequence into a real.
    ///
    /// The fraction is `fraction / 10^digits(fraction)`, so `1 . 25` is
    /// `1.25` and `3 . 5` is `3.5`. It is added to a non-negative whole part
    /// and subtracted from a negative one, which keeps `(-1) . 5` at `-1.5`.
    /// A zero fraction simply widens the whole part.
    ///
    /// # Errors
    /// - `NegativeDecimalPart` when `fraction < 0`.
    /// - `PrecisionLoss` when either side is too large to be an exact `f64`.
    ///
    /// # Example
    /// ```
    /// use runic::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::eval_decimal_join(1, 25).unwrap(), Value::Real(1.25));
    /// assert_eq!(Context::eval_decimal_join(-2, 5).unwrap(), Value::Real(-2.5));
    /// assert!(Context::eval_decimal_join(1, -2).is_err());
    /// ```
    pub fn eval_decimal_join(whole: i64, fraction: i64) -> EvalResult<Value> {
        if fraction < 0 {
            return Err(RuntimeError::NegativeDecimalPart { value: fraction });
        }

        let whole_part = i64_to_f64_checked(whole, RuntimeError::PrecisionLoss { value: whole })?;
        if fraction == 0 {
            return Ok(Value::Real(whole_part));
        }

        let digits = i64_to_f64_checked(fraction, RuntimeError::PrecisionLoss { value: fraction })?;
        let fraction_part = digits / 10_f64.powi(decimal_digits(fraction.unsigned_abs()));

        if whole < 0 {
            Ok(Value::Real(whole_part - fraction_part))
        } else {
            Ok(Value::Real(whole_part + fraction_part))
        }
    }
}
