/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use runic::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!"), Ok(42.0));
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Counts the decimal digits of `value`. Zero has one digit.
///
/// ## Example
/// ```
/// use runic::util::num::decimal_digits;
///
/// assert_eq!(decimal_digits(0), 1);
/// assert_eq!(decimal_digits(25), 2);
/// assert_eq!(decimal_digits(u64::MAX), 20);
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn decimal_digits(value: u64) -> i32 {
    // ilog10 of a u64 is at most 19.
    match value.checked_ilog10() {
        Some(log) => log as i32 + 1,
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_keeps_the_sign() {
        assert_eq!(i64_to_f64_checked(-7, ()), Ok(-7.0));
    }

    #[test]
    fn widening_rejects_both_extremes() {
        assert!(i64_to_f64_checked(i64::MAX, ()).is_err());
        assert!(i64_to_f64_checked(i64::MIN, ()).is_err());
    }

    #[test]
    fn digit_counts_at_powers_of_ten() {
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(999), 3);
        assert_eq!(decimal_digits(1000), 4);
    }
}
