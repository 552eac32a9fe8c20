/// Numeric conversion helpers.
///
/// Safe conversions between `i64` and `f64` that refuse to lose precision,
/// plus the digit counting used by the decimal join operator.
pub mod num;
/// Stack growth for deeply nested input.
///
/// The parser and evaluator both recurse once per nesting level. Wrapping the
/// recursive step in [`stack::ensure_sufficient_stack`] keeps adversarial input
/// like a thousand nested parentheses from overflowing the native stack.
pub mod stack;
