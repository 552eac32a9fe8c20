/// Dispatch on the operator and on the runtime types of both operands.
pub mod core;

/// Short-circuiting `&` and `|`.
pub mod logic;

/// Integer and real arithmetic.
pub mod scalar;

/// `<`, `>` and `=`.
pub mod comparison;

/// The decimal join operator (`.`).
pub mod decimal;
