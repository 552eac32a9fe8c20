/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the variable environment, sequencing,
/// assignment and the boolean coercion helper.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles short-circuiting logic operators and the strictly typed
/// arithmetic, comparison and decimal join operators.
pub mod binary;
