/// Core parsing entry points.
///
/// Contains the program rule, the precedence-climbing expression loop and the
/// small token-expectation helper shared by the other parser modules.
pub mod core;

/// Prefix parsing.
///
/// Handles everything that can start an expression: digits, identifiers,
/// negation, logical NOT and parenthesized groups.
pub mod unary;

/// Binary operator tables.
///
/// Maps tokens to binary operators and assigns each operator its binding
/// power.
pub mod binary;

/// Statement parsing.
///
/// Implements `$name = expr` declarations and `;`-separated statement lists.
pub mod statement;
