/// The evaluator module walks the AST and computes results.
///
/// It holds the variable environment, enforces the runtime type rules and
/// reports runtime errors such as division by zero or operand mismatches.
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Short-circuits `&` and `|`.
/// - Never promotes one value type to another.
pub mod evaluator;
/// The lexer module turns source text into single-character tokens.
///
/// Tokens are produced on demand through a one-token-lookahead
/// [`lexer::Cursor`] that ends in a sticky end-of-data sentinel.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Declarations and statement lists are handled by dedicated rules; all
/// operators go through one precedence-climbing loop.
///
/// # Responsibilities
/// - Converts the token stream into a single [`crate::ast::Expr`].
/// - Rejects malformed input with the first unexpected token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
