/// Parsing errors.
///
/// Defines every error the parser can raise. Parse errors name the construct
/// that was expected and the token that was actually found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, undefined variables or operand type mismatches.
pub mod runtime_error;

pub use parse_error::{Expected, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure produced by [`crate::Interpreter::evaluate`].
///
/// Parse and runtime errors share one channel; the message is always the one
/// of the phase that failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text is not a well-formed program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program is well-formed but failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
