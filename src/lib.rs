//! # runic
//!
//! runic is a tiny expression language interpreter. Programs are made of
//! single-digit literals, single-letter variables, arithmetic, comparison and
//! logic operators, `$x=...` declarations and `;`-separated statement lists.
//!
//! ```
//! use runic::{Interpreter, interpreter::value::core::Value};
//!
//! let mut interpreter = Interpreter::new();
//! assert_eq!(interpreter.evaluate("$a=2;a*3+1").unwrap(), Value::Integer(7));
//! assert_eq!(interpreter.evaluate("a.(5*5)").unwrap(), Value::Real(2.25));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator enums that make up
/// the syntax tree. The tree is built by the parser and read by the
/// evaluator, and renders as an s-expression for inspection.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse and runtime failures have separate enums, joined by one
/// [`error::Error`] so callers handle a single error channel.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// runtime value type.
pub mod interpreter;
/// General utilities shared by the parser and the evaluator.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` without silent data loss.
/// - Grow the stack for deeply nested programs.
pub mod util;

pub use interpreter::parser::core::parse;

/// An interpreter instance with its own variable environment.
///
/// Bindings survive across calls to [`Interpreter::evaluate`], so one
/// instance behaves like a REPL session. Separate instances share nothing.
#[derive(Debug, Default, Clone)]
pub struct Interpreter {
    context: Context,
}

impl Interpreter {
    /// Creates an interpreter with no variables bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and evaluates `source` against this interpreter's variables.
    ///
    /// Returns the value of the last statement, or the first parse or runtime
    /// error. Assignments made by statements that ran before a runtime error
    /// are kept.
    ///
    /// # Examples
    /// ```
    /// use runic::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.evaluate("$x=4").unwrap();
    /// assert_eq!(interpreter.evaluate("x*x").unwrap().to_string(), "16");
    ///
    /// let err = interpreter.evaluate("y").unwrap_err();
    /// assert_eq!(err.to_string(), "undefined variable y");
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Result<Value, Error> {
        debug!(source, "evaluate");
        let program = parse(source)?;
        let value = self.context.eval(&program)?;
        debug!(%value, "result");
        Ok(value)
    }

    /// Returns the value currently bound to `name`, if any.
    #[must_use]
    pub fn variable(&self, name: char) -> Option<&Value> {
        self.context.get_variable(name)
    }

    /// Forgets every variable binding.
    pub fn clear(&mut self) {
        self.context.variables.clear();
    }
}

/// Evaluates `source` on a fresh interpreter.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use runic::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("(1=1)|(1/0)").unwrap(), Value::Bool(true));
///
/// let err = evaluate("1+").unwrap_err();
/// assert_eq!(err.to_string(), "expected expression, got end of data");
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    Interpreter::new().evaluate(source)
}
