use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::core::Value,
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// Holds the flat variable environment. There is no block scoping: every
/// assignment writes into the same map, and bindings outlive the evaluation
/// that created them.
#[derive(Debug, Default, Clone)]
pub struct Context {
    /// The value last assigned to each variable.
    pub variables: HashMap<char, Value>,
}

impl Context {
    /// Creates a new evaluation context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Errors abort
    /// the walk immediately; nothing after the failing node is evaluated.
    ///
    /// # Example
    /// ```
    /// use runic::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let tree = Expr::binary(Expr::literal(2), BinaryOperator::Mul, Expr::literal(3));
    ///
    /// assert_eq!(context.eval(&tree).unwrap(), Value::Integer(6));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal { value } => Ok(Value::Integer(i64::from(*value))),
            Expr::Variable { name } => self.eval_variable(*name),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::Assignment { name, value } => self.eval_assignment(*name, value),
            Expr::Sequence { statements } => self.eval_sequence(statements),
        })
    }

    /// Evaluates `expr` and requires the result to be a boolean.
    ///
    /// # Errors
    /// `RuntimeError::ExpectedBoolean` if the value has any other type, or the
    /// error raised while evaluating `expr`.
    pub fn eval_bool(&mut self, expr: &Expr) -> EvalResult<bool> {
        self.eval(expr)?.as_bool()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get_variable(&self, name: char) -> Option<&Value> {
        self.variables.get(&name)
    }

    fn eval_variable(&self, name: char) -> EvalResult<Value> {
        self.get_variable(name)
            .copied()
            .ok_or(RuntimeError::UndefinedVariable { name })
    }

    fn eval_assignment(&mut self, name: char, value: &Expr) -> EvalResult<Value> {
        let value = self.eval(value)?;
        debug!(%name, %value, "assign");
        self.variables.insert(name, value);
        Ok(value)
    }

    /// Runs statements in order and keeps the last value. Bindings made before
    /// a failing statement stay in place.
    fn eval_sequence(&mut self, statements: &[Expr]) -> EvalResult<Value> {
        let (last, init) = statements.split_last().ok_or(RuntimeError::EmptySequence)?;
        for statement in init {
            self.eval(statement)?;
        }
        self.eval(last)
    }
}
