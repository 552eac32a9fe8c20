use std::fmt;

use crate::interpreter::lexer::Token;

/// The construct the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A digit, an identifier, a prefix operator or `(`.
    Expression,
    /// A variable name after `$`.
    Identifier,
    /// The `=` of a declaration.
    Equals,
    /// The `)` closing a parenthesized expression.
    ClosingParen,
    /// Nothing at all; the program should have ended.
    EndOfData,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression => write!(f, "expression"),
            Self::Identifier => write!(f, "identifier"),
            Self::Equals => write!(f, "="),
            Self::ClosingParen => write!(f, ")"),
            Self::EndOfData => write!(f, "end of data"),
        }
    }
}

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token that cannot appear at this position. `found` is
    /// [`Token::End`] when the input ran out.
    #[error("expected {expected}, got {found}")]
    UnexpectedToken {
        /// What the grammar required here.
        expected: Expected,
        /// The token encountered.
        found:    Token,
    },
}

impl ParseError {
    /// Builds an [`ParseError::UnexpectedToken`].
    ///
    /// # Example
    /// ```
    /// use runic::{error::{Expected, ParseError}, interpreter::lexer::Token};
    ///
    /// let err = ParseError::expected(Expected::Expression, Token::End);
    /// assert_eq!(err.to_string(), "expected expression, got end of data");
    /// ```
    #[must_use]
    pub const fn expected(expected: Expected, found: Token) -> Self {
        Self::UnexpectedToken { expected, found }
    }
}
