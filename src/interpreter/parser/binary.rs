use crate::{ast::BinaryOperator, interpreter::lexer::Token};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that cannot continue an expression.
///
/// # Example
/// ```
/// use runic::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Dot), Some(BinaryOperator::Decimal));
/// assert_eq!(token_to_binary_operator(Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Dot => Some(BinaryOperator::Decimal),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Equals => Some(BinaryOperator::Equal),
        Token::Ampersand => Some(BinaryOperator::And),
        Token::Pipe => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Returns how tightly `op` binds its operands.
///
/// Higher binds tighter. Prefix operators sit at
/// [`PREFIX_POWER`](crate::interpreter::parser::unary::PREFIX_POWER), between
/// decimal join and the multiplicative operators. Every value is above zero,
/// so an expression parsed with minimum power `0` accepts any operator.
#[must_use]
pub const fn binding_power(op: BinaryOperator) -> u8 {
    use BinaryOperator::{Add, And, Decimal, Div, Equal, Greater, Less, Mod, Mul, Or, Sub};

    match op {
        Decimal => 8,
        Mul | Div | Mod => 6,
        Add | Sub => 5,
        Less | Greater => 4,
        Equal => 3,
        And => 2,
        Or => 1,
    }
}
