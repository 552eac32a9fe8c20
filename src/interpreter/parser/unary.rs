use crate::{
    ast::{Expr, UnaryOperator},
    error::{Expected, ParseError},
    interpreter::{
        lexer::{Cursor, Token},
        parser::core::{ParseResult, expect, parse_expression},
    },
};

/// Binding power of `-` and `!` in prefix position.
///
/// Binds tighter than `*` but looser than `.`, so `-1.5` negates `1.5` and
/// `-2*3` multiplies `-2` by `3`.
pub const PREFIX_POWER: u8 = 7;

/// Parses the prefix part of an expression.
///
/// Grammar:
/// ```text
///     prefix := digit | identifier
///             | ("-" | "!") expression(PREFIX_POWER)
///             | "(" expression(0) ")"
/// ```
///
/// # Errors
/// - `expected expression` when the current token cannot start one.
/// - `expected )` when a group is not closed.
pub fn parse_prefix(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let token = cursor.current();
    match token {
        Token::Digit(value) => {
            cursor.advance();
            Ok(Expr::literal(value))
        },
        Token::Identifier(name) => {
            cursor.advance();
            Ok(Expr::variable(name))
        },
        Token::Minus | Token::Bang => {
            let op = if token == Token::Minus { UnaryOperator::Negate } else { UnaryOperator::Not };
            cursor.advance();
            let operand = parse_expression(cursor, PREFIX_POWER)?;
            Ok(Expr::unary(op, operand))
        },
        Token::LParen => {
            cursor.advance();
            let inner = parse_expression(cursor, 0)?;
            expect(cursor, Token::RParen, Expected::ClosingParen)?;
            Ok(inner)
        },
        _ => Err(ParseError::expected(Expected::Expression, token)),
    }
}
