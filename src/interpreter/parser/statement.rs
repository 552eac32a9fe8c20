use crate::{
    ast::Expr,
    error::{Expected, ParseError},
    interpreter::{
        lexer::{Cursor, Token},
        parser::core::{ParseResult, expect, parse_expression},
    },
};

/// Parses one or more statements separated by `;`.
///
/// A single statement is returned as-is; two or more are collected into one
/// [`Expr::Sequence`].
///
/// Grammar: `statement_list := statement (";" statement)*`
pub fn parse_statement_list(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let first = parse_statement(cursor)?;
    if cursor.current() != Token::Semicolon {
        return Ok(first);
    }

    let mut statements = vec![first];
    while cursor.current() == Token::Semicolon {
        cursor.advance();
        statements.push(parse_statement(cursor)?);
    }

    Ok(Expr::Sequence { statements })
}

/// Parses a single statement: either a declaration or a plain expression.
///
/// Grammar:
/// ```text
///     statement := "$" identifier "=" expression(0)
///                | expression(0)
/// ```
///
/// # Errors
/// Once a `$` has been seen, a missing identifier or `=` is reported as a
/// parse error right away.
pub fn parse_statement(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    if cursor.current() != Token::Dollar {
        return parse_expression(cursor, 0);
    }
    cursor.advance();

    let Token::Identifier(name) = cursor.current() else {
        return Err(ParseError::expected(Expected::Identifier, cursor.current()));
    };
    cursor.advance();

    expect(cursor, Token::Equals, Expected::Equals)?;
    let value = parse_expression(cursor, 0)?;

    Ok(Expr::assignment(name, value))
}
