use tracing::trace;

use crate::{
    ast::Expr,
    error::{Expected, ParseError},
    interpreter::{
        lexer::{Cursor, Token},
        parser::{
            binary::{binding_power, token_to_binary_operator},
            statement::parse_statement_list,
            unary::parse_prefix,
        },
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses `source` into a single tree.
///
/// # Errors
/// Returns the first [`ParseError`] encountered. There is no recovery and no
/// partial tree.
///
/// # Example
/// ```
/// use runic::parse;
///
/// let tree = parse("$a=1;a+2*3").unwrap();
/// assert_eq!(tree.to_string(), "(; ($ a 1) (+ a (* 2 3)))");
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut cursor = Cursor::new(source);
    parse_program(&mut cursor)
}

/// Parses a whole program and requires the input to end afterwards.
///
/// Grammar: `program := statement_list END`
pub fn parse_program(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let program = parse_statement_list(cursor)?;
    expect(cursor, Token::End, Expected::EndOfData)?;
    Ok(program)
}

/// Parses an expression by precedence climbing.
///
/// After the prefix, binary operators are folded in for as long as they bind
/// tighter than `min_power`. The right operand is parsed at the operator's own
/// power, so an operator of equal power ends the inner call and is picked up by
/// this loop instead. That makes every binary operator left-associative.
///
/// Grammar:
/// ```text
///     expression(p) := prefix (binop expression(power(binop)))*
/// ```
pub fn parse_expression(cursor: &mut Cursor<'_>, min_power: u8) -> ParseResult<Expr> {
    ensure_sufficient_stack(|| {
        trace!(min_power, prefix = %cursor.current(), "parse_expression");
        let mut left = parse_prefix(cursor)?;

        loop {
            let token = cursor.current();
            let Some(op) = token_to_binary_operator(token) else {
                break;
            };
            let power = binding_power(op);
            trace!(min_power, suffix = %token, power, "found suffix");
            if power <= min_power {
                break;
            }

            cursor.advance();
            let right = parse_expression(cursor, power)?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    })
}

/// Consumes `token` or fails with `expected`, naming the token actually found.
pub(in crate::interpreter::parser) fn expect(cursor: &mut Cursor<'_>,
                                             token: Token,
                                             expected: Expected)
                                             -> ParseResult<()> {
    if cursor.current() == token {
        cursor.advance();
        Ok(())
    } else {
        Err(ParseError::expected(expected, cursor.current()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sexpr(source: &str) -> String {
        parse(source).map_or_else(|e| panic!("{source:?} failed to parse: {e}"), |e| e.to_string())
    }

    fn error(source: &str) -> String {
        match parse(source) {
            Ok(tree) => panic!("{source:?} parsed as {tree}"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn leaves() {
        assert_eq!(sexpr("7"), "7");
        assert_eq!(sexpr("x"), "x");
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(sexpr("1+2*3"), "(+ 1 (* 2 3))");
        assert_eq!(sexpr("1*2+3"), "(+ (* 1 2) 3)");
    }

    #[test]
    fn equal_powers_associate_left() {
        assert_eq!(sexpr("4-3-2"), "(- (- 4 3) 2)");
        assert_eq!(sexpr("6/3/2"), "(/ (/ 6 3) 2)");
        assert_eq!(sexpr("1|0|1"), "(| (| 1 0) 1)");
    }

    #[test]
    fn parentheses_reset_the_power() {
        assert_eq!(sexpr("(1+2)*3"), "(* (+ 1 2) 3)");
        assert_eq!(sexpr("((4))"), "4");
    }

    #[test]
    fn full_precedence_ladder() {
        assert_eq!(sexpr("a|b&c=d<e+f*g.h"),
                   "(| a (& b (= c (< d (+ e (* f (. g h)))))))");
    }

    #[test]
    fn prefix_operators_sit_between_decimal_and_product() {
        assert_eq!(sexpr("-1.5"), "(- (. 1 5))");
        assert_eq!(sexpr("-2*3"), "(* (- 2) 3)");
        assert_eq!(sexpr("!a=b"), "(= (! a) b)");
        assert_eq!(sexpr("--1"), "(- (- 1))");
    }

    #[test]
    fn decimal_join_takes_grouped_fractions() {
        assert_eq!(sexpr("1.(-2)"), "(. 1 (- 2))");
        assert_eq!(sexpr("5.0%3.0"), "(% (. 5 0) (. 3 0))");
    }

    #[test]
    fn declarations_and_sequences() {
        assert_eq!(sexpr("$a=1"), "($ a 1)");
        assert_eq!(sexpr("$a=1=1"), "($ a (= 1 1))");
        assert_eq!(sexpr("$a=1;a"), "(; ($ a 1) a)");
        assert_eq!(sexpr("1;2;3"), "(; 1 2 3)");
    }

    #[test]
    fn whitespace_between_tokens() {
        assert_eq!(sexpr(" $ a = 1 ; a + 2 "), "(; ($ a 1) (+ a 2))");
    }

    #[test]
    fn missing_expression() {
        assert_eq!(error(""), "expected expression, got end of data");
        assert_eq!(error("1+"), "expected expression, got end of data");
        assert_eq!(error("-"), "expected expression, got end of data");
        assert_eq!(error("+"), "expected expression, got +");
        assert_eq!(error("1;"), "expected expression, got end of data");
        assert_eq!(error("(;)"), "expected expression, got ;");
    }

    #[test]
    fn missing_closing_paren() {
        assert_eq!(error("(1+2"), "expected ), got end of data");
        assert_eq!(error("(1 2)"), "expected ), got 2");
    }

    #[test]
    fn malformed_declarations() {
        assert_eq!(error("$1=2"), "expected identifier, got 1");
        assert_eq!(error("$a"), "expected =, got end of data");
        assert_eq!(error("$a+1"), "expected =, got +");
        assert_eq!(error("$a="), "expected expression, got end of data");
    }

    #[test]
    fn declarations_only_at_statement_level() {
        assert_eq!(error("($a=1)"), "expected expression, got $");
        assert_eq!(error("1+$a=1"), "expected expression, got $");
    }

    #[test]
    fn trailing_tokens() {
        assert_eq!(error("12"), "expected end of data, got 2");
        assert_eq!(error("1.25"), "expected end of data, got 5");
        assert_eq!(error("1)"), "expected end of data, got )");
        assert_eq!(error("1?"), "expected end of data, got ?");
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let depth = 20_000;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(sexpr(&source), "1");

        let negations = format!("{}1", "-".repeat(5_000));
        assert!(parse(&negations).is_ok());
    }
}
