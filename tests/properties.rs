//! Property-based tests for the parser and evaluator.
//!
//! 1. **Parser never panics**: arbitrary input always produces a result.
//! 2. **Digits evaluate to themselves.**
//! 3. **Left associativity**: `a-b-c` always equals `(a-b)-c`.
//! 4. **Determinism**: a pure program gives the same result on any fresh
//!    interpreter.
//! 5. **Isolation**: bindings a program never reads do not change its result.

use proptest::prelude::*;
use runic::{Interpreter, evaluate, interpreter::value::core::Value, parse};

/// Characters the lexer knows about, plus a few it does not.
const ALPHABET: &[char] = &['0', '1', '2', '5', '9', 'a', 'b', '$', '=', '+', '-', '*', '/', '%',
                            '.', '<', '>', '!', '&', '|', '(', ')', ';', ' ', '#'];

/// Digits, operators and parentheses, with no identifiers or declarations.
const PURE_ALPHABET: &[char] = &['0', '1', '2', '5', '9', '+', '-', '*', '/', '%', '.', '<', '>',
                                 '!', '&', '|', '(', ')', ';', '='];

fn pure_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(PURE_ALPHABET), 1..30).prop_map(|chars| {
                                                                        chars.into_iter().collect()
                                                                    })
}

fn same_outcome(first: &Result<Value, String>, second: &Result<Value, String>) -> bool {
    // NaN is the one value that is not equal to itself.
    match (first, second) {
        (Ok(Value::Real(x)), Ok(Value::Real(y))) if x.is_nan() => y.is_nan(),
        _ => first == second,
    }
}

fn program_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..40).prop_map(|chars| {
                                                                   chars.into_iter().collect()
                                                               })
}

proptest! {
    #[test]
    fn parser_never_panics(source in "\\PC{0,64}") {
        let _ = parse(&source);
    }

    #[test]
    fn evaluator_never_panics(source in program_text()) {
        let _ = Interpreter::new().evaluate(&source);
    }

    #[test]
    fn digits_evaluate_to_themselves(digit in 0_i64..=9) {
        prop_assert_eq!(evaluate(&digit.to_string()).unwrap(), Value::Integer(digit));
    }

    #[test]
    fn subtraction_associates_left(a in 0_i64..=9, b in 0_i64..=9, c in 0_i64..=9) {
        let chained = evaluate(&format!("{a}-{b}-{c}")).unwrap();
        let grouped = evaluate(&format!("({a}-{b})-{c}")).unwrap();
        prop_assert_eq!(chained, grouped);
        prop_assert_eq!(chained, Value::Integer(a - b - c));
    }

    #[test]
    fn fresh_interpreters_agree(source in program_text()) {
        let first = Interpreter::new().evaluate(&source).map_err(|e| e.to_string());
        let second = Interpreter::new().evaluate(&source).map_err(|e| e.to_string());
        prop_assert!(same_outcome(&first, &second), "{:?} vs {:?}", first, second);
    }

    #[test]
    fn unread_bindings_do_not_change_results(source in pure_text(),
                                             name in prop::sample::select(vec!['a', 'x', 'λ']),
                                             digit in 0_u8..=9) {
        let fresh = Interpreter::new().evaluate(&source).map_err(|e| e.to_string());

        let mut primed = Interpreter::new();
        primed.evaluate(&format!("${name}={digit}")).unwrap();
        let after = primed.evaluate(&source).map_err(|e| e.to_string());

        prop_assert!(same_outcome(&fresh, &after), "{:?} vs {:?}", fresh, after);
    }

    #[test]
    fn referenced_bindings_decide_the_result(digit in 0_i64..=9) {
        let mut interpreter = Interpreter::new();
        interpreter.evaluate(&format!("$a={digit}")).unwrap();
        prop_assert_eq!(interpreter.evaluate("a+1").unwrap(), Value::Integer(digit + 1));
        prop_assert!(Interpreter::new().evaluate("a+1").is_err());
    }
}
