use postfixa::{
    calculate,
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::{Token, tokenize},
        operator::{OPERATOR_SYMBOLS, Operator, lookup},
    },
};

fn assert_evaluates(expression: &str, expected: i64) {
    match calculate(expression) {
        Ok(value) => assert_eq!(value, expected, "expression: {expression}"),
        Err(e) => panic!("Expression '{expression}' failed: {e}"),
    }
}

fn assert_fails(expression: &str) {
    if calculate(expression).is_ok() {
        panic!("Expression '{expression}' succeeded but was expected to fail")
    }
}

fn runtime_error(expression: &str) -> RuntimeError {
    let error = calculate(expression).expect_err("expression was expected to fail");

    *error.downcast::<RuntimeError>().unwrap_or_else(|e| {
                                         panic!("Expression '{expression}' failed with a \
                                                 non-runtime error: {e}")
                                     })
}

#[test]
fn reference_expressions_evaluate() {
    let cases = [("7", 7),
                 ("20 5 /", 4),
                 ("4 2 +", 6),
                 ("4 2 + 3 -", 3),
                 ("3 5 8 * 7 + *", 141),
                 ("9 SQRT", 3),
                 ("5 3 4 2 9 1 MAX", 9),
                 ("4 5 MAX 1 2 MAX *", 10)];

    for (expression, expected) in cases {
        assert_evaluates(expression, expected);
    }
}

#[test]
fn single_literals_evaluate_to_themselves() {
    assert_evaluates("7", 7);
    assert_evaluates("0", 0);
    assert_evaluates("-17", -17);
    assert_evaluates("9223372036854775807", i64::MAX);
    assert_evaluates("-9223372036854775808", i64::MIN);
}

#[test]
fn subtraction_respects_operand_order() {
    assert_evaluates("7 3 -", 4);
    assert_evaluates("3 7 -", -4);
    assert_evaluates("4 2 + 3 -", 3);
}

#[test]
fn division_truncates_toward_zero() {
    assert_evaluates("20 5 /", 4);
    assert_evaluates("7 2 /", 3);
    assert_evaluates("-7 2 /", -3);
    assert_evaluates("7 -2 /", -3);
}

#[test]
fn sqrt_truncates_to_the_integer_floor() {
    assert_evaluates("9 SQRT", 3);
    assert_evaluates("2 SQRT", 1);
    assert_evaluates("0 SQRT", 0);
    assert_evaluates("15 SQRT", 3);
    assert_evaluates("16 SQRT", 4);
}

#[test]
fn max_drains_the_whole_stack() {
    assert_evaluates("5 3 4 2 9 1 MAX", 9);
    assert_evaluates("42 MAX", 42);
    assert_evaluates("-5 -3 MAX", -3);

    // Results of fixed-arity operators are fair game for MAX.
    assert_evaluates("9 1 + 2 MAX", 10);

    // A MAX result is claimed, so the second MAX only sees the operands
    // pushed after the first one and the multiplication gets both results.
    assert_evaluates("4 5 MAX 1 2 MAX *", 10);
}

#[test]
fn repeated_evaluation_is_stateless() {
    let first = calculate("3 5 8 * 7 + *").unwrap();
    let second = calculate("3 5 8 * 7 + *").unwrap();

    assert_eq!(first, 141);
    assert_eq!(first, second);
}

#[test]
fn tokenizer_preserves_order_and_positions() {
    let tokens = tokenize("20 5 /").unwrap();

    assert_eq!(tokens,
               vec![(Token::Integer(20), 0),
                    (Token::Integer(5), 3),
                    (Token::Operator(Operator::Div), 5)]);
}

#[test]
fn every_registered_symbol_resolves() {
    for symbol in OPERATOR_SYMBOLS {
        assert!(lookup(symbol).is_some(), "symbol {symbol} did not resolve");
    }

    assert_eq!(lookup("ABS"), None);
    assert_eq!(lookup("max"), None);
}

#[test]
fn malformed_tokens_are_rejected() {
    for expression in ["4 two +", "1.5", "sqrt", "4 2 &", "0x10"] {
        let error = tokenize(expression).expect_err(expression);
        assert!(matches!(error, ParseError::MalformedToken { .. }),
                "expression: {expression}");
    }

    // Integer literals that do not fit in an i64 are malformed, not clamped.
    assert_fails("99999999999999999999999999");
}

#[test]
fn division_by_zero_is_reported() {
    assert!(matches!(runtime_error("5 0 /"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn negative_square_root_is_reported() {
    assert!(matches!(runtime_error("-9 SQRT"),
                     RuntimeError::NegativeSquareRoot { value: -9, .. }));
    assert!(matches!(runtime_error("0 9 - SQRT"),
                     RuntimeError::NegativeSquareRoot { value: -9, .. }));
}

#[test]
fn insufficient_operands_are_reported() {
    assert!(matches!(runtime_error("+"), RuntimeError::StackUnderflow { symbol: "+", .. }));
    assert!(matches!(runtime_error("1 +"), RuntimeError::StackUnderflow { .. }));
    assert!(matches!(runtime_error("SQRT"), RuntimeError::StackUnderflow { .. }));
}

#[test]
fn max_of_an_empty_stack_is_reported() {
    assert!(matches!(runtime_error("MAX"),
                     RuntimeError::EmptyOperands { symbol: "MAX", .. }));
}

#[test]
fn overflow_is_reported() {
    assert!(matches!(runtime_error("9223372036854775807 1 +"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("-9223372036854775808 -1 /"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn leftover_operands_are_reported() {
    assert!(matches!(runtime_error("1 2"), RuntimeError::TrailingOperands { count: 2 }));
    assert!(matches!(runtime_error("1 2 3 +"), RuntimeError::TrailingOperands { count: 2 }));
}

#[test]
fn empty_expressions_are_reported() {
    assert!(matches!(runtime_error(""), RuntimeError::MissingResult));
    assert!(matches!(runtime_error("   "), RuntimeError::MissingResult));
}
