use rpncalc::{
    calculate,
    error::{EvalError, ParseError},
    evaluate,
    interpreter::{
        converter::to_postfix,
        evaluator::eval_postfix,
        token::Token,
        tokenizer::tokenize,
    },
};

fn assert_value(expr: &str, expected: f64) {
    match evaluate(expr) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "Expression '{expr}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression '{expr}' failed: {e}"),
    }
}

fn assert_error(expr: &str, expected: &str) {
    assert_eq!(calculate(expr), expected, "for expression '{expr}'");
}

fn num(text: &str) -> Token {
    Token::Number(text.to_string())
}

#[test]
fn tokenize_splits_numbers_and_operators() {
    assert_eq!(tokenize("3+4*2"),
               vec![num("3"), Token::Plus, num("4"), Token::Star, num("2")]);
}

#[test]
fn tokenize_normalizes_leading_unary_minus() {
    assert_eq!(tokenize("-5+2"),
               vec![num("0"), Token::Minus, num("5"), Token::Plus, num("2")]);
}

#[test]
fn tokenize_normalizes_unary_minus_after_operator_and_paren() {
    assert_eq!(tokenize("2*-3"),
               vec![num("2"), Token::Star, num("0"), Token::Minus, num("3")]);
    assert_eq!(tokenize("(-5)"),
               vec![Token::LParen, num("0"), Token::Minus, num("5"), Token::RParen]);
}

#[test]
fn tokenize_treats_minus_after_operand_as_binary() {
    assert_eq!(tokenize("5-2"), vec![num("5"), Token::Minus, num("2")]);
    assert_eq!(tokenize("(1)-2"),
               vec![Token::LParen, num("1"), Token::RParen, Token::Minus, num("2")]);
}

#[test]
fn tokenize_strips_whitespace_even_inside_numbers() {
    assert_eq!(tokenize(" 1 2 + 3 "), vec![num("12"), Token::Plus, num("3")]);
}

#[test]
fn tokenize_keeps_malformed_literal_as_single_token() {
    assert_eq!(tokenize("1.2.3"), vec![num("1.2.3")]);
}

#[test]
fn tokenize_carries_unknown_characters_through() {
    assert_eq!(tokenize("2$3"),
               vec![num("2"), Token::Unknown("$".to_string()), num("3")]);
}

#[test]
fn postfix_orders_by_precedence() {
    let rpn = to_postfix(&tokenize("3+4*2")).unwrap();
    assert_eq!(rpn, vec![num("3"), num("4"), num("2"), Token::Star, Token::Plus]);
}

#[test]
fn postfix_makes_caret_right_associative() {
    let rpn = to_postfix(&tokenize("2^3^2")).unwrap();
    assert_eq!(rpn, vec![num("2"), num("3"), num("2"), Token::Caret, Token::Caret]);
}

#[test]
fn postfix_rejects_malformed_literal() {
    assert_eq!(to_postfix(&tokenize("1.2.3")),
               Err(ParseError::InvalidToken { token: "1.2.3".to_string(), }));
}

#[test]
fn postfix_rejects_unknown_character() {
    assert_eq!(to_postfix(&tokenize("2$3")),
               Err(ParseError::InvalidToken { token: "$".to_string(), }));
}

#[test]
fn postfix_rejects_unbalanced_parentheses() {
    assert_eq!(to_postfix(&tokenize("(1+2*3")), Err(ParseError::MismatchedParentheses));
    assert_eq!(to_postfix(&tokenize("1+2)")), Err(ParseError::MismatchedParentheses));
}

#[test]
fn basic_arithmetic() {
    assert_value("1+2", 3.0);
    assert_value("7*9", 63.0);
    assert_value("8-5", 3.0);
    assert_value("10/4", 2.5);
    assert_value("2^10", 1024.0);
}

#[test]
fn precedence_and_parentheses() {
    assert_value("3+4*2", 11.0);
    assert_value("(1+2)*3", 9.0);
    assert_value("(2+3)*(4-1)", 15.0);
}

#[test]
fn caret_chains_right_to_left() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
}

#[test]
fn left_associative_operators_chain_left_to_right() {
    assert_value("8-3-2", 3.0);
    assert_value("16/4/2", 2.0);
}

#[test]
fn unary_minus() {
    assert_value("-5+2", -3.0);
    assert_value("-3*2", -6.0);
    assert_value("-(-3)", 3.0);
    assert_value("(-2)^2", 4.0);
}

#[test]
fn percent_is_unary() {
    assert_value("5%", 0.05);
    assert_value("50%*200", 100.0);
    assert_value("100-25%", 99.75);
}

#[test]
fn decimal_literals() {
    assert_value("1.5+2.25", 3.75);
    assert_value(".5*4", 2.0);
}

#[test]
fn division_by_zero_is_an_error_string() {
    assert_error("10/0", "Error: Division by zero is not allowed.");
    assert_error("1/(2-2)", "Error: Division by zero is not allowed.");
}

#[test]
fn mismatched_parentheses_are_an_error_string() {
    assert_error("(1+2*3", "Error: Mismatched parentheses.");
    assert_error("1+2)", "Error: Mismatched parentheses.");
}

#[test]
fn invalid_tokens_are_an_error_string() {
    assert_error("2$3", "Error: Invalid token: $.");
    assert_error("1.2.3", "Error: Invalid token: 1.2.3.");
}

#[test]
fn integer_valued_results_display_without_fraction() {
    assert_eq!(calculate("2+2"), "4");
    assert_eq!(calculate("8/2"), "4");
    assert_eq!(calculate("7/2"), "3.5");
}

#[test]
fn equal_expressions_calculate_equally() {
    assert_eq!(calculate("2*3"), calculate("6"));
    assert_eq!(calculate("(1+2)*3"), calculate("9"));
    assert_eq!(calculate("10/4"), calculate("2.5"));
}

#[test]
fn calculate_is_idempotent() {
    let first = calculate("3+4*2");
    assert_eq!(calculate("3+4*2"), first);
    assert_eq!(calculate("3+4*2"), first);
}

#[test]
fn eval_rejects_leftover_operands() {
    let rpn = vec![num("3"), num("4")];
    assert_eq!(eval_postfix(&rpn), Err(EvalError::MalformedExpression));
}

#[test]
fn eval_rejects_operator_underflow() {
    let rpn = vec![num("3"), Token::Plus];
    assert_eq!(eval_postfix(&rpn), Err(EvalError::MalformedExpression));
    assert_eq!(eval_postfix(&[Token::Percent]), Err(EvalError::MalformedExpression));
}

#[test]
fn eval_rejects_empty_sequence() {
    assert_eq!(eval_postfix(&[]), Err(EvalError::MalformedExpression));
}

#[test]
fn eval_reports_unknown_operator_tokens() {
    let rpn = vec![num("1"), num("2"), Token::Unknown("$".to_string())];
    assert_eq!(eval_postfix(&rpn),
               Err(EvalError::UnknownOperator { symbol: "$".to_string(), }));
}
