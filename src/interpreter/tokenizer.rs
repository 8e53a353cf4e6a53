use logos::Logos;

use crate::interpreter::token::Token;

/// Splits an expression string into a sequence of tokens.
///
/// All whitespace is stripped before scanning, so it is never significant,
/// not even inside a number (`"1 2"` tokenizes as the single literal `12`).
///
/// A `-` is treated as the start of a negated sub-expression when it begins
/// the expression or follows another operator or an opening parenthesis. In
/// that case a literal `0` token is emitted before the `-`, so downstream
/// stages only ever see binary minus.
///
/// The function never fails: unrecognized characters become
/// [`Token::Unknown`] and malformed literals such as `1.2.3` become a single
/// [`Token::Number`], both of which the converter later rejects.
///
/// # Parameters
/// - `expr`: The raw expression text.
///
/// # Returns
/// The ordered token sequence.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{token::Token, tokenizer::tokenize};
///
/// let tokens = tokenize("-5+2");
/// assert_eq!(tokens,
///            vec![Token::Number("0".to_string()),
///                 Token::Minus,
///                 Token::Number("5".to_string()),
///                 Token::Plus,
///                 Token::Number("2".to_string())]);
/// ```
#[must_use]
pub fn tokenize(expr: &str) -> Vec<Token> {
    let stripped: String = expr.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&stripped);

    while let Some(scanned) = lexer.next() {
        match scanned {
            Ok(Token::Minus) if minus_is_unary(tokens.last()) => {
                tokens.push(Token::Number("0".to_string()));
                tokens.push(Token::Minus);
            },
            Ok(token) => tokens.push(token),
            // The catch-all pattern makes lexing total, but keep the error
            // arm so a stray failure still surfaces as an invalid token.
            Err(()) => tokens.push(Token::Unknown(lexer.slice().to_string())),
        }
    }

    tokens
}

/// Returns `true` if a `-` scanned after `previous` negates what follows
/// rather than subtracting. This is the token-level counterpart of looking
/// back one character in the stripped input: every operator and `(` is a
/// single character, and a number always ends in a digit or decimal point.
fn minus_is_unary(previous: Option<&Token>) -> bool {
    match previous {
        None => true,
        Some(token) => token.is_operator() || *token == Token::LParen,
    }
}
