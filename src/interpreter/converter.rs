use crate::{
    error::ParseError,
    interpreter::token::{Associativity, Token},
};

/// Reorders an infix token sequence into postfix (reverse Polish) order
/// using the shunting-yard algorithm.
///
/// Numeric literals are appended to the output directly. Operators are held
/// on an explicit stack and popped according to [`should_pop`], which encodes
/// the precedence table and makes `^` right-associative. An opening
/// parenthesis is pushed unconditionally; a closing parenthesis drains the
/// stack to the matching `(`, which is discarded.
///
/// # Errors
/// - [`ParseError::MismatchedParentheses`]: A `)` with no matching `(`, or a
///   parenthesis left on the stack after all tokens are consumed (an
///   unclosed `(` is only detected here, since it was pushed but never
///   matched).
/// - [`ParseError::InvalidToken`]: A malformed numeric literal or an
///   unrecognized character reached the converter.
///
/// # Parameters
/// - `tokens`: The infix token sequence, as produced by
///   [`tokenize`](crate::interpreter::tokenizer::tokenize).
///
/// # Returns
/// The token sequence in postfix order.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::to_postfix, token::Token, tokenizer::tokenize};
///
/// let rpn = to_postfix(&tokenize("3+4*2")).unwrap();
/// assert_eq!(rpn,
///            vec![Token::Number("3".to_string()),
///                 Token::Number("4".to_string()),
///                 Token::Number("2".to_string()),
///                 Token::Star,
///                 Token::Plus]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        if token.is_numeric_literal() {
            output.push(token.clone());
        } else if token.is_operator() {
            while stack.last().is_some_and(|top| top.is_operator() && should_pop(token, top)) {
                if let Some(top) = stack.pop() {
                    output.push(top);
                }
            }
            stack.push(token.clone());
        } else if *token == Token::LParen {
            stack.push(token.clone());
        } else if *token == Token::RParen {
            loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(operator) => output.push(operator),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            }
        } else {
            return Err(ParseError::InvalidToken { token: token.to_string(), });
        }
    }

    while let Some(leftover) = stack.pop() {
        if matches!(leftover, Token::LParen | Token::RParen) {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(leftover);
    }

    Ok(output)
}

/// Decides whether the operator on top of the stack must be popped before
/// `incoming` is pushed.
///
/// For a right-associative incoming operator the stacked operator is popped
/// only when its precedence is strictly greater; for a left-associative one
/// it is also popped on a tie. The tie-break is what makes `2^3^2` evaluate
/// as `2^(3^2)` while `8-3-2` chains left to right.
fn should_pop(incoming: &Token, stacked: &Token) -> bool {
    let (Some(incoming_prec), Some(stacked_prec)) = (incoming.precedence(), stacked.precedence())
    else {
        return false;
    };

    match incoming.associativity() {
        Some(Associativity::Right) => stacked_prec > incoming_prec,
        _ => stacked_prec >= incoming_prec,
    }
}
