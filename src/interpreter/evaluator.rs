use crate::{error::EvalError, interpreter::token::Token};

/// Evaluates a postfix token sequence down to a single number.
///
/// The function walks the sequence with a value stack. A numeric literal is
/// parsed as `f64` and pushed. The unary `%` pops one operand `a` and pushes
/// `a / 100`. Every other operator pops `b` (the most recent value) and then
/// `a`, and pushes the result of `a <op> b`. At the end the stack must hold
/// exactly the result.
///
/// # Errors
/// - [`EvalError::DivisionByZero`]: `/` with a zero divisor, checked before
///   dividing.
/// - [`EvalError::UnknownOperator`]: A token in operator position that is not
///   in the evaluation table.
/// - [`EvalError::MalformedExpression`]: The stack ran dry under an operator,
///   more than one value remained at the end, or a literal failed to parse.
///   These can only happen when the sequence did not come from
///   [`to_postfix`](crate::interpreter::converter::to_postfix).
///
/// # Parameters
/// - `rpn`: The token sequence in postfix order.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::to_postfix, evaluator::eval_postfix, tokenizer::tokenize};
///
/// let rpn = to_postfix(&tokenize("2^3^2")).unwrap();
/// assert_eq!(eval_postfix(&rpn).unwrap(), 512.0);
/// ```
pub fn eval_postfix(rpn: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in rpn {
        match token {
            Token::Number(text) => {
                let value = text.parse::<f64>()
                                .map_err(|_| EvalError::MalformedExpression)?;
                stack.push(value);
            },
            Token::Percent => {
                let a = stack.pop().ok_or(EvalError::MalformedExpression)?;
                stack.push(a / 100.0);
            },
            operator => {
                let b = stack.pop().ok_or(EvalError::MalformedExpression)?;
                let a = stack.pop().ok_or(EvalError::MalformedExpression)?;

                let value = match operator {
                    Token::Plus => a + b,
                    Token::Minus => a - b,
                    Token::Star => a * b,
                    Token::Slash => {
                        if b == 0.0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        a / b
                    },
                    Token::Caret => a.powf(b),
                    other => {
                        return Err(EvalError::UnknownOperator { symbol: other.to_string(), })
                    },
                };
                stack.push(value);
            },
        }
    }

    let result = stack.pop().ok_or(EvalError::MalformedExpression)?;
    if stack.is_empty() {
        Ok(result)
    } else {
        Err(EvalError::MalformedExpression)
    }
}
