//! # rpncalc
//!
//! rpncalc is a small arithmetic expression interpreter written in Rust.
//! It tokenizes an infix expression, reorders it into postfix (reverse
//! Polish) form with the shunting-yard algorithm, and evaluates the result
//! with a value stack. The language supports `+ - * / ^ %`, parentheses,
//! unary minus, and decimal numbers.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{converter::to_postfix, evaluator::eval_postfix, tokenizer::tokenize};

/// Provides unified error types for conversion and evaluation.
///
/// This module defines all errors that can be raised while converting an
/// expression to postfix form or evaluating it. It standardizes error
/// reporting and carries detailed information about failures, including the
/// offending token where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (converter, evaluator).
/// - Attaches the offending token text for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together tokenizing, postfix conversion, and postfix
/// evaluation to provide a complete pipeline for arithmetic expressions. Each
/// stage is a pure function that depends only on the previous stage's output.
///
/// # Responsibilities
/// - Coordinates all core components: tokenizer, converter, and evaluator.
/// - Provides the stage functions used by the top-level entry points.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Returns the numeric value of an infix arithmetic expression.
///
/// This function runs the full pipeline: the expression is tokenized,
/// converted to postfix order, and evaluated. All failures are typed; use
/// [`calculate`] instead when a display string is wanted.
///
/// # Errors
/// Returns a [`ParseError`](error::ParseError) if the expression contains an
/// invalid token or unbalanced parentheses, or an
/// [`EvalError`](error::EvalError) if evaluation fails, for example on
/// division by zero.
///
/// # Examples
/// ```
/// use rpncalc::evaluate;
///
/// let value = evaluate("(1+2)*3").unwrap();
/// assert_eq!(value, 9.0);
///
/// // '^' is right-associative: 2^(3^2), not (2^3)^2.
/// let value = evaluate("2^3^2").unwrap();
/// assert_eq!(value, 512.0);
///
/// // Division by zero is a typed failure, not a panic.
/// assert!(evaluate("10/0").is_err());
/// ```
pub fn evaluate(expr: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = tokenize(expr);
    let rpn = to_postfix(&tokens)?;
    let value = eval_postfix(&rpn)?;

    Ok(value)
}

/// Evaluates an expression and renders the outcome as display text.
///
/// This is the outward-facing boundary of the crate: every internal failure
/// is collapsed into a human-readable `"Error: ..."` string instead of being
/// propagated, so a driver loop can print whatever comes back and continue.
/// Successful values are rendered with `f64`'s `Display`, which drops a zero
/// fractional part, so `"2+2"` yields `"4"` rather than `"4.0"`.
///
/// # Examples
/// ```
/// use rpncalc::calculate;
///
/// assert_eq!(calculate("(1+2)*3"), "9");
/// assert_eq!(calculate("5%"), "0.05");
/// assert_eq!(calculate("10/0"), "Error: Division by zero is not allowed.");
/// assert_eq!(calculate("(1+2*3"), "Error: Mismatched parentheses.");
/// ```
#[must_use]
pub fn calculate(expr: &str) -> String {
    match evaluate(expr) {
        Ok(value) => value.to_string(),
        Err(error) => format!("Error: {error}"),
    }
}
