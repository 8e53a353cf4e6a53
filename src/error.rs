/// Conversion errors.
///
/// Defines all error types that can occur while converting a token sequence
/// to postfix form. Conversion errors include unbalanced parentheses and
/// tokens the grammar does not recognize, detected before any arithmetic is
/// performed.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// sequence to a value, such as division by zero, operators missing from the
/// evaluation table, and structurally malformed sequences.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
