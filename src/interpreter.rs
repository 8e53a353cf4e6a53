/// The token module defines the lexical vocabulary of the language.
///
/// This module declares the `Token` enum produced by the tokenizer and
/// consumed by the converter and evaluator, together with the operator
/// metadata (precedence and associativity) that drives the shunting-yard
/// algorithm.
///
/// # Responsibilities
/// - Defines all recognized tokens: numeric literals, operators, parentheses.
/// - Carries unrecognized characters so later stages can report them.
/// - Provides the fixed precedence/associativity table as token methods.
pub mod token;
/// The tokenizer module splits raw expression text into tokens.
///
/// The tokenizer strips whitespace, scans the input left to right, and
/// produces the ordered token sequence for the converter. It also normalizes
/// unary minus by inserting a literal `0`, so the rest of the pipeline only
/// ever sees binary operators. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Normalizes unary minus into a `0 - x` form.
/// - Never fails; malformed input is carried through for later rejection.
pub mod tokenizer;
/// The converter module reorders infix tokens into postfix form.
///
/// The converter runs the shunting-yard algorithm over the token sequence
/// produced by the tokenizer, using an explicit operator stack and the
/// precedence table to emit tokens in reverse Polish order. This eliminates
/// parentheses and precedence concerns before evaluation.
///
/// # Responsibilities
/// - Emits operands and operators in postfix order.
/// - Honors precedence and associativity, including right-associative `^`.
/// - Detects mismatched parentheses and invalid tokens.
pub mod converter;
/// The evaluator module reduces a postfix sequence to a number.
///
/// The evaluator walks the postfix token sequence with a value stack,
/// applying each operator to the most recently pushed operands. It is the
/// final stage of the pipeline and the only one that performs arithmetic.
///
/// # Responsibilities
/// - Parses numeric literals and pushes them onto the value stack.
/// - Applies binary operators and the unary percent operator.
/// - Reports division by zero and malformed postfix sequences.
pub mod evaluator;
