#[derive(Debug, PartialEq, Eq, Clone)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// Attempted division by a zero divisor.
    DivisionByZero,
    /// A token in operator position is missing from the evaluation table.
    /// Unreachable for sequences produced by the converter, which only
    /// passes through the fixed operator set.
    UnknownOperator {
        /// The surface text of the offending operator.
        symbol: String,
    },
    /// The postfix sequence is structurally broken: an operator found too
    /// few operands on the stack, more than one value remained at the end,
    /// or a literal could not be parsed as a number.
    MalformedExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero is not allowed."),
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator: {symbol}."),
            Self::MalformedExpression => write!(f, "Invalid expression."),
        }
    }
}

impl std::error::Error for EvalError {}
