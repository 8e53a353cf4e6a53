#[derive(Debug, PartialEq, Eq, Clone)]
/// Represents all errors that can occur while converting tokens to postfix
/// form.
pub enum ParseError {
    /// A token reached the converter that is neither a well-formed numeric
    /// literal, a known operator, nor a parenthesis.
    InvalidToken {
        /// The surface text of the offending token.
        token: String,
    },
    /// The expression's parentheses do not balance: a `)` appeared with no
    /// matching `(`, or a `(` was never closed.
    MismatchedParentheses,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token } => write!(f, "Invalid token: {token}."),
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),
        }
    }
}

impl std::error::Error for ParseError {}
