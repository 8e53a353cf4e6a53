use logos::Logos;

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the
/// tokenizer. This enum defines all recognized tokens in the mini-language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, kept as raw text such as `"42"` or `"3.14"`.
    ///
    /// The pattern deliberately admits any run of digits and decimal points,
    /// so a malformed literal like `1.2.3` survives as a single token and is
    /// rejected by the converter rather than here.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string(), priority = 3)]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Any character the grammar does not know. Carried through the pipeline
    /// verbatim and rejected by the converter as an invalid token.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 1)]
    Unknown(String),
}

/// Grouping direction for operators of equal precedence.
///
/// Left-associative operators chain left to right (`8 - 3 - 2` is
/// `(8 - 3) - 2`); right-associative operators chain right to left
/// (`2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Associativity {
    /// Groups left to right.
    Left,
    /// Groups right to left.
    Right,
}

impl Token {
    /// Returns the binding strength of an operator token.
    ///
    /// The fixed table: `+` and `-` bind weakest at 1, `*` and `/` at 2,
    /// `^` at 3, and the unary postfix `%` strongest at 4. Non-operator
    /// tokens (numbers, parentheses, unknown characters) have no precedence.
    ///
    /// # Returns
    /// - `Some(precedence)`: For the six known operators.
    /// - `None`: For every other token.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::Plus | Self::Minus => Some(1),
            Self::Star | Self::Slash => Some(2),
            Self::Caret => Some(3),
            Self::Percent => Some(4),
            _ => None,
        }
    }

    /// Returns the grouping direction of an operator token.
    ///
    /// Only `^` is right-associative; the remaining operators are
    /// left-associative. Non-operator tokens have no associativity.
    #[must_use]
    pub const fn associativity(&self) -> Option<Associativity> {
        match self {
            Self::Caret => Some(Associativity::Right),
            Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent => {
                Some(Associativity::Left)
            },
            _ => None,
        }
    }

    /// Returns `true` if the token is one of the six known operators.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.precedence().is_some()
    }

    /// Returns `true` if the token is a well-formed numeric literal:
    /// digits with at most one decimal point, and at least one digit.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::token::Token;
    ///
    /// assert!(Token::Number("3.14".to_string()).is_numeric_literal());
    /// assert!(!Token::Number("1.2.3".to_string()).is_numeric_literal());
    /// assert!(!Token::Number(".".to_string()).is_numeric_literal());
    /// assert!(!Token::Plus.is_numeric_literal());
    /// ```
    #[must_use]
    pub fn is_numeric_literal(&self) -> bool {
        match self {
            Self::Number(text) => {
                let digits = text.replacen('.', "", 1);
                !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
            },
            _ => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Unknown(text) => write!(f, "{text}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}
