use thiserror::Error;

/// Structural problems found before any tokenizing happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input cannot be empty")]
    Empty,

    /// `position` is 1-based, counted in characters of the trimmed input
    #[error("Invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("Unmatched closing parenthesis at position {position}")]
    UnmatchedClosingParen { position: usize },

    #[error("Unmatched opening parenthesis")]
    UnmatchedOpeningParen,

    #[error("Too many nested parentheses (max {max} levels)")]
    NestingTooDeep { depth: usize, max: usize },

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Incomplete function call: missing closing parenthesis")]
    IncompleteFunctionCall { name: String },

    #[error("Unmatched parenthesis in function call '{name}'")]
    UnclosedFunctionCall { name: String },

    #[error("Consecutive operators '{pair}' at position {position}")]
    ConsecutiveOperators { pair: String, position: usize },

    #[error("Empty parentheses '()' are not allowed")]
    EmptyParentheses,

    #[error("Expression ends with operator")]
    TrailingOperator,

    #[error("'{0}' is a command, not an expression")]
    NotAnExpression(String),
}

/// Failures while reordering tokens into postfix form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Unknown token: {text}")]
    UnknownToken { text: String, column: usize },

    #[error("Mismatched parentheses")]
    MismatchedParentheses,
}
