use std::fmt;

use reckon_ops::{Constant, Function, Operator};

/// Represents a token's location in the sanitized expression.
///
/// Expressions are a single line, so only the column (1-based, counted in
/// characters) and the byte offset (0-based) are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based column number
    pub column: usize,
    /// The 0-based byte offset from the start of the expression
    pub offset: usize,
}

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A finite numeric literal; the value lives in [`Token::value`]
    Number,
    /// A binary operator
    Operator(Operator),
    /// The name of a unary function
    Function(Function),
    /// A named constant, resolved by the converter
    Constant(Constant),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A run of characters that names nothing (`x`, `1.2.3`, ...)
    Unknown,
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The lexical class of this token
    pub kind: TokenKind,
    /// The source text the token was scanned from
    pub text: String,
    /// Numeric value, present exactly when `kind` is [`TokenKind::Number`]
    pub value: Option<f64>,
    /// Where the token starts
    pub location: Location,
}

impl Token {
    /// Creates a non-numeric token.
    pub fn new<S: Into<String>>(kind: TokenKind, text: S, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            value: None,
            location,
        }
    }

    /// Creates a number token.
    pub fn number<S: Into<String>>(value: f64, text: S, location: Location) -> Self {
        Self {
            kind: TokenKind::Number,
            text: text.into(),
            value: Some(value),
            location,
        }
    }

    /// Returns the operator if this is an operator token
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns the function if this is a function-name token
    pub fn function(&self) -> Option<Function> {
        match self.kind {
            TokenKind::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Returns true for `(`
    pub fn is_left_paren(&self) -> bool {
        matches!(self.kind, TokenKind::LeftParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.offset)
    }
}

/// Joins token texts with single spaces, e.g. an RPN sequence as `2 3 4 * +`.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
