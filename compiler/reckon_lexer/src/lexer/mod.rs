//! Tokenizer for Reckon expressions
//! Converts a sanitized expression into a stream of tokens for the converter

use std::ops::Range;

use logos::Logos;
use reckon_ops::{Constant, Function, Operator};

use crate::token::{Location, Token, TokenKind};
use crate::LogosToken;

/// Normalizes raw input before tokenizing.
///
/// Whitespace runs collapse to a single space, the ends are trimmed, and the
/// `**` power alias is rewritten to `^`.
pub fn sanitize(input: &str) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("**", "^")
}

/// Tokenizes an already sanitized expression.
pub fn tokenize(sanitized: &str) -> Vec<Token> {
    Lexer::new(sanitized).collect()
}

/// Sanitizes `input` and tokenizes the result.
pub fn tokenize_expression(input: &str) -> Vec<Token> {
    tokenize(&sanitize(input))
}

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The expression being lexed
    source: &'a str,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset `column` was computed for
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given expression
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
        }
    }

    /// Advance the column to the start of `span`, counting characters, not bytes
    fn sync_position_to(&mut self, span: &Range<usize>) -> Location {
        self.column += self.source[self.offset..span.start].chars().count();
        self.offset = span.start;
        Location {
            column: self.column,
            offset: self.offset,
        }
    }

    /// Get the next token from the expression
    pub fn next_token(&mut self) -> Option<Token> {
        let scanned = self.inner.next()?;
        let span = self.inner.span();
        let lexeme = &self.source[span.clone()];
        let location = self.sync_position_to(&span);

        let token = match scanned {
            Ok(LogosToken::LeftParen) => Token::new(TokenKind::LeftParen, lexeme, location),
            Ok(LogosToken::RightParen) => Token::new(TokenKind::RightParen, lexeme, location),
            Ok(LogosToken::Word) => classify_word(lexeme, location),
            Ok(raw) => match raw.operator_char().and_then(Operator::from_char) {
                Some(op) => Token::new(TokenKind::Operator(op), lexeme, location),
                None => Token::new(TokenKind::Unknown, lexeme, location),
            },
            // Nothing outside the patterns above can reach the scanner, but a
            // stray byte still becomes a token the converter will reject.
            Err(()) => Token::new(TokenKind::Unknown, lexeme, location),
        };

        #[cfg(feature = "logging")]
        log::trace!("token {:?} '{}' at {}", token.kind, token.text, token.location);

        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Classifies a run of non-separator characters.
fn classify_word(word: &str, location: Location) -> Token {
    if is_numeric_literal(word) {
        return match word.parse::<f64>() {
            Ok(value) if value.is_finite() => Token::number(value, word, location),
            _ => Token::new(TokenKind::Unknown, word, location),
        };
    }
    if let Some(constant) = Constant::from_name(word) {
        return Token::new(TokenKind::Constant(constant), word, location);
    }
    if let Some(function) = Function::from_name(word) {
        return Token::new(TokenKind::Function(function), word, location);
    }
    Token::new(TokenKind::Unknown, word, location)
}

/// Digits with at most one decimal point and at least one digit.
fn is_numeric_literal(word: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in word.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

// Include the test module
#[cfg(test)]
mod tests;
