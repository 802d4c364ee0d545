//! Raw scanner driven by `logos`.
//!
//! Separators (whitespace, parentheses and single-character operators) are
//! tokens of their own; every other run of characters is a [`LogosToken::Word`]
//! that the [`Lexer`](crate::Lexer) classifies afterwards.

use logos::Logos;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogosToken {
    // Delimiters
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,

    // Operators
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
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,

    /// A maximal run of non-separator characters: a number, a name, or junk.
    #[regex(r"[^\s()+\-*/%^]+")]
    Word,

    /// Whitespace (skipped)
    #[regex(r"\s+", logos::skip)]
    Whitespace,
}

impl LogosToken {
    /// The single character an operator token was scanned from.
    pub fn operator_char(self) -> Option<char> {
        match self {
            LogosToken::Plus => Some('+'),
            LogosToken::Minus => Some('-'),
            LogosToken::Star => Some('*'),
            LogosToken::Slash => Some('/'),
            LogosToken::Percent => Some('%'),
            LogosToken::Caret => Some('^'),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(input: &str) -> Vec<(LogosToken, &str)> {
        let mut lex = LogosToken::lexer(input);
        let mut out = Vec::new();
        while let Some(tok) = lex.next() {
            out.push((tok.expect("every character belongs to some token"), lex.slice()));
        }
        out
    }

    #[test]
    fn separators_split_words() {
        assert_eq!(
            scan("sin(3.5)+pi"),
            vec![
                (LogosToken::Word, "sin"),
                (LogosToken::LeftParen, "("),
                (LogosToken::Word, "3.5"),
                (LogosToken::RightParen, ")"),
                (LogosToken::Plus, "+"),
                (LogosToken::Word, "pi"),
            ]
        );
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(
            scan("  12 \t % 5 "),
            vec![
                (LogosToken::Word, "12"),
                (LogosToken::Percent, "%"),
                (LogosToken::Word, "5"),
            ]
        );
    }

    #[test]
    fn junk_stays_inside_one_word() {
        assert_eq!(scan("1.2.3x"), vec![(LogosToken::Word, "1.2.3x")]);
    }
}
