use super::super::*;
use crate::token::TokenKind;
use pretty_assertions::assert_eq;
use reckon_ops::{Constant, Function};

fn single(input: &str) -> Token {
    let mut tokens = tokenize(input);
    assert_eq!(tokens.len(), 1, "expected exactly one token for {input:?}");
    tokens.remove(0)
}

#[test]
fn test_numeric_literals() {
    let valid_cases = [("42", 42.0), ("3.14159", 3.14159), (".5", 0.5), ("5.", 5.0), ("007", 7.0)];

    for (input, expected) in valid_cases {
        let token = single(input);
        assert_eq!(token.kind, TokenKind::Number, "Mismatch for input: {input}");
        assert_eq!(token.value, Some(expected), "Mismatch for input: {input}");
    }
}

#[test]
fn test_invalid_numeric_literals() {
    for input in ["1.2.3", "123abc", "1e5", ".", "1_000"] {
        let token = single(input);
        assert_eq!(token.kind, TokenKind::Unknown, "Expected unknown token for input: {input}");
        assert_eq!(token.value, None);
    }
}

#[test]
fn test_overflowing_literal_is_unknown() {
    let huge = "9".repeat(400);
    assert_eq!(single(&huge).kind, TokenKind::Unknown);
}

#[test]
fn test_names_are_case_insensitive() {
    assert_eq!(single("PI").kind, TokenKind::Constant(Constant::Pi));
    assert_eq!(single("e").kind, TokenKind::Constant(Constant::E));
    assert_eq!(single("SQRT").kind, TokenKind::Function(Function::Sqrt));
    assert_eq!(single("Fact").kind, TokenKind::Function(Function::Fact));
    // Original spelling is preserved for messages
    assert_eq!(single("Fact").text, "Fact");
}

#[test]
fn test_unknown_names() {
    assert_eq!(single("x").kind, TokenKind::Unknown);
    assert_eq!(single("log10").kind, TokenKind::Unknown);
    assert_eq!(single("2sin").kind, TokenKind::Unknown);
}
