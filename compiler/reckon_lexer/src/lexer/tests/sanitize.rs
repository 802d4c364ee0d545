use super::super::*;
use crate::token::TokenKind;
use pretty_assertions::assert_eq;
use reckon_ops::Operator;

#[test]
fn test_sanitize_collapses_whitespace() {
    assert_eq!(sanitize("  2   +\t3 \n"), "2 + 3");
    assert_eq!(sanitize(""), "");
}

#[test]
fn test_sanitize_rewrites_power_alias() {
    assert_eq!(sanitize("2**3"), "2^3");
    assert_eq!(sanitize("2 ** 3 ** 2"), "2 ^ 3 ^ 2");
}

#[test]
fn test_sanitize_keeps_separated_stars() {
    assert_eq!(sanitize("2 *  * 3"), "2 * * 3");
}

#[test]
fn test_tokenize_expression_applies_sanitizer() {
    let tokens = tokenize_expression("2 ** 3");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Operator(Operator::Pow),
            TokenKind::Number
        ]
    );
    assert_eq!(tokens[1].text, "^");
}
