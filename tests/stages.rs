//! Each stage fed by the one before it, checked in isolation.

use pretty_assertions::assert_eq;
use reckon_eval::{eval_rpn, EvaluationError};
use reckon_lexer::{format_tokens, sanitize, tokenize};
use reckon_parser::{validate, Classification, ConversionError, Converter};
use reckon_ops::Associativity;

fn rpn_of(expr: &str, converter: Converter) -> String {
    let tokens = tokenize(&sanitize(expr));
    let rpn = converter.to_rpn(&tokens).expect("expression should convert");
    format_tokens(&rpn)
}

#[test]
fn stage_by_stage() {
    let raw = "  3 +   4 ** 2 ";
    assert_eq!(validate(raw).classification, Classification::Expression);

    let sanitized = sanitize(raw);
    assert_eq!(sanitized, "3 + 4 ^ 2");

    let tokens = tokenize(&sanitized);
    assert_eq!(format_tokens(&tokens), "3 + 4 ^ 2");

    let rpn = Converter::new().to_rpn(&tokens).unwrap();
    assert_eq!(format_tokens(&rpn), "3 4 2 ^ +");
    assert_eq!(eval_rpn(&rpn), Ok(19.0));
}

#[test]
fn power_grouping() {
    assert_eq!(rpn_of("2^3^2", Converter::new()), "2 3 ^ 2 ^");
    assert_eq!(
        rpn_of(
            "2^3^2",
            Converter::with_power_associativity(Associativity::Right)
        ),
        "2 3 2 ^ ^"
    );
}

#[test]
fn functions_follow_their_argument() {
    assert_eq!(rpn_of("sqrt(9) + abs(2 - 5)", Converter::new()), "9 sqrt 2 5 - abs +");
}

#[test]
fn commands_are_classified() {
    for command in ["help", "HISTORY", " m+ ", "Mr", "stats", "export"] {
        let result = validate(command);
        assert!(result.is_valid());
        assert_eq!(result.classification, Classification::Command);
    }
}

#[test]
fn converter_rejects_what_the_validator_lets_through() {
    let tokens = tokenize(&sanitize("1.2.3 + 1"));
    assert_eq!(
        Converter::new().to_rpn(&tokens),
        Err(ConversionError::UnknownToken {
            text: "1.2.3".to_string(),
            column: 1
        })
    );
}

#[test]
fn evaluator_rejects_dangling_operators() {
    let tokens = tokenize("4 *");
    let rpn = Converter::new().to_rpn(&tokens).unwrap();
    assert_eq!(
        eval_rpn(&rpn),
        Err(EvaluationError::InsufficientOperands {
            operator: "*".to_string()
        })
    );
}
