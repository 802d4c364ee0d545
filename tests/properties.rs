use proptest::prelude::*;
use reckon::evaluate;
use reckon_eval::eval_rpn;
use reckon_lexer::tokenize_expression;
use reckon_parser::to_rpn;

/// Short arithmetic-looking strings, well-formed or not.
fn expression_like() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            "[0-9]{1,3}(\\.[0-9]{1,2})?",
            Just("+".to_string()),
            Just("-".to_string()),
            Just("*".to_string()),
            Just("/".to_string()),
            Just("%".to_string()),
            Just("^".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("pi".to_string()),
            Just("sqrt(".to_string()),
            Just("fact(".to_string()),
            Just("x".to_string()),
        ],
        0..16,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(expr in expression_like()) {
        let first = evaluate(&expr);
        let second = evaluate(&expr);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert!(a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())),
            (Err(a), Err(b)) => prop_assert_eq!(a.kind(), b.kind()),
            (a, b) => prop_assert!(false, "{:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn unvalidated_input_never_panics(expr in "[0-9a-z+\\-*/%^(). ]{0,32}") {
        let tokens = tokenize_expression(&expr);
        if let Ok(rpn) = to_rpn(&tokens) {
            let _ = eval_rpn(&rpn);
        }
        let _ = evaluate(&expr);
    }

    #[test]
    fn integer_sums_are_exact(terms in proptest::collection::vec(0u32..1000, 1..20)) {
        let expr = terms.iter().map(u32::to_string).collect::<Vec<_>>().join(" + ");
        let expected: u32 = terms.iter().sum();
        prop_assert_eq!(evaluate(&expr), Ok(f64::from(expected)));
    }
}
