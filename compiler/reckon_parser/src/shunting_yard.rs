//! Infix to postfix conversion (Shunting-Yard).
//!
//! Constants are resolved here: a `pi` token leaves the converter as a
//! number token carrying `std::f64::consts::PI`. Functions wait on the
//! operator stack until the `)` closing their argument group pops them.

use reckon_lexer::token::format_tokens;
use reckon_lexer::{Token, TokenKind};
use reckon_ops::{Associativity, Operator};

use crate::error::ConversionError;

/// Shunting-Yard converter.
///
/// By default every operator, `^` included, pops an operator of greater *or
/// equal* precedence, so `2^3^2` groups as `(2^3)^2`. Setting the power
/// associativity to [`Associativity::Right`] gives `2^(3^2)` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    power_associativity: Associativity,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_power_associativity(power_associativity: Associativity) -> Self {
        Self {
            power_associativity,
        }
    }

    pub fn power_associativity(&self) -> Associativity {
        self.power_associativity
    }

    /// Reorders `tokens` into postfix order.
    pub fn to_rpn(&self, tokens: &[Token]) -> Result<Vec<Token>, ConversionError> {
        let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut stack: Vec<Token> = Vec::new();

        let mut previous: Option<&TokenKind> = None;

        for token in tokens {
            if is_prefix_sign(token, previous) {
                output.push(Token::number(0.0, "0", token.location));
            }
            previous = Some(&token.kind);

            match token.kind {
                TokenKind::Number => output.push(token.clone()),

                TokenKind::Constant(constant) => {
                    let value = constant.value();
                    output.push(Token::number(value, value.to_string(), token.location));
                }

                TokenKind::Function(_) | TokenKind::LeftParen => stack.push(token.clone()),

                TokenKind::Operator(incoming) => {
                    while let Some(top) = stack.last().and_then(Token::operator) {
                        if !self.yields_to(top, incoming) {
                            break;
                        }
                        output.extend(stack.pop());
                    }
                    stack.push(token.clone());
                }

                TokenKind::RightParen => {
                    loop {
                        match stack.pop() {
                            None => return Err(ConversionError::MismatchedParentheses),
                            Some(top) if top.is_left_paren() => break,
                            Some(top) => output.push(top),
                        }
                    }
                    if stack.last().and_then(Token::function).is_some() {
                        output.extend(stack.pop());
                    }
                }

                TokenKind::Unknown => {
                    return Err(ConversionError::UnknownToken {
                        text: token.text.clone(),
                        column: token.location.column,
                    })
                }
            }
        }

        while let Some(top) = stack.pop() {
            if top.is_left_paren() {
                return Err(ConversionError::MismatchedParentheses);
            }
            output.push(top);
        }

        log::trace!("rpn: {}", format_tokens(&output));
        Ok(output)
    }

    /// Whether `top`, already on the stack, must be output before `incoming`
    /// is pushed.
    fn yields_to(&self, top: Operator, incoming: Operator) -> bool {
        let right_grouped = incoming.associativity() == Associativity::Right
            && self.power_associativity == Associativity::Right;
        if right_grouped {
            top.precedence() > incoming.precedence()
        } else {
            top.precedence() >= incoming.precedence()
        }
    }
}

/// A `+` or `-` opening the expression or a parenthesized group has no left
/// operand; it is read as `0 - x`, so `(-1)` is `(0 - 1)`.
fn is_prefix_sign(token: &Token, previous: Option<&TokenKind>) -> bool {
    matches!(token.operator(), Some(Operator::Add | Operator::Sub))
        && matches!(previous, None | Some(TokenKind::LeftParen))
}

/// Converts with the default (uniformly left-grouping) rules.
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, ConversionError> {
    Converter::new().to_rpn(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reckon_lexer::tokenize_expression;

    fn rpn(input: &str) -> String {
        let tokens = tokenize_expression(input);
        format_tokens(&to_rpn(&tokens).expect("conversion should succeed"))
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(rpn("2 + 3 * 4"), "2 3 4 * +");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(rpn("(5 + 3) * 2"), "5 3 + 2 *");
    }

    #[test]
    fn equal_precedence_groups_left() {
        assert_eq!(rpn("10 - 4 - 3"), "10 4 - 3 -");
        assert_eq!(rpn("8 / 4 % 3"), "8 4 / 3 %");
    }

    #[test]
    fn power_groups_left_by_default() {
        assert_eq!(rpn("2 ^ 3 ^ 2"), "2 3 ^ 2 ^");
    }

    #[test]
    fn power_groups_right_when_configured() {
        let tokens = tokenize_expression("2 ^ 3 ^ 2");
        let converter = Converter::with_power_associativity(Associativity::Right);
        let out = converter.to_rpn(&tokens).unwrap();
        assert_eq!(format_tokens(&out), "2 3 2 ^ ^");

        // Only the power operator is affected
        let tokens = tokenize_expression("10 - 4 - 3");
        assert_eq!(format_tokens(&converter.to_rpn(&tokens).unwrap()), "10 4 - 3 -");
    }

    #[test]
    fn functions_bind_to_their_argument_group() {
        assert_eq!(rpn("sqrt(16) + 1"), "16 sqrt 1 +");
        assert_eq!(rpn("sin(cos(0))"), "0 cos sin");
        assert_eq!(rpn("2 * abs(1 - 3)"), "2 1 3 - abs *");
    }

    #[test]
    fn constants_are_resolved() {
        let tokens = tokenize_expression("pi * E");
        let out = to_rpn(&tokens).unwrap();
        assert_eq!(out[0].kind, TokenKind::Number);
        assert_eq!(out[0].value, Some(std::f64::consts::PI));
        assert_eq!(out[1].value, Some(std::f64::consts::E));
        assert_eq!(out[2].operator(), Some(Operator::Mul));
    }

    #[test]
    fn mismatched_parentheses() {
        let tokens = tokenize_expression("(1 + 2");
        assert_eq!(to_rpn(&tokens), Err(ConversionError::MismatchedParentheses));
        let tokens = tokenize_expression("1 + 2)");
        assert_eq!(to_rpn(&tokens), Err(ConversionError::MismatchedParentheses));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let tokens = tokenize_expression("2 + x");
        assert_eq!(
            to_rpn(&tokens),
            Err(ConversionError::UnknownToken {
                text: "x".to_string(),
                column: 5
            })
        );
    }

    #[test]
    fn prefix_signs_get_a_zero_operand() {
        assert_eq!(rpn("-2 ^ 2"), "0 2 2 ^ -");
        assert_eq!(rpn("fact(-1)"), "0 1 - fact");
        assert_eq!(rpn("3 * (+4)"), "3 0 4 + *");
        // Only at the start of a group, never after another operator
        assert_eq!(rpn("2 - 1"), "2 1 -");
    }

    #[test]
    fn trailing_operator_still_converts() {
        // The evaluator is responsible for rejecting this
        assert_eq!(rpn("2 +"), "2 +");
    }
}
