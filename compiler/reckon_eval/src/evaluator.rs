use reckon_lexer::{Token, TokenKind};

use crate::error::EvaluationError;

/// Evaluates a postfix token sequence to a single value.
///
/// For an operator the first value popped is the *right* operand, so
/// `10 4 -` is `10 - 4`.
pub fn eval_rpn(rpn: &[Token]) -> Result<f64, EvaluationError> {
    let mut stack: Vec<f64> = Vec::with_capacity(rpn.len());

    for token in rpn {
        match token.kind {
            TokenKind::Number => {
                let value = token
                    .value
                    .ok_or_else(|| EvaluationError::UnexpectedToken(token.text.clone()))?;
                stack.push(value);
            }

            TokenKind::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(EvaluationError::InsufficientOperands {
                        operator: token.text.clone(),
                    });
                };
                stack.push(op.apply(a, b)?);
            }

            TokenKind::Function(function) => {
                let arg = stack.pop().ok_or_else(|| EvaluationError::MissingArgument {
                    function: token.text.clone(),
                })?;
                stack.push(function.apply(arg)?);
            }

            TokenKind::Constant(_)
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::Unknown => {
                return Err(EvaluationError::UnexpectedToken(token.text.clone()));
            }
        }
    }

    match stack.as_slice() {
        [result] => {
            log::trace!("result: {result}");
            Ok(*result)
        }
        rest => Err(EvaluationError::MalformedExpression {
            remaining: rest.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reckon_lexer::Location;
    use reckon_ops::{DomainError, Function, Operator};

    fn num(v: f64) -> Token {
        Token::number(v, v.to_string(), Location::default())
    }

    fn op(op: Operator) -> Token {
        Token::new(TokenKind::Operator(op), op.symbol(), Location::default())
    }

    fn func(f: Function) -> Token {
        Token::new(TokenKind::Function(f), f.name(), Location::default())
    }

    #[test]
    fn second_popped_value_is_the_left_operand() {
        assert_eq!(eval_rpn(&[num(10.0), num(4.0), op(Operator::Sub)]), Ok(6.0));
        assert_eq!(eval_rpn(&[num(2.0), num(10.0), op(Operator::Pow)]), Ok(1024.0));
        assert_eq!(eval_rpn(&[num(7.0), num(2.0), op(Operator::Mod)]), Ok(1.0));
    }

    #[test]
    fn functions_take_one_value() {
        assert_eq!(eval_rpn(&[num(16.0), func(Function::Sqrt)]), Ok(4.0));
        assert_eq!(
            eval_rpn(&[num(5.0), func(Function::Fact), num(1.0), op(Operator::Add)]),
            Ok(121.0)
        );
    }

    #[test]
    fn insufficient_operands() {
        assert_eq!(
            eval_rpn(&[num(2.0), op(Operator::Add)]),
            Err(EvaluationError::InsufficientOperands {
                operator: "+".to_string()
            })
        );
        assert!(matches!(
            eval_rpn(&[op(Operator::Mul)]),
            Err(EvaluationError::InsufficientOperands { .. })
        ));
    }

    #[test]
    fn missing_argument() {
        assert_eq!(
            eval_rpn(&[func(Function::Sin)]),
            Err(EvaluationError::MissingArgument {
                function: "sin".to_string()
            })
        );
    }

    #[test]
    fn leftover_values_are_malformed() {
        assert_eq!(
            eval_rpn(&[num(1.0), num(2.0)]),
            Err(EvaluationError::MalformedExpression { remaining: 2 })
        );
        assert_eq!(
            eval_rpn(&[]),
            Err(EvaluationError::MalformedExpression { remaining: 0 })
        );
    }

    #[test]
    fn domain_errors_propagate() {
        assert_eq!(
            eval_rpn(&[num(10.0), num(0.0), op(Operator::Div)]),
            Err(EvaluationError::Domain(DomainError::DivisionByZero))
        );
        assert_eq!(
            eval_rpn(&[num(-1.0), func(Function::Sqrt)]),
            Err(EvaluationError::Domain(DomainError::NegativeSqrt))
        );
    }

    #[test]
    fn parentheses_are_not_postfix_tokens() {
        let paren = Token::new(TokenKind::LeftParen, "(", Location::default());
        assert_eq!(
            eval_rpn(&[num(1.0), paren]),
            Err(EvaluationError::UnexpectedToken("(".to_string()))
        );
    }
}
