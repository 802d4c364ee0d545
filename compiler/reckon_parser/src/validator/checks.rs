use lazy_static::lazy_static;
use regex::Regex;
use reckon_ops::{Function, Operator};

use crate::error::ValidationError;

lazy_static! {
    static ref FUNCTION_CALL: Regex =
        Regex::new(r"\b([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").expect("function call pattern is valid");
}

const PUNCTUATION: &str = "().";

pub(super) fn characters(input: &str) -> Result<(), ValidationError> {
    for (i, c) in input.chars().enumerate() {
        let allowed = c.is_ascii_digit()
            || Operator::is_operator_char(c)
            || PUNCTUATION.contains(c)
            || c.is_whitespace()
            || c.is_alphabetic();
        if !allowed {
            return Err(ValidationError::InvalidCharacter {
                ch: c,
                position: i + 1,
            });
        }
    }
    Ok(())
}

pub(super) fn parentheses(input: &str, max_depth: usize) -> Result<(), ValidationError> {
    let mut balance: usize = 0;
    let mut deepest: usize = 0;

    for (i, c) in input.chars().enumerate() {
        match c {
            '(' => {
                balance += 1;
                deepest = deepest.max(balance);
            }
            ')' => {
                balance = balance
                    .checked_sub(1)
                    .ok_or(ValidationError::UnmatchedClosingParen { position: i + 1 })?;
            }
            _ => {}
        }
    }

    if balance > 0 {
        return Err(ValidationError::UnmatchedOpeningParen);
    }
    if deepest > max_depth {
        return Err(ValidationError::NestingTooDeep {
            depth: deepest,
            max: max_depth,
        });
    }
    Ok(())
}

pub(super) fn function_calls(input: &str) -> Result<(), ValidationError> {
    for caps in FUNCTION_CALL.captures_iter(input) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str().to_lowercase();
        if !Function::is_function(&name) {
            return Err(ValidationError::UnknownFunction(name));
        }

        // The match always ends with the single-byte '('
        let open = whole.end() - 1;
        // Behind `parentheses` both failures below are already reported as an
        // unmatched '('; they only fire when this check runs on its own.
        if open + 1 >= input.len() {
            return Err(ValidationError::IncompleteFunctionCall { name });
        }
        if find_matching_paren(input, open).is_none() {
            return Err(ValidationError::UnclosedFunctionCall { name });
        }
    }
    Ok(())
}

/// Byte index of the `)` closing the `(` at byte index `open`.
fn find_matching_paren(input: &str, open: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (i, b) in input.bytes().enumerate().skip(open + 1) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

pub(super) fn syntax(input: &str) -> Result<(), ValidationError> {
    let chars: Vec<char> = input.chars().collect();

    for (i, pair) in chars.windows(2).enumerate() {
        let (current, next) = (pair[0], pair[1]);
        if Operator::is_operator_char(current)
            && Operator::is_operator_char(next)
            && !(current == '*' && next == '*')
        {
            return Err(ValidationError::ConsecutiveOperators {
                pair: format!("{current}{next}"),
                position: i + 1,
            });
        }
    }

    if input.contains("()") {
        return Err(ValidationError::EmptyParentheses);
    }

    match chars.last() {
        Some(&last) if Operator::is_operator_char(last) => Err(ValidationError::TrailingOperator),
        _ => Ok(()),
    }
}
