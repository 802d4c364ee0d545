//! The evaluation facade.

use reckon_eval::eval_rpn;
use reckon_lexer::{sanitize, tokenize};
use reckon_parser::{Classification, Converter, ValidationError, Validator};

use crate::config::EngineConfig;
use crate::error::EvalError;

/// A configured, stateless evaluation pipeline.
///
/// `Engine` is `Copy` and holds no per-call state, so a single instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    validator: Validator,
    converter: Converter,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            validator: Validator::with_max_depth(config.max_depth),
            converter: Converter::with_power_associativity(config.power_associativity),
        }
    }

    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            power_associativity: self.converter.power_associativity(),
            max_depth: self.validator.max_depth(),
        }
    }

    /// Evaluates `expression` to a single value.
    ///
    /// Command keywords such as `help` are rejected with
    /// [`ValidationError::NotAnExpression`]; they are for the calling shell.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        let validation = self.validator.validate(expression);
        let classification = validation.into_result()?;
        if classification == Classification::Command {
            return Err(ValidationError::NotAnExpression(expression.trim().to_string()).into());
        }

        let sanitized = sanitize(expression);
        let tokens = tokenize(&sanitized);
        let rpn = self.converter.to_rpn(&tokens)?;
        let value = eval_rpn(&rpn)?;
        log::debug!("{sanitized} = {value}");
        Ok(value)
    }
}

/// Evaluates with the default configuration.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Engine::default().evaluate(expression)
}
