//! Structural validation of raw calculator input.
//!
//! Four checks run in a fixed order, cheapest first, and the first failure
//! wins:
//!
//! 1. every character is allowed
//! 2. parentheses balance and nest at most [`DEFAULT_MAX_DEPTH`] deep
//! 3. every `name(` is a known function with a closing parenthesis
//! 4. no consecutive operators, empty `()` or trailing operator
//!
//! Command keywords short-circuit all four.

mod checks;


use crate::error::ValidationError;

/// Deepest parenthesis nesting accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Keywords handled by the calling shell rather than the engine.
pub const COMMAND_KEYWORDS: [&str; 10] = [
    "help", "history", "clear", "m+", "mr", "mc", "quit", "memory", "stats", "export",
];

/// What kind of input a line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Expression,
    Command,
    Invalid,
}

/// Outcome of [`validate`]. Call-scoped; nothing here outlives the check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub classification: Classification,
    /// The trimmed input, present when valid
    pub input: Option<String>,
    /// The first failing check, present when invalid
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    fn valid(input: &str, classification: Classification) -> Self {
        Self {
            classification,
            input: Some(input.to_string()),
            error: None,
        }
    }

    fn invalid(error: ValidationError) -> Self {
        Self {
            classification: Classification::Invalid,
            input: None,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable reason for rejection.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Converts into a `Result`, keeping the classification on success.
    pub fn into_result(self) -> Result<Classification, ValidationError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.classification),
        }
    }
}

/// Validator with a configurable nesting limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_depth: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// A validator with a tighter nesting limit.
    ///
    /// The limit is clamped to `1..=DEFAULT_MAX_DEPTH`; it can only lower
    /// the default cap, never lift it.
    pub fn with_max_depth(max_depth: usize) -> Self {
        let clamped = max_depth.clamp(1, DEFAULT_MAX_DEPTH);
        if clamped != max_depth {
            log::warn!("nesting limit {max_depth} out of range, using {clamped}");
        }
        Self { max_depth: clamped }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Classifies `raw` and runs the structural checks on expressions.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ValidationResult::invalid(ValidationError::Empty);
        }

        if is_command(trimmed) {
            return ValidationResult::valid(trimmed, Classification::Command);
        }

        let outcome = checks::characters(trimmed)
            .and_then(|()| checks::parentheses(trimmed, self.max_depth))
            .and_then(|()| checks::function_calls(trimmed))
            .and_then(|()| checks::syntax(trimmed));

        match outcome {
            Ok(()) => ValidationResult::valid(trimmed, Classification::Expression),
            Err(err) => {
                log::debug!("rejected {trimmed:?}: {err}");
                ValidationResult::invalid(err)
            }
        }
    }
}

/// Validates with the default nesting limit.
pub fn validate(raw: &str) -> ValidationResult {
    Validator::new().validate(raw)
}

/// Returns true if `input` is one of [`COMMAND_KEYWORDS`], ignoring case.
pub fn is_command(input: &str) -> bool {
    COMMAND_KEYWORDS
        .iter()
        .any(|k| k.eq_ignore_ascii_case(input.trim()))
}
