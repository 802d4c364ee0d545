use reckon_eval::EvaluationError;
use reckon_ops::DomainError;
use reckon_parser::{ConversionError, ValidationError};
use thiserror::Error;

/// Any failure of a single evaluation, tagged by the stage that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Evaluation error: {0}")]
    Evaluation(EvaluationError),

    #[error("Math error: {0}")]
    Domain(#[from] DomainError),
}

impl From<EvaluationError> for EvalError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::Domain(domain) => EvalError::Domain(domain),
            other => EvalError::Evaluation(other),
        }
    }
}

/// Coarse error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Conversion,
    Evaluation,
    Domain,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Validation(_) => ErrorKind::Validation,
            EvalError::Conversion(_) => ErrorKind::Conversion,
            EvalError::Evaluation(_) => ErrorKind::Evaluation,
            EvalError::Domain(_) => ErrorKind::Domain,
        }
    }
}
