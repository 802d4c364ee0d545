use reckon_ops::DomainError;
use thiserror::Error;

/// Failures while running an RPN sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("Insufficient operands for operator: {operator}")]
    InsufficientOperands { operator: String },

    #[error("Missing argument for function: {function}")]
    MissingArgument { function: String },

    /// A token that has no meaning in postfix form, e.g. a parenthesis.
    #[error("Invalid token: {0}")]
    UnexpectedToken(String),

    /// The sequence did not reduce to exactly one value.
    #[error("Invalid expression ({remaining} values left on the stack)")]
    MalformedExpression { remaining: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
