//! Postfix (RPN) evaluation for the Reckon engine.

pub mod error;
pub mod evaluator;

pub use error::EvaluationError;
pub use evaluator::eval_rpn;
