//! Static registries for the Reckon expression engine.
//!
//! Operators, functions and constants are closed enums bound at compile time.
//! Each variant carries its own metadata (symbol, precedence, arity) and the
//! numeric operation it performs. The name tables in this crate exist only so
//! the lexer can map source text onto a variant.

#![warn(missing_docs)]

pub mod constant;
pub mod error;
pub mod function;
pub mod math;
pub mod operator;

pub use constant::Constant;
pub use error::DomainError;
pub use function::Function;
pub use operator::{Associativity, Operator};

/// Result type for a single numeric operation.
pub type OpResult = Result<f64, DomainError>;
