//! Reckon: an arithmetic expression calculator.
//!
//! The engine runs `validate → sanitize → tokenize → to_rpn → eval_rpn` on
//! each call and keeps no state between calls. [`Calculator`] layers a
//! session (history and memory slots) on top of it for the interactive
//! driver.

pub mod calculator;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod repl;
pub mod session;

pub use calculator::{Calculator, EngineInfo, Statistics};
pub use config::{EngineConfig, SessionConfig, HISTORY_SIZE_ENV};
pub use engine::{evaluate, Engine};
pub use error::{ErrorKind, EvalError};
pub use format::format_result;
pub use session::{History, HistoryEntry, Memory, MemoryError};

pub use reckon_ops::{Associativity, DomainError};
pub use reckon_parser::{Classification, ConversionError, ValidationError};
pub use reckon_eval::EvaluationError;
