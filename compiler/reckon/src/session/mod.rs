//! Per-session state owned by the interactive driver.

pub mod history;
pub mod memory;

pub use history::{History, HistoryEntry, HistoryError, HistorySummary};
pub use memory::{Memory, MemoryError, MemoryStatistics, DEFAULT_SLOT};

use thiserror::Error;

/// Failure building a session from a [`crate::SessionConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Memory(#[from] MemoryError),
}
