//! Bounded calculation history, most recent first.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::format::format_result;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Results closer than this are considered equal by [`History::find_by_result`].
pub const RESULT_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History capacity must be positive")]
    InvalidCapacity,
}

/// One successful calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: f64,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new<S: Into<String>>(expression: S, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
            timestamp: Local::now(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} ({})",
            self.expression,
            format_result(self.result),
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Aggregate view over the whole history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub oldest: DateTime<Local>,
    pub newest: DateTime<Local>,
}

impl fmt::Display for HistorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total calculations: {}", self.count)?;
        writeln!(
            f,
            "Result range: {} to {}",
            format_result(self.min),
            format_result(self.max)
        )?;
        writeln!(f, "Average result: {}", format_result(self.average))?;
        writeln!(f, "Oldest calculation: {}", self.oldest.format(TIMESTAMP_FORMAT))?;
        write!(f, "Newest calculation: {}", self.newest.format(TIMESTAMP_FORMAT))
    }
}

/// Most-recent-first list of calculations, trimmed to a fixed capacity.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl History {
    pub fn new(capacity: usize) -> Result<Self, HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::InvalidCapacity);
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records a calculation, dropping the oldest entry once full.
    pub fn record<S: Into<String>>(&mut self, expression: S, result: f64) {
        self.push(HistoryEntry::new(expression, result));
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Up to `count` entries, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().take(count)
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn find_by_result(&self, result: f64) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|e| (e.result - result).abs() < RESULT_TOLERANCE)
            .collect()
    }

    /// Case-insensitive substring search. A blank query matches nothing.
    pub fn find_by_expression(&self, query: &str) -> Vec<&HistoryEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| e.expression.to_lowercase().contains(&query))
            .collect()
    }

    /// The expression shown at 1-based position `index` in the listing.
    pub fn expression_for_reuse(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|e| e.expression.as_str())
    }

    pub fn summary(&self) -> Option<HistorySummary> {
        let newest = self.entries.front()?;
        let oldest = self.entries.back()?;

        let (min, max, sum) = self.entries.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), e| (min.min(e.result), max.max(e.result), sum + e.result),
        );

        Some(HistorySummary {
            count: self.entries.len(),
            min,
            max,
            average: sum / self.entries.len() as f64,
            oldest: oldest.timestamp,
            newest: newest.timestamp,
        })
    }

    /// Numbered listing of the newest `max_entries` entries.
    pub fn formatted(&self, max_entries: usize) -> String {
        if self.entries.is_empty() {
            return "No calculations in history yet".to_string();
        }

        let mut out = String::from("=== Calculation History ===\n");
        for (i, entry) in self.recent(max_entries).enumerate() {
            out.push_str(&format!("{}. {entry}\n", i + 1));
        }
        if self.entries.len() > max_entries {
            out.push_str(&format!(
                "... and {} more entries\n",
                self.entries.len() - max_entries
            ));
        }
        out
    }
}
