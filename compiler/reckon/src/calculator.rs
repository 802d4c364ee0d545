//! A calculator session: the engine plus history and memory.

use std::fmt;

use reckon_ops::{Function, Operator};

use crate::config::{EngineConfig, SessionConfig};
use crate::engine::Engine;
use crate::error::EvalError;
use crate::session::{
    History, HistorySummary, Memory, MemoryError, MemoryStatistics, SessionError, DEFAULT_SLOT,
};

/// Static facts about the engine, shown by `stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    pub function_count: usize,
    pub operators: String,
    pub parser: &'static str,
}

impl EngineInfo {
    fn current() -> Self {
        Self {
            function_count: Function::ALL.len(),
            operators: Operator::ALL
                .iter()
                .map(|op| op.symbol())
                .collect::<Vec<_>>()
                .join(" "),
            parser: "Shunting-Yard",
        }
    }
}

/// Snapshot returned by [`Calculator::statistics`].
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub history: Option<HistorySummary>,
    pub memory: MemoryStatistics,
    pub engine: EngineInfo,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "History:")?;
        match &self.history {
            Some(summary) => writeln!(f, "{summary}")?,
            None => writeln!(f, "No calculations in history")?,
        }
        writeln!(f)?;
        writeln!(f, "Memory:")?;
        writeln!(f, "{}", self.memory)?;
        writeln!(f)?;
        writeln!(f, "Engine:")?;
        writeln!(f, "Functions available: {}", self.engine.function_count)?;
        writeln!(f, "Operators: {}", self.engine.operators)?;
        write!(f, "Parser: {}", self.engine.parser)
    }
}

/// Evaluates expressions and keeps the session state around them.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    engine: Engine,
    history: History,
    memory: Memory,
}

impl Calculator {
    pub fn new(engine: EngineConfig, session: SessionConfig) -> Result<Self, SessionError> {
        Ok(Self {
            engine: Engine::new(engine),
            history: History::new(session.history_capacity)?,
            memory: Memory::new(session.memory_capacity)?,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Evaluates `expression`, recording it in the history on success.
    ///
    /// The history keeps the text exactly as given, surrounding whitespace
    /// included.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, EvalError> {
        let value = self.engine.evaluate(expression)?;
        self.history.record(expression, value);
        Ok(value)
    }

    /// The most recent successful result.
    pub fn last_result(&self) -> Option<f64> {
        self.history.recent(1).next().map(|e| e.result)
    }

    /// Copies the last result into the default slot and returns it.
    pub fn store_last(&mut self) -> Option<Result<f64, MemoryError>> {
        let value = self.last_result()?;
        Some(self.memory.store(DEFAULT_SLOT, value).map(|()| value))
    }

    pub fn store(&mut self, slot: &str, value: f64) -> Result<(), MemoryError> {
        self.memory.store(slot, value)
    }

    pub fn recall(&self, slot: &str) -> Result<f64, MemoryError> {
        self.memory.recall(slot)
    }

    pub fn add_to_memory(&mut self, slot: &str, value: f64) -> Result<f64, MemoryError> {
        self.memory.add(slot, value)
    }

    /// Clears the default slot. Clearing an empty slot is not an error here.
    pub fn clear_memory(&mut self) {
        if let Err(err) = self.memory.clear(DEFAULT_SLOT) {
            log::debug!("mc: {err}");
        }
    }

    /// Empties both history and memory.
    pub fn clear_all(&mut self) {
        self.history.clear();
        self.memory.clear_all();
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            history: self.history.summary(),
            memory: self.memory.statistics(),
            engine: EngineInfo::current(),
        }
    }
}
