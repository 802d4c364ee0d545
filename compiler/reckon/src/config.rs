//! Tuning knobs for the engine and the interactive session.

use reckon_ops::Associativity;
use reckon_parser::validator::DEFAULT_MAX_DEPTH;

/// Environment variable overriding [`SessionConfig::history_capacity`].
pub const HISTORY_SIZE_ENV: &str = "RECKON_HISTORY_SIZE";

/// Default number of history entries kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Default number of memory slots.
pub const DEFAULT_MEMORY_CAPACITY: usize = 26;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Grouping of chained `^`
    pub power_associativity: Associativity,
    /// Deepest parenthesis nesting the validator accepts, clamped to
    /// `1..=10` when the engine is built
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            power_associativity: Associativity::Left,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub history_capacity: usize,
    pub memory_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            memory_capacity: DEFAULT_MEMORY_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Defaults, with the history capacity taken from `RECKON_HISTORY_SIZE`
    /// when it holds a positive integer.
    pub fn from_env() -> Self {
        Self::default().with_history_override(std::env::var(HISTORY_SIZE_ENV).ok().as_deref())
    }

    fn with_history_override(mut self, value: Option<&str>) -> Self {
        if let Some(s) = value {
            match s.trim().parse::<usize>() {
                Ok(n) if n > 0 => self.history_capacity = n,
                _ => log::warn!("ignoring {HISTORY_SIZE_ENV}={s:?}: expected a positive integer"),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.history_capacity, 100);
        assert_eq!(config.memory_capacity, 26);
        assert_eq!(EngineConfig::default().max_depth, 10);
        assert_eq!(
            EngineConfig::default().power_associativity,
            Associativity::Left
        );
    }

    #[test]
    fn history_override() {
        let base = SessionConfig::default();
        assert_eq!(base.with_history_override(Some("250")).history_capacity, 250);
        assert_eq!(base.with_history_override(Some(" 7 ")).history_capacity, 7);
        assert_eq!(base.with_history_override(Some("0")).history_capacity, 100);
        assert_eq!(base.with_history_override(Some("lots")).history_capacity, 100);
        assert_eq!(base.with_history_override(None).history_capacity, 100);
    }
}
