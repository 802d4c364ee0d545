//! Named memory slots (`M`, `A`..`Z`, `total_1`, ...).

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::config::DEFAULT_MEMORY_CAPACITY;
use crate::format::format_result;

/// The slot used by `m+`, `mr` and `mc`.
pub const DEFAULT_SLOT: &str = "M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("Memory slot name cannot be empty")]
    EmptySlotName,

    #[error("Invalid memory slot name '{0}'. Use letters, numbers, and underscores only")]
    InvalidSlotName(String),

    #[error("Memory capacity exceeded. Maximum {capacity} slots allowed")]
    CapacityExceeded { capacity: usize },

    #[error("No value stored in memory slot '{0}'")]
    EmptySlot(String),

    #[error("Memory slot '{0}' does not exist")]
    NoSuchSlot(String),

    #[error("Memory capacity must be positive")]
    InvalidCapacity,
}

/// Occupancy and value range of a [`Memory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryStatistics {
    pub occupied: usize,
    pub capacity: usize,
    /// `(min, max, average)` over stored values, if any
    pub values: Option<(f64, f64, f64)>,
}

impl MemoryStatistics {
    pub fn available(&self) -> usize {
        self.capacity - self.occupied
    }

    /// Percentage of slots in use.
    pub fn utilisation(&self) -> f64 {
        self.occupied as f64 * 100.0 / self.capacity as f64
    }
}

impl fmt::Display for MemoryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Occupied slots: {}/{}", self.occupied, self.capacity)?;
        writeln!(f, "Available slots: {}", self.available())?;
        if let Some((min, max, average)) = self.values {
            writeln!(
                f,
                "Value range: {} to {}",
                format_result(min),
                format_result(max)
            )?;
            writeln!(f, "Average value: {}", format_result(average))?;
        }
        write!(f, "Memory utilization: {:.1}%", self.utilisation())
    }
}

/// A bounded map of named values.
#[derive(Debug, Clone)]
pub struct Memory {
    slots: BTreeMap<String, f64>,
    capacity: usize,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
            capacity: DEFAULT_MEMORY_CAPACITY,
        }
    }
}

fn check_slot_name(slot: &str) -> Result<(), MemoryError> {
    let mut chars = slot.chars();
    match chars.next() {
        None => Err(MemoryError::EmptySlotName),
        Some(first)
            if first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') =>
        {
            Ok(())
        }
        Some(_) if slot.trim().is_empty() => Err(MemoryError::EmptySlotName),
        Some(_) => Err(MemoryError::InvalidSlotName(slot.to_string())),
    }
}

impl Memory {
    pub fn new(capacity: usize) -> Result<Self, MemoryError> {
        if capacity == 0 {
            return Err(MemoryError::InvalidCapacity);
        }
        Ok(Self {
            slots: BTreeMap::new(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stores `value` in `slot`, replacing any previous value.
    ///
    /// A new slot is refused once every slot is taken; overwriting an
    /// existing one always succeeds.
    pub fn store(&mut self, slot: &str, value: f64) -> Result<(), MemoryError> {
        check_slot_name(slot)?;
        if self.is_full() && !self.slots.contains_key(slot) {
            return Err(MemoryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.slots.insert(slot.to_string(), value);
        Ok(())
    }

    pub fn recall(&self, slot: &str) -> Result<f64, MemoryError> {
        if slot.trim().is_empty() {
            return Err(MemoryError::EmptySlotName);
        }
        self.slots
            .get(slot)
            .copied()
            .ok_or_else(|| MemoryError::EmptySlot(slot.to_string()))
    }

    /// Adds `value` to `slot`, creating the slot if it is empty.
    pub fn add(&mut self, slot: &str, value: f64) -> Result<f64, MemoryError> {
        let total = self.slots.get(slot).copied().unwrap_or(0.0) + value;
        self.store(slot, total)?;
        Ok(total)
    }

    pub fn clear(&mut self, slot: &str) -> Result<(), MemoryError> {
        self.slots
            .remove(slot)
            .map(|_| ())
            .ok_or_else(|| MemoryError::NoSuchSlot(slot.to_string()))
    }

    pub fn clear_all(&mut self) {
        self.slots.clear();
    }

    pub fn has_value(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    /// Slot names in sorted order.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in slot-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn statistics(&self) -> MemoryStatistics {
        let values = (!self.slots.is_empty()).then(|| {
            let (min, max, sum) = self.slots.values().fold(
                (f64::INFINITY, f64::NEG_INFINITY, 0.0),
                |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
            );
            (min, max, sum / self.slots.len() as f64)
        });

        MemoryStatistics {
            occupied: self.slots.len(),
            capacity: self.capacity,
            values,
        }
    }
}
