//! Calculation history
//!
//! One entry per resolved binary operation or applied scientific function,
//! oldest first. The log only grows; the sole mutation besides appending is
//! [`History::clear`].

use crate::core::number::format_number;
use crate::core::{Operator, ScientificFn};
use serde::{Deserialize, Serialize};

/// A single completed operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left-hand side as rendered, e.g. `3 + 4` or `sqrt(9)`
    pub expression: String,
    /// The value the operation produced
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self { expression, result }
    }

    /// Entry for a resolved binary operation: `<a> <op> <b>`
    #[must_use]
    pub fn binary(a: f64, op: Operator, b: f64, result: f64) -> Self {
        Self::new(
            format!("{} {} {}", format_number(a), op.symbol(), format_number(b)),
            result,
        )
    }

    /// Entry for a scientific function: `<fn>(<x>)`
    #[must_use]
    pub fn function(func: ScientificFn, x: f64, result: f64) -> Self {
        Self::new(format!("{}({})", func.name(), format_number(x)), result)
    }

    /// Returns the formatted line, e.g. `3 + 4 = 7`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_number(self.result))
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Append-only log of completed operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Rendered lines, oldest first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::display).collect()
    }

    /// Serializes the entries (expression and numeric result) to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }
}
