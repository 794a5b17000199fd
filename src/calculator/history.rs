//! Bounded calculation history.

use std::collections::VecDeque;

use tracing::trace;

/// Number of entries kept when nothing else is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 966;

/// A successful calculation: what was typed and what it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub input: String,
    pub result: String,
}

impl HistoryEntry {
    /// Two-line rendering used by history lists.
    pub fn display_text(&self) -> String {
        format!("{}\n= {}", self.input, self.result)
    }
}

/// Chronologically stored history with FIFO eviction.
///
/// Indices used by [`HistoryLog::get`] and [`HistoryLog::select`] follow
/// display order, where 0 is the most recent entry.
#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    /// Create an empty log. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry, evicting the oldest ones beyond capacity.
    pub fn record(&mut self, input: impl Into<String>, result: impl Into<String>) {
        self.entries.push_back(HistoryEntry {
            input: input.into(),
            result: result.into(),
        });
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                trace!(input = %evicted.input, "evicted oldest history entry");
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry at `index` in display order.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        if index >= self.entries.len() {
            return None;
        }
        self.entries.get(self.entries.len() - 1 - index)
    }

    /// Result string of the entry at `index` in display order.
    pub fn select(&self, index: usize) -> Option<&str> {
        self.get(index).map(|entry| entry.result.as_str())
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }
}
