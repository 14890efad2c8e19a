//! Calculation history.
//!
//! A newest-first, capacity-bounded log of completed calculations. Entries
//! are immutable once appended; the only other mutation is clearing the
//! whole log.

use chrono::{DateTime, Local};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// Identifier of a history entry, unique and increasing within one log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HistoryId(u64);

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One completed calculation.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryEntry {
    pub id: HistoryId,
    /// What was computed, e.g. `3 + 4` or `sin(30)`.
    pub expression: String,
    /// The formatted result.
    pub result: String,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    /// Creation time as `HH:MM` for list rows.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Ordered, capacity-bounded calculation log.
#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_id: u64,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a log holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Record a calculation at the front, dropping the oldest entries beyond
    /// capacity.
    pub fn append(&mut self, expression: String, result: String) -> &HistoryEntry {
        let id = HistoryId(self.next_id);
        self.next_id += 1;

        self.entries.push_front(HistoryEntry {
            id,
            expression,
            result,
            timestamp: Local::now(),
        });
        self.entries.truncate(self.capacity);

        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up an entry to load its result back into the calculator.
    pub fn select(&self, id: HistoryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entry at `index`, where `0` is the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Id of the newest entry. Changes on every append, even at capacity.
    pub fn newest_id(&self) -> Option<HistoryId> {
        self.entries.front().map(|entry| entry.id)
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fuzzy-match entries against `query`, keeping newest-first order.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&HistoryEntry> {
        let query = query.trim();
        if query.is_empty() {
            return self.entries.iter().collect();
        }

        let matcher = SkimMatcherV2::default();
        self.entries
            .iter()
            .filter(|entry| {
                matcher.fuzzy_match(&entry.expression, query).is_some()
                    || matcher.fuzzy_match(&entry.result, query).is_some()
            })
            .collect()
    }
}
