use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// Maximum number of past questions kept.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub question: String,
    pub model_key: String,
    pub asked_at: DateTime<Utc>,
}

/// Most-recent-first list of asked questions, bounded to [`HISTORY_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `entry`, evicting the oldest once the limit is exceeded.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_back();
        }
    }

    /// Question text of the entry at `index`, for replay into the question field.
    pub fn select(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.question.as_str())
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
}
