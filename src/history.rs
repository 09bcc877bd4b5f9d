//! Query History
//!
//! In-memory conversation log of the Ask AI panel. Lives only as long as the
//! panel does.

use std::collections::HashSet;

/// How many conversations the panel lists
pub const RECENT_LIMIT: usize = 6;
/// Characters of a response shown in the list
pub const PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryHistoryEntry {
    pub query: String,
    pub response: String,
}

impl QueryHistoryEntry {
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
        }
    }

    /// Truncated response for the conversation list
    pub fn preview(&self) -> String {
        let head: String = self.response.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }

    pub fn is_successful(&self) -> bool {
        !self.response.contains("Error")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryStats {
    pub asked: usize,
    pub successful: usize,
    pub unique: usize,
}

/// Entries in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryHistory {
    entries: Vec<QueryHistoryEntry>,
}

impl QueryHistory {
    pub fn push(&mut self, entry: QueryHistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[QueryHistoryEntry] {
        &self.entries
    }

    /// Last `RECENT_LIMIT` entries, newest first
    pub fn recent(&self) -> Vec<QueryHistoryEntry> {
        self.entries.iter().rev().take(RECENT_LIMIT).cloned().collect()
    }

    pub fn stats(&self) -> HistoryStats {
        let unique: HashSet<&str> = self.entries.iter().map(|e| e.query.as_str()).collect();
        HistoryStats {
            asked: self.entries.len(),
            successful: self.entries.iter().filter(|e| e.is_successful()).count(),
            unique: unique.len(),
        }
    }
}
