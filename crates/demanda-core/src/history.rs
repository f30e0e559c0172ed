//! Session conversation log
//!
//! An append-only record of (question, answer, origin) for one session,
//! owned by the presentation layer and passed in by the caller. Capped so
//! a long-running session cannot grow without bound; the oldest entry is
//! evicted first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One answered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub question: String,
    pub answer: String,

    /// Origin label of the backend that actually produced the answer
    pub origin: String,
}

/// Ordered in-session conversation history
#[derive(Debug, Clone)]
pub struct ConversationLog {
    entries: VecDeque<ConversationEntry>,
    limit: usize,
}

impl ConversationLog {
    /// Default retention cap
    pub const DEFAULT_LIMIT: usize = 100;

    /// Create a log retaining at most `limit` entries (min 1)
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Append an entry, evicting the oldest once the cap is reached
    pub fn append(&mut self, entry: ConversationEntry) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries most-recent-first, for display
    pub fn entries(&self) -> impl Iterator<Item = &ConversationEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}
