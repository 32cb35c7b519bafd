//! Move history: the FIFO queue that drives eviction.

use super::types::Mark;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of marks kept on the board.
pub const HISTORY_CAPACITY: usize = 9;

/// A mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct MoveRecord {
    /// Board index (0-8).
    pub index: usize,
    /// Mark that was placed.
    pub mark: Mark,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Records of marks still on the board, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: VecDeque<MoveRecord>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no marks are recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when the next push would exceed [`HISTORY_CAPACITY`].
    pub fn is_full(&self) -> bool {
        self.records.len() >= HISTORY_CAPACITY
    }

    /// The oldest record.
    pub fn head(&self) -> Option<&MoveRecord> {
        self.records.front()
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push_back(record);
    }

    pub(crate) fn pop_oldest(&mut self) -> Option<MoveRecord> {
        self.records.pop_front()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
