use std::collections::VecDeque;

/// Number of commands retained by the `history` builtin.
pub const HISTORY_CAPACITY: usize = 20;

/// Bounded, order-preserving log of executed commands. When full, adding a
/// new entry evicts the oldest one.
pub struct HistoryBuffer {
    entries: VecDeque<String>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        HistoryBuffer {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, entry: &str) {
        if entry.is_empty() {
            return;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.to_owned());
    }

    /// Entries in insertion order, oldest first, with 1-based display indices.
    pub fn list(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry.as_str()))
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
}
