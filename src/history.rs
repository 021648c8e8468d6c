//! Append-only ledger of accepted labels
//!
//! Each distinct label is stored once, in the order it was first accepted,
//! together with how many times it has been accepted. The rank shown next to
//! a label is the number of distinct labels at the moment it was first
//! recorded and never changes afterwards.

use std::collections::HashMap;
use std::fmt;

/// One distinct accepted label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub label: String,
    pub count: usize,
    pub rank: usize,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.rank, self.label)
    }
}

/// Ordered record of accepted labels with usage counts
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
    index: HashMap<String, usize>,
}

impl HistoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one acceptance of `label`
    ///
    /// Returns the label's count after recording.
    pub fn record_accepted(&mut self, label: &str) -> usize {
        if let Some(&slot) = self.index.get(label) {
            let entry = &mut self.entries[slot];
            entry.count += 1;
            return entry.count;
        }

        let rank = self.entries.len() + 1;
        self.index.insert(label.to_string(), self.entries.len());
        self.entries.push(HistoryEntry {
            label: label.to_string(),
            count: 1,
            rank,
        });
        1
    }

    /// `(rank, label)` pairs in first-seen order
    #[must_use]
    pub fn display_entries(&self) -> Vec<(usize, String)> {
        self.entries
            .iter()
            .map(|entry| (entry.rank, entry.label.clone()))
            .collect()
    }

    /// How many times `label` has been accepted
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<usize> {
        self.index.get(label).map(|&slot| self.entries[slot].count)
    }

    /// Entry shown with the given rank
    #[must_use]
    pub fn entry_by_rank(&self, rank: usize) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.rank == rank)
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything; a new folder starts a new ledger
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
