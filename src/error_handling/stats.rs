//! Failure counters for a bulk run.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Per-category failure counts.
///
/// A bulk run checks one domain at a time, so plain counters behind `&mut`
/// are enough.
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    failures: HashMap<ErrorType, usize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one failure of the given category.
    pub fn record(&mut self, kind: ErrorType) {
        *self.failures.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: ErrorType) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.failures.values().sum()
    }

    /// Categories that occurred, in declaration order, with their counts.
    pub fn breakdown(&self) -> impl Iterator<Item = (ErrorType, usize)> + '_ {
        ErrorType::iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|(_, count)| *count > 0)
    }
}
