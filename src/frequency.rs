//! Symbol frequency counting.

use std::collections::btree_map::{self, BTreeMap};

use crate::error::{Error, Result};

/// Occurrence count per distinct symbol, ordered by symbol.
///
/// The sum of all counts always fits in a `u64`, so every subtree weight of a
/// tree built from the table does too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,
    total: u64,
}

impl<S: Ord> FrequencyTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    /// Count every symbol of `message` in a single pass.
    pub fn count<I: IntoIterator<Item = S>>(message: I) -> Self {
        message.into_iter().collect()
    }

    /// Set the count of `symbol` directly. A zero count removes the symbol.
    ///
    /// # Errors
    /// Returns `Error::CountOverflow` if the new total would exceed `u64::MAX`;
    /// the table is left unchanged.
    pub fn insert(&mut self, symbol: S, count: u64) -> Result<()> {
        let previous = self.counts.get(&symbol).copied().unwrap_or(0);
        let total = (self.total - previous)
            .checked_add(count)
            .ok_or(Error::CountOverflow)?;
        if count == 0 {
            self.counts.remove(&symbol);
        } else {
            self.counts.insert(symbol, count);
        }
        self.total = total;
        Ok(())
    }

    /// Count one more occurrence of `symbol`.
    ///
    /// # Errors
    /// Returns `Error::CountOverflow` if the total is already `u64::MAX`.
    pub fn add(&mut self, symbol: S) -> Result<()> {
        self.total = self.total.checked_add(1).ok_or(Error::CountOverflow)?;
        *self.counts.entry(symbol).or_insert(0) += 1;
        Ok(())
    }

    /// Count recorded for `symbol`, if it occurred.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no symbol has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted message.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.counts.iter().map(|(s, &c)| (s, c))
    }
}

impl FrequencyTable<char> {
    /// Count the Unicode scalar values of `text`.
    pub fn of_str(text: &str) -> Self {
        Self::count(text.chars())
    }
}

impl<S: Ord> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            // one per item from zero: the total is bounded by the item count
            table.total += 1;
            *table.counts.entry(symbol).or_insert(0) += 1;
        }
        table
    }
}

impl<'a, S> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, &'a u64);
    type IntoIter = btree_map::Iter<'a, S, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
