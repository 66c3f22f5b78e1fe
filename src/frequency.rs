//! Symbol frequency tables.
//!
//! A [`FrequencyTable`] maps each symbol to a positive weight. Iteration is
//! always ascending by symbol, which fixes the order leaves enter the priority
//! queue and so makes tree shape reproducible.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Ordered mapping from symbol to weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    weights: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every character of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut weights = BTreeMap::new();
        for c in text.chars() {
            *weights.entry(c).or_insert(0) += 1;
        }
        Self { weights }
    }

    /// Build a table from `(symbol, weight)` pairs.
    ///
    /// Repeated symbols overwrite earlier entries.
    ///
    /// # Errors
    /// Returns `Error::InvalidWeight` if any weight is 0.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, u64)>,
    {
        let mut table = Self::new();
        for (symbol, weight) in pairs {
            table.insert(symbol, weight)?;
        }
        Ok(table)
    }

    /// Build a table from constant pairs known to have non-zero weights.
    pub(crate) fn from_static(pairs: &[(char, u64)]) -> Self {
        debug_assert!(pairs.iter().all(|&(_, w)| w > 0));
        Self {
            weights: pairs.iter().copied().collect(),
        }
    }

    /// Set the weight of `symbol`, returning the previous weight if any.
    ///
    /// # Errors
    /// Returns `Error::InvalidWeight` if `weight` is 0.
    pub fn insert(&mut self, symbol: char, weight: u64) -> Result<Option<u64>> {
        if weight == 0 {
            return Err(Error::InvalidWeight { symbol, weight });
        }
        Ok(self.weights.insert(symbol, weight))
    }

    /// Weight of `symbol`, if present.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.weights.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights, or `None` if it does not fit in a `u64`.
    pub fn total_weight(&self) -> Option<u64> {
        self.weights
            .values()
            .try_fold(0u64, |acc, &w| acc.checked_add(w))
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.weights.iter().map(|(&s, &w)| (s, w))
    }
}
