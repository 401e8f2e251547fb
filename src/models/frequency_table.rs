// src/models/frequency_table.rs
use std::collections::HashMap;

use crate::models::Gender;

/// Accumulated counts keyed by normalized name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` to the entry for `key`, creating it at zero if absent.
    #[inline]
    pub fn add(&mut self, key: &str, count: u64) {
        if let Some(total) = self.counts.get_mut(key) {
            *total = total.saturating_add(count);
        } else {
            self.counts.insert(key.to_owned(), count);
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the entries ordered by descending count.
    ///
    /// Equal counts are ordered by ascending key so that the result does not
    /// depend on hash iteration order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// The male and female tables built from one input file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FirstnameTables {
    pub male: FrequencyTable,
    pub female: FrequencyTable,
}

impl FirstnameTables {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, gender: Gender) -> &FrequencyTable {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    #[inline]
    pub const fn get_mut(&mut self, gender: Gender) -> &mut FrequencyTable {
        match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
        }
    }
}
