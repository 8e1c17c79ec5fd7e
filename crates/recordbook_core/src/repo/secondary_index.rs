//! One-shot grouping of records by a non-primary key.
//!
//! # Responsibility
//! - Build key -> ordered group mappings from a record snapshot.
//!
//! # Invariants
//! - Groups preserve the input order of their records.
//! - The index is never updated incrementally; callers rebuild it after the
//!   source collection changes.

use std::collections::BTreeMap;

/// Immutable grouping of records by a derived key.
#[derive(Debug, Clone)]
pub struct SecondaryIndex<K: Ord, T> {
    groups: BTreeMap<K, Vec<T>>,
}

impl<K: Ord, T> Default for SecondaryIndex<K, T> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<K: Ord, T> SecondaryIndex<K, T> {
    /// Groups `records` by `key_fn` in a single pass.
    pub fn build<I, F>(records: I, key_fn: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> K,
    {
        let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
        for record in records {
            groups.entry(key_fn(&record)).or_default().push(record);
        }
        Self { groups }
    }

    /// Records grouped under `key`; empty when the key is unknown.
    pub fn get(&self, key: &K) -> &[T] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    /// `(key, group)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.groups
            .iter()
            .map(|(key, group)| (key, group.as_slice()))
    }
}
