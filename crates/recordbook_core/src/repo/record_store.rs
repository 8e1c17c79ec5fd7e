//! Generic keyed record store.
//!
//! # Responsibility
//! - Hold records of one type in insertion order.
//! - Enforce the configured duplicate-key policy on insert.
//! - Apply updates transactionally: validate on a working copy, then commit.
//!
//! # Invariants
//! - `get_all()` returns records in insertion order.
//! - Under `InsertPolicy::Strict`, keys are unique at all times.
//! - A failed `insert`, `update_with` or `replace_all` does not mutate state.

use crate::model::record::Keyed;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level error for lookup, insert and update operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No record carries the requested key.
    NotFound(String),
    /// Strict insert collided with an existing key.
    DuplicateKey(String),
    /// A proposed field value violates a domain constraint.
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

impl RepoError {
    pub fn not_found(key: &impl Display) -> Self {
        Self::NotFound(key.to_string())
    }

    pub fn duplicate(key: &impl Display) -> Self {
        Self::DuplicateKey(key.to_string())
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "record with ID {key} not found"),
            Self::DuplicateKey(key) => write!(f, "record with ID {key} already exists"),
            Self::InvalidValue { field, message } => write!(f, "invalid {field}: {message}"),
        }
    }
}

impl Error for RepoError {}

/// Duplicate-key policy, fixed when the store is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPolicy {
    /// Always append; lookups return the first match.
    #[default]
    Permissive,
    /// Reject inserts whose key is already present.
    Strict,
}

/// Insertion-ordered collection of keyed records.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Keyed> {
    records: Vec<T>,
    policy: InsertPolicy,
}

impl<T: Keyed + Clone> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new(InsertPolicy::default())
    }
}

impl<T: Keyed + Clone> RecordStore<T> {
    pub fn new(policy: InsertPolicy) -> Self {
        Self {
            records: Vec::new(),
            policy,
        }
    }

    pub fn permissive() -> Self {
        Self::new(InsertPolicy::Permissive)
    }

    pub fn strict() -> Self {
        Self::new(InsertPolicy::Strict)
    }

    pub fn policy(&self) -> InsertPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds one record.
    ///
    /// # Errors
    /// - `DuplicateKey` under the strict policy when the key is present.
    pub fn insert(&mut self, record: T) -> RepoResult<()> {
        if self.policy == InsertPolicy::Strict {
            let key = record.key();
            if self.position(&key).is_some() {
                return Err(RepoError::duplicate(&key));
            }
        }
        self.records.push(record);
        Ok(())
    }

    /// Appends to a permissive store, which accepts every record.
    ///
    /// Strict stores must go through [`RecordStore::insert`].
    pub fn push(&mut self, record: T) {
        debug_assert_eq!(
            self.policy,
            InsertPolicy::Permissive,
            "push bypasses the duplicate check of strict stores"
        );
        self.records.push(record);
    }

    /// Returns a copy of the first record with `key`.
    ///
    /// # Errors
    /// - `NotFound` when no record matches.
    pub fn get_by_id(&self, key: &T::Key) -> RepoResult<T> {
        self.find(key).ok_or_else(|| RepoError::not_found(key))
    }

    /// Returns a copy of the first record with `key`, if any.
    pub fn find(&self, key: &T::Key) -> Option<T> {
        self.position(key).map(|index| self.records[index].clone())
    }

    /// Returns a copy of the first record matching `predicate`, if any.
    pub fn find_by<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().find(|record| predicate(record)).cloned()
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.position(key).is_some()
    }

    /// Snapshot of every record in insertion order.
    pub fn get_all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Read-only view without copying.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Vec<T::Key> {
        self.records.iter().map(|record| record.key()).collect()
    }

    /// Removes the first record with `key`.
    ///
    /// Returns `Ok(true)` when a record was removed. A missing key yields
    /// `Ok(false)` for permissive stores and `NotFound` for strict ones.
    pub fn remove(&mut self, key: &T::Key) -> RepoResult<bool> {
        match self.position(key) {
            Some(index) => {
                self.records.remove(index);
                Ok(true)
            }
            None => match self.policy {
                InsertPolicy::Permissive => Ok(false),
                InsertPolicy::Strict => Err(RepoError::not_found(key)),
            },
        }
    }

    /// Removes the first record matching `predicate`; returns whether one was removed.
    pub fn remove_by<P>(&mut self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        match self.records.iter().position(|record| predicate(record)) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Updates the first record with `key` through `apply`.
    ///
    /// `apply` runs against a working copy; the copy replaces the stored
    /// record only when `apply` returns `Ok`. The key must not change under
    /// the strict policy if it would collide with another record.
    ///
    /// # Errors
    /// - `NotFound` when no record matches.
    /// - Any error returned by `apply`.
    /// - `DuplicateKey` when a strict update rekeys onto an existing record.
    pub fn update_with<F>(&mut self, key: &T::Key, apply: F) -> RepoResult<T>
    where
        F: FnOnce(&mut T) -> RepoResult<()>,
    {
        let index = self.position(key).ok_or_else(|| RepoError::not_found(key))?;
        let mut working = self.records[index].clone();
        apply(&mut working)?;

        let new_key = working.key();
        if self.policy == InsertPolicy::Strict && new_key != *key {
            let collides = self
                .records
                .iter()
                .enumerate()
                .any(|(other, record)| other != index && record.key() == new_key);
            if collides {
                return Err(RepoError::duplicate(&new_key));
            }
        }

        self.records[index] = working.clone();
        Ok(working)
    }

    /// Replaces the whole collection.
    ///
    /// # Errors
    /// - `DuplicateKey` under the strict policy when `records` repeats a key;
    ///   the current contents are kept.
    pub fn replace_all(&mut self, records: Vec<T>) -> RepoResult<()> {
        if self.policy == InsertPolicy::Strict {
            if let Some(key) = first_duplicate_key(&records) {
                return Err(RepoError::duplicate(&key));
            }
        }
        self.records = records;
        Ok(())
    }

    fn position(&self, key: &T::Key) -> Option<usize> {
        self.records.iter().position(|record| record.key() == *key)
    }
}

fn first_duplicate_key<T: Keyed>(records: &[T]) -> Option<T::Key> {
    let mut seen: Vec<T::Key> = Vec::with_capacity(records.len());
    for record in records {
        let key = record.key();
        if seen.contains(&key) {
            return Some(key);
        }
        seen.push(key);
    }
    None
}
