//! Keyed record capability.
//!
//! # Responsibility
//! - Describe the one shape the store requires from a record: a key.
//!
//! # Invariants
//! - `key()` is a pure projection; calling it twice yields equal keys.

use std::fmt::{Debug, Display};

/// Capability for any record the store can hold.
///
/// The store never inspects record fields other than through this trait or
/// caller-supplied predicates.
pub trait Keyed {
    type Key: Clone + Eq + Display + Debug;

    fn key(&self) -> Self::Key;
}
