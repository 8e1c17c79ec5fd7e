//! In-memory record collections.
//!
//! # Responsibility
//! - Provide one generic keyed store reused by every exercise.
//! - Provide derived, rebuild-on-change groupings over store snapshots.
//!
//! # Invariants
//! - Strict stores never hold two records with equal keys.
//! - Rejected writes leave the store byte-for-byte unchanged.
//! - Read APIs hand out clones or shared borrows, never mutable aliases.

pub mod record_store;
pub mod secondary_index;
