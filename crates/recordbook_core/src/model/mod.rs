//! Domain records held by the record store.
//!
//! # Responsibility
//! - Define one plain value type per exercise entity.
//! - Expose the `Keyed` capability the store relies on.
//!
//! # Invariants
//! - Every record type exposes exactly one primary key through `Keyed`.
//! - Records carry no storage handles; they are freely cloneable values.

pub mod clinic;
pub mod inventory;
pub mod record;
pub mod student;
pub mod transaction;
pub mod warehouse;
