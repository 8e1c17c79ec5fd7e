//! Inventory log entry.
//!
//! # Responsibility
//! - Define the record persisted by the inventory JSON file.
//!
//! # Invariants
//! - Wire field names are `Id`, `Name`, `Quantity`, `DateAdded`.
//! - `date_added` round-trips through ISO-8601 text without loss.

use crate::model::record::Keyed;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One item recorded in the inventory log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    /// Local wall-clock time the item was logged.
    pub date_added: NaiveDateTime,
}

impl InventoryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: u32, date_added: NaiveDateTime) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl Keyed for InventoryItem {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}
