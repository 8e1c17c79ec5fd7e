//! Inventory log use cases backed by a JSON file.
//!
//! # Responsibility
//! - Collect inventory entries in a permissive store.
//! - Save and reload the whole collection at a fixed path.

use crate::model::inventory::InventoryItem;
use crate::repo::record_store::RecordStore;
use crate::storage::{load_from_file, save_to_file, LoadOutcome, StorageResult};
use std::path::{Path, PathBuf};

pub struct InventoryService {
    store: RecordStore<InventoryItem>,
    file_path: PathBuf,
}

impl InventoryService {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            store: RecordStore::permissive(),
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Appends an entry; duplicate ids are kept.
    pub fn add(&mut self, item: InventoryItem) {
        self.store.push(item);
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.store.get_all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Entries whose id lies in `low..=high`, in insertion order.
    pub fn items_in_id_range(&self, low: u32, high: u32) -> Vec<InventoryItem> {
        self.store
            .iter()
            .filter(|item| (low..=high).contains(&item.id))
            .cloned()
            .collect()
    }

    pub fn save(&self) -> StorageResult<()> {
        save_to_file(&self.store, &self.file_path)
    }

    /// Replaces in-memory entries with the file contents, if the file exists.
    pub fn load(&mut self) -> StorageResult<LoadOutcome> {
        load_from_file(&mut self.store, &self.file_path)
    }
}
