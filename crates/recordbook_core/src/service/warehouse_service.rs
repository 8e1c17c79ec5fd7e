//! Warehouse stock use cases.
//!
//! # Responsibility
//! - Keep one strict store per item category.
//! - Validate quantity changes before they reach the store.
//!
//! # Invariants
//! - Keys are unique within a category.
//! - A stored quantity is never negative after a successful update.
//! - Rejected updates leave the stored item unchanged.

use crate::model::warehouse::{ElectronicItem, GroceryItem, StockItem};
use crate::repo::record_store::{RecordStore, RepoError, RepoResult};
use log::{info, warn};

/// Strict repository for one warehouse item category.
#[derive(Debug, Clone)]
pub struct StockRepository<T: StockItem> {
    category: &'static str,
    store: RecordStore<T>,
}

impl<T: StockItem> StockRepository<T> {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            store: RecordStore::strict(),
        }
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Adds a new item.
    ///
    /// # Errors
    /// - `DuplicateKey` when the id is already stocked.
    pub fn add_item(&mut self, item: T) -> RepoResult<()> {
        let id = item.key();
        let result = self.store.insert(item);
        self.log_outcome("stock_add", id, &result);
        result
    }

    pub fn get_item(&self, id: u32) -> RepoResult<T> {
        self.store.get_by_id(&id)
    }

    /// Removes an item.
    ///
    /// # Errors
    /// - `NotFound` when the id is not stocked.
    pub fn remove_item(&mut self, id: u32) -> RepoResult<()> {
        let result = self.store.remove(&id).map(|_| ());
        self.log_outcome("stock_remove", id, &result);
        result
    }

    pub fn items(&self) -> Vec<T> {
        self.store.get_all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Sets an item's quantity.
    ///
    /// # Errors
    /// - `InvalidValue` when `new_quantity` is negative; checked first.
    /// - `NotFound` when the id is not stocked.
    pub fn update_quantity(&mut self, id: u32, new_quantity: i64) -> RepoResult<T> {
        let result = update_quantity(&mut self.store, id, new_quantity);
        self.log_outcome("stock_update", id, &result);
        result
    }

    /// Adds `amount` units to an item's current quantity.
    pub fn increase_stock(&mut self, id: u32, amount: i64) -> RepoResult<T> {
        let result = self.store.get_by_id(&id).and_then(|item| {
            let target = item
                .quantity()
                .checked_add(amount)
                .ok_or_else(|| RepoError::InvalidValue {
                    field: "quantity",
                    message: format!("adding {amount} overflows the current quantity"),
                })?;
            update_quantity(&mut self.store, id, target)
        });
        self.log_outcome("stock_increase", id, &result);
        result
    }

    fn log_outcome<R>(&self, event: &str, id: u32, result: &RepoResult<R>) {
        match result {
            Ok(_) => info!(
                "event={event} module=warehouse status=ok category={} id={id}",
                self.category
            ),
            Err(err) => warn!(
                "event={event} module=warehouse status=error category={} id={id} error={err}",
                self.category
            ),
        }
    }
}

/// Validates then applies a quantity change on any stock store.
///
/// # Errors
/// - `InvalidValue` for a negative quantity, before the key is looked up.
/// - `NotFound` when `id` is absent.
pub fn update_quantity<T: StockItem>(
    store: &mut RecordStore<T>,
    id: u32,
    new_quantity: i64,
) -> RepoResult<T> {
    if new_quantity < 0 {
        return Err(RepoError::InvalidValue {
            field: "quantity",
            message: format!("Quantity cannot be negative. Provided: {new_quantity}"),
        });
    }
    store.update_with(&id, |item| {
        item.set_quantity(new_quantity);
        Ok(())
    })
}

/// Electronics and groceries held side by side.
#[derive(Debug, Clone)]
pub struct Warehouse {
    pub electronics: StockRepository<ElectronicItem>,
    pub groceries: StockRepository<GroceryItem>,
}

impl Default for Warehouse {
    fn default() -> Self {
        Self::new()
    }
}

impl Warehouse {
    pub fn new() -> Self {
        Self {
            electronics: StockRepository::new("electronics"),
            groceries: StockRepository::new("groceries"),
        }
    }
}
