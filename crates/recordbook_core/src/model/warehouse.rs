//! Warehouse stock records.
//!
//! # Responsibility
//! - Define electronic and grocery stock items.
//! - Provide the `StockItem` capability used by quantity-changing use cases.
//!
//! # Invariants
//! - Quantity is only mutated through `StockItem::set_quantity`, which callers
//!   reach after validating the new value.

use crate::model::record::Keyed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Capability shared by every warehouse item.
pub trait StockItem: Keyed<Key = u32> + Clone {
    fn name(&self) -> &str;
    fn quantity(&self) -> i64;
    fn set_quantity(&mut self, quantity: i64);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i64, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }
}

macro_rules! impl_stock_item {
    ($ty:ty) => {
        impl Keyed for $ty {
            type Key = u32;

            fn key(&self) -> u32 {
                self.id
            }
        }

        impl StockItem for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn quantity(&self) -> i64 {
                self.quantity
            }

            fn set_quantity(&mut self, quantity: i64) {
                self.quantity = quantity;
            }
        }
    };
}

impl_stock_item!(ElectronicItem);
impl_stock_item!(GroceryItem);
