//! Core record-keeping logic for recordbook.
//! This crate is the single source of truth for record store invariants.

pub mod config;
pub mod grading;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use config::{default_log_level, AppConfig};
pub use grading::{ParseError, ParseResult};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::clinic::{Patient, Prescription};
pub use model::inventory::InventoryItem;
pub use model::record::Keyed;
pub use model::student::{Grade, Student};
pub use model::transaction::Transaction;
pub use model::warehouse::{ElectronicItem, GroceryItem, StockItem};
pub use repo::record_store::{InsertPolicy, RecordStore, RepoError, RepoResult};
pub use repo::secondary_index::SecondaryIndex;
pub use service::clinic_service::{ClinicService, Selection, SelectionError};
pub use service::finance_service::{
    Account, AccountKind, BankTransferProcessor, CryptoWalletProcessor, FinanceError,
    FinanceService, MobileMoneyProcessor, Receipt, TransactionProcessor,
};
pub use service::grading_service::{generate_report, GradingError};
pub use service::inventory_service::InventoryService;
pub use service::warehouse_service::{StockRepository, Warehouse};
pub use storage::{load_from_file, save_to_file, LoadOutcome, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
