//! Inventory module: the in-memory catalog and everything derived from it.
//!
//! `InventoryManager` owns the catalog, the transaction log, the undo stack,
//! the low-stock queue and the running totals, and is the only place any of
//! them change.

pub mod config;
pub mod event;
pub mod manager;
pub mod report;

pub use config::InventoryConfig;
pub use event::{InventoryEvent, PriceUpdated, ProductAdded, QuantityUpdated};
pub use manager::InventoryManager;
pub use report::{
    CategoryBreakdown, InventoryStatistics, LowStockAlert, PriceChange, QuantityChange,
};

pub use stockroom_core::{InventoryError, InventoryResult, Money, Sku};
pub use stockroom_products::{Product, SortCriterion};
