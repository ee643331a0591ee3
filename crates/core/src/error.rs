//! Inventory error model.

use thiserror::Error;

use crate::id::Sku;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is an expected, recoverable condition. An operation that
/// returns one of these has left all inventory state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A product with the same SKU is already in the catalog.
    #[error("product with SKU {0} already exists")]
    DuplicateSku(Sku),

    /// No product with this SKU is in the catalog.
    #[error("product with SKU {0} not found")]
    ProductNotFound(Sku),

    /// Undo was requested with an empty history.
    #[error("no operations to undo")]
    NothingToUndo,

    /// A report was requested with an unrecognized sort key.
    #[error("invalid sort criterion: {0}")]
    InvalidSortCriterion(String),

    /// A SKU string could not be parsed.
    #[error("invalid SKU: {0}")]
    InvalidSku(String),
}

impl InventoryError {
    pub fn duplicate_sku(sku: impl Into<Sku>) -> Self {
        Self::DuplicateSku(sku.into())
    }

    pub fn not_found(sku: impl Into<Sku>) -> Self {
        Self::ProductNotFound(sku.into())
    }

    pub fn invalid_sort_criterion(criterion: impl Into<String>) -> Self {
        Self::InvalidSortCriterion(criterion.into())
    }

    pub fn invalid_sku(msg: impl Into<String>) -> Self {
        Self::InvalidSku(msg.into())
    }
}
