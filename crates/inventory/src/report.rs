//! Report shapes returned to the caller.

use std::collections::BTreeMap;

use serde::Serialize;

use stockroom_core::{Money, Sku};

/// Result of a quantity change (including an undo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityChange {
    pub sku: Sku,
    pub old_quantity: i64,
    pub new_quantity: i64,
}

/// Result of a price change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceChange {
    pub sku: Sku,
    pub old_price: Money,
    pub new_price: Money,
}

/// One numbered row of the low-stock report.
///
/// `quantity` is the product's current quantity, which may no longer be low.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockAlert {
    /// 1-based position in enqueue order.
    pub position: usize,
    pub sku: Sku,
    pub name: String,
    pub quantity: i64,
}

/// Per-category slice of the inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub count: usize,
    pub value: Money,
    /// Share of the total inventory value, 0 when the total is zero.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStatistics {
    pub total_products: usize,
    pub total_inventory_value: Money,
    pub per_category: BTreeMap<String, CategoryBreakdown>,
}
