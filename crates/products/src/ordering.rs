//! Report orderings over products.
//!
//! These orderings are only used to produce display sequences. Sorting is
//! stable, so products with equal keys keep their input order.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::InventoryError;

use crate::product::Product;

/// Report sort key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// SKU ascending (lexicographic).
    Sku,
    /// Unit price ascending.
    Price,
    /// Inventory value descending.
    Value,
    /// Name ascending (lexicographic).
    Name,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::Sku,
        SortCriterion::Price,
        SortCriterion::Value,
        SortCriterion::Name,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortCriterion::Sku => "sku",
            SortCriterion::Price => "price",
            SortCriterion::Value => "value",
            SortCriterion::Name => "name",
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortCriterion::Sku => by_sku(a, b),
            SortCriterion::Price => by_price(a, b),
            SortCriterion::Value => by_value_desc(a, b),
            SortCriterion::Name => by_name(a, b),
        }
    }

    /// Stable-sort `products` in place.
    pub fn sort<P: AsRef<Product>>(self, products: &mut [P]) {
        products.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

impl core::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive. Input is matched as given, so padded keys are rejected.
impl FromStr for SortCriterion {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sku" => Ok(SortCriterion::Sku),
            "price" => Ok(SortCriterion::Price),
            "value" => Ok(SortCriterion::Value),
            "name" => Ok(SortCriterion::Name),
            _ => Err(InventoryError::invalid_sort_criterion(s)),
        }
    }
}

pub fn by_sku(a: &Product, b: &Product) -> Ordering {
    a.sku().cmp(b.sku())
}

pub fn by_price(a: &Product, b: &Product) -> Ordering {
    a.price().cmp(&b.price())
}

pub fn by_value_desc(a: &Product, b: &Product) -> Ordering {
    b.inventory_value().cmp(&a.inventory_value())
}

pub fn by_name(a: &Product, b: &Product) -> Ordering {
    a.name().cmp(b.name())
}

impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}
