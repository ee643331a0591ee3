//! Inventory manager: the single writer for every inventory view.
//!
//! One logical product is visible through several views:
//! - the catalog (`BTreeMap<Sku, Product>`), which is both the identity set
//!   and the SKU-ordered index,
//! - the transaction log (newest first),
//! - the undo stack of pre-update snapshots,
//! - the low-stock queue (append-only observation log),
//! - the running totals.
//!
//! All views are updated inside one `&mut self` call, after every failure
//! check has passed, so callers never observe a half-applied operation.

use std::collections::{BTreeMap, VecDeque};

use chrono::Utc;
use tracing::{debug, info, warn};

use stockroom_core::{InventoryError, InventoryResult, Money, Sku};
use stockroom_events::{EventEnvelope, EventLog};
use stockroom_products::{Product, SortCriterion};

use crate::config::InventoryConfig;
use crate::event::{InventoryEvent, PriceUpdated, ProductAdded, QuantityUpdated};
use crate::report::{
    CategoryBreakdown, InventoryStatistics, LowStockAlert, PriceChange, QuantityChange,
};

/// Totals maintained by delta on every mutation; never recomputed.
#[derive(Debug, Clone, Copy, Default)]
struct RunningTotals {
    products: usize,
    inventory_value: Money,
}

#[derive(Debug, Default)]
pub struct InventoryManager {
    config: InventoryConfig,
    catalog: BTreeMap<Sku, Product>,
    transactions: EventLog<InventoryEvent>,
    undo_stack: Vec<Product>,
    low_stock: VecDeque<Sku>,
    totals: RunningTotals,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InventoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Insert a new product.
    ///
    /// Fails with `DuplicateSku` if the SKU is already present, leaving every
    /// view untouched.
    pub fn add_product(&mut self, product: Product) -> InventoryResult<()> {
        if self.catalog.contains_key(product.sku()) {
            warn!(sku = %product.sku(), "rejected add: duplicate SKU");
            return Err(InventoryError::duplicate_sku(product.sku()));
        }

        let sku = product.sku().clone();
        let quantity = product.quantity();

        self.totals.products += 1;
        self.totals.inventory_value += product.inventory_value();

        self.transactions
            .record(InventoryEvent::ProductAdded(ProductAdded {
                sku: sku.clone(),
                name: product.name().to_string(),
                quantity,
                occurred_at: Utc::now(),
            }));

        if self.config.is_low_stock(quantity) {
            debug!(sku = %sku, quantity, "queued low-stock alert");
            self.low_stock.push_back(sku.clone());
        }

        info!(sku = %sku, quantity, price = %product.price(), "product added");
        self.catalog.insert(sku, product);
        Ok(())
    }

    /// Set a product's quantity.
    ///
    /// A snapshot of the pre-update product is pushed on the undo stack. The
    /// low-stock queue is not re-evaluated.
    pub fn update_product_quantity(
        &mut self,
        sku: &str,
        new_quantity: i64,
    ) -> InventoryResult<QuantityChange> {
        let Some(product) = self.catalog.get_mut(sku) else {
            warn!(sku, "rejected quantity update: product not found");
            return Err(InventoryError::not_found(sku));
        };

        self.undo_stack.push(product.snapshot());

        let old_quantity = product.quantity();
        product.set_quantity(new_quantity);

        self.totals.inventory_value += product.price().times_change(old_quantity, new_quantity);

        self.transactions
            .record(InventoryEvent::QuantityUpdated(QuantityUpdated {
                sku: product.sku().clone(),
                old_quantity,
                new_quantity,
                occurred_at: Utc::now(),
            }));

        info!(sku, old_quantity, new_quantity, "quantity updated");
        Ok(QuantityChange {
            sku: product.sku().clone(),
            old_quantity,
            new_quantity,
        })
    }

    /// Set a product's unit price.
    ///
    /// Price changes are logged but are not undoable.
    pub fn update_product_price(
        &mut self,
        sku: &str,
        new_price: Money,
    ) -> InventoryResult<PriceChange> {
        let Some(product) = self.catalog.get_mut(sku) else {
            warn!(sku, "rejected price update: product not found");
            return Err(InventoryError::not_found(sku));
        };

        let old_price = product.price();
        let old_value = product.inventory_value();
        product.set_price(new_price);

        self.totals.inventory_value -= old_value;
        self.totals.inventory_value += product.inventory_value();

        self.transactions
            .record(InventoryEvent::PriceUpdated(PriceUpdated {
                sku: product.sku().clone(),
                old_price,
                new_price,
                occurred_at: Utc::now(),
            }));

        info!(sku, old_price = %old_price, new_price = %new_price, "price updated");
        Ok(PriceChange {
            sku: product.sku().clone(),
            old_price,
            new_price,
        })
    }

    /// Restore the quantity held by the most recent snapshot.
    ///
    /// The restore goes through `update_product_quantity`, so it is logged
    /// and pushes its own snapshot: calling undo twice undoes the undo.
    pub fn undo_last_update(&mut self) -> InventoryResult<QuantityChange> {
        let Some(snapshot) = self.undo_stack.pop() else {
            warn!("rejected undo: nothing to undo");
            return Err(InventoryError::NothingToUndo);
        };

        match self.update_product_quantity(snapshot.sku().as_str(), snapshot.quantity()) {
            Ok(change) => {
                info!(sku = %change.sku, restored_quantity = change.new_quantity, "last update undone");
                Ok(change)
            }
            Err(e) => {
                self.undo_stack.push(snapshot);
                Err(e)
            }
        }
    }

    /// Products ordered by the named criterion (case-insensitive).
    pub fn list_sorted_by(&self, criterion: &str) -> InventoryResult<Vec<&Product>> {
        let criterion = criterion.parse::<SortCriterion>().inspect_err(|_| {
            warn!(criterion, "rejected listing: invalid sort criterion");
        })?;
        Ok(self.list_sorted(criterion))
    }

    /// Products ordered by `criterion`. Ties keep SKU order.
    pub fn list_sorted(&self, criterion: SortCriterion) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.catalog.values().collect();
        if criterion != SortCriterion::Sku {
            criterion.sort(&mut products);
        }
        products
    }

    /// Low-stock queue contents in enqueue order, showing current state.
    pub fn list_low_stock(&self) -> Vec<&Product> {
        self.low_stock
            .iter()
            .filter_map(|sku| self.catalog.get(sku))
            .collect()
    }

    /// Numbered low-stock report rows.
    pub fn low_stock_alerts(&self) -> Vec<LowStockAlert> {
        self.list_low_stock()
            .into_iter()
            .enumerate()
            .map(|(i, p)| LowStockAlert {
                position: i + 1,
                sku: p.sku().clone(),
                name: p.name().to_string(),
                quantity: p.quantity(),
            })
            .collect()
    }

    /// Up to `count` most recent transaction lines, newest first.
    /// A non-positive `count` yields nothing.
    pub fn list_transactions(&self, count: i64) -> Vec<String> {
        let count = usize::try_from(count).unwrap_or(0);
        self.transactions
            .latest(count)
            .map(|entry| entry.to_string())
            .collect()
    }

    /// Up to `count` most recent transaction records, newest first.
    pub fn transactions(&self, count: usize) -> Vec<&EventEnvelope<InventoryEvent>> {
        self.transactions.latest(count).collect()
    }

    /// Running totals plus a per-category breakdown from a full catalog scan.
    pub fn statistics(&self) -> InventoryStatistics {
        let total = self.totals.inventory_value;

        let mut per_category: BTreeMap<String, CategoryBreakdown> = BTreeMap::new();
        for product in self.catalog.values() {
            let entry = per_category
                .entry(product.category().to_string())
                .or_insert(CategoryBreakdown {
                    count: 0,
                    value: Money::ZERO,
                    percentage: 0.0,
                });
            entry.count += 1;
            entry.value += product.inventory_value();
        }

        for breakdown in per_category.values_mut() {
            breakdown.percentage = breakdown.value.percent_of(total);
        }

        InventoryStatistics {
            total_products: self.totals.products,
            total_inventory_value: total,
            per_category,
        }
    }

    pub fn get_product(&self, sku: &str) -> Option<&Product> {
        self.catalog.get(sku)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.catalog.contains_key(sku)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn total_products(&self) -> usize {
        self.totals.products
    }

    pub fn total_inventory_value(&self) -> Money {
        self.totals.inventory_value
    }

    /// Number of snapshots currently on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}
