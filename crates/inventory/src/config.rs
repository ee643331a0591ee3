//! Inventory configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the low-stock threshold.
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

/// Quantity below which a newly added product is queued as low-stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Products added with `quantity < low_stock_threshold` are enqueued.
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    /// Build config from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "{LOW_STOCK_THRESHOLD_ENV} is not an integer; using default {DEFAULT_LOW_STOCK_THRESHOLD}"
                ),
            }
        }

        config
    }

    pub fn is_low_stock(&self, quantity: i64) -> bool {
        quantity < self.low_stock_threshold
    }
}
