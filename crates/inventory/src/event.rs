//! Inventory transaction events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Money, Sku};
use stockroom_events::Event;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub sku: Sku,
    pub name: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdated {
    pub sku: Sku,
    pub old_quantity: i64,
    pub new_quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PriceUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUpdated {
    pub sku: Sku,
    pub old_price: Money,
    pub new_price: Money,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ProductAdded(ProductAdded),
    QuantityUpdated(QuantityUpdated),
    PriceUpdated(PriceUpdated),
}

impl InventoryEvent {
    pub fn sku(&self) -> &Sku {
        match self {
            InventoryEvent::ProductAdded(e) => &e.sku,
            InventoryEvent::QuantityUpdated(e) => &e.sku,
            InventoryEvent::PriceUpdated(e) => &e.sku,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductAdded(_) => "inventory.product.added",
            InventoryEvent::QuantityUpdated(_) => "inventory.product.quantity_updated",
            InventoryEvent::PriceUpdated(_) => "inventory.product.price_updated",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ProductAdded(e) => e.occurred_at,
            InventoryEvent::QuantityUpdated(e) => e.occurred_at,
            InventoryEvent::PriceUpdated(e) => e.occurred_at,
        }
    }
}

/// The transaction-history line shown to users.
impl core::fmt::Display for InventoryEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventoryEvent::ProductAdded(e) => write!(
                f,
                "ADD: {} - {} (Qty: {}) at {}",
                e.sku,
                e.name,
                e.quantity,
                e.occurred_at.format(TIMESTAMP_FORMAT)
            ),
            InventoryEvent::QuantityUpdated(e) => write!(
                f,
                "UPDATE: {} Quantity {} -> {} at {}",
                e.sku,
                e.old_quantity,
                e.new_quantity,
                e.occurred_at.format(TIMESTAMP_FORMAT)
            ),
            InventoryEvent::PriceUpdated(e) => write!(
                f,
                "PRICE: {} Price {} -> {} at {}",
                e.sku,
                e.old_price,
                e.new_price,
                e.occurred_at.format(TIMESTAMP_FORMAT)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn added_renders_history_line() {
        let ev = InventoryEvent::ProductAdded(ProductAdded {
            sku: Sku::from("SKU-001"),
            name: "Widget".to_string(),
            quantity: 3,
            occurred_at: at(),
        });
        assert_eq!(
            ev.to_string(),
            "ADD: SKU-001 - Widget (Qty: 3) at 2024-03-01 09:30:00 UTC"
        );
        assert_eq!(ev.event_type(), "inventory.product.added");
    }

    #[test]
    fn quantity_update_renders_old_and_new() {
        let ev = InventoryEvent::QuantityUpdated(QuantityUpdated {
            sku: Sku::from("SKU-001"),
            old_quantity: 5,
            new_quantity: 8,
            occurred_at: at(),
        });
        assert_eq!(
            ev.to_string(),
            "UPDATE: SKU-001 Quantity 5 -> 8 at 2024-03-01 09:30:00 UTC"
        );
        assert_eq!(ev.occurred_at(), at());
    }

    #[test]
    fn price_update_renders_money() {
        let ev = InventoryEvent::PriceUpdated(PriceUpdated {
            sku: Sku::from("P"),
            old_price: Money::from_minor(199),
            new_price: Money::from_minor(250),
            occurred_at: at(),
        });
        assert_eq!(
            ev.to_string(),
            "PRICE: P Price 1.99 -> 2.50 at 2024-03-01 09:30:00 UTC"
        );
    }

    #[test]
    fn serializes_with_variant_tag() {
        let ev = InventoryEvent::QuantityUpdated(QuantityUpdated {
            sku: Sku::from("S"),
            old_quantity: 1,
            new_quantity: 2,
            occurred_at: at(),
        });
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["QuantityUpdated"]["sku"], "S");
        assert_eq!(json["QuantityUpdated"]["new_quantity"], 2);
    }
}
