use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, Money, Sku};

/// Catalog entity: Product.
///
/// The SKU is fixed at creation; price and quantity are mutable and every
/// mutation refreshes `last_updated`. Equality is identity: two products are
/// equal iff their SKUs are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    sku: Sku,
    name: String,
    category: String,
    price: Money,
    quantity: i64,
    last_updated: DateTime<Utc>,
}

impl Product {
    /// Create a product stamped with the current time.
    ///
    /// No range validation: negative price or quantity are stored as given.
    pub fn new(
        sku: impl Into<Sku>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> Self {
        Self::new_at(sku, name, category, price, quantity, Utc::now())
    }

    /// Create a product with an explicit timestamp.
    pub fn new_at(
        sku: impl Into<Sku>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        quantity: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            last_updated: created_at,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Set the unit price and refresh `last_updated`.
    ///
    /// Running totals kept elsewhere are not touched; whoever owns them must
    /// apply the delta.
    pub fn set_price(&mut self, price: Money) {
        self.price = price;
        self.last_updated = Utc::now();
    }

    /// Set the stock quantity and refresh `last_updated`.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
        self.last_updated = Utc::now();
    }

    /// `price × quantity`, computed on every call.
    pub fn inventory_value(&self) -> Money {
        self.price.times(self.quantity)
    }

    /// Independent value copy of the current fields.
    pub fn snapshot(&self) -> Product {
        self.clone()
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.sku == other.sku
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.sku.hash(state);
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "SKU: {}, Name: {}, Category: {}, Price: {}, Qty: {}, Value: {}",
            self.sku,
            self.name,
            self.category,
            self.price,
            self.quantity,
            self.inventory_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn widget(quantity: i64) -> Product {
        Product::new("SKU-001", "Widget", "Tools", Money::from_minor(250), quantity)
    }

    #[test]
    fn inventory_value_is_price_times_quantity() {
        assert_eq!(widget(4).inventory_value(), Money::from_minor(1000));
        assert_eq!(widget(0).inventory_value(), Money::ZERO);
    }

    #[test]
    fn inventory_value_tracks_mutations() {
        let mut p = widget(4);
        p.set_quantity(10);
        assert_eq!(p.inventory_value(), Money::from_minor(2500));
        p.set_price(Money::from_minor(100));
        assert_eq!(p.inventory_value(), Money::from_minor(1000));
    }

    #[test]
    fn equality_is_by_sku_only() {
        let a = widget(4);
        let b = Product::new("SKU-001", "Other", "Misc", Money::from_minor(1), 99);
        let c = Product::new("SKU-002", "Widget", "Tools", Money::from_minor(250), 4);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Product> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn entity_identity_is_the_sku() {
        let a = widget(4);
        let mut b = a.snapshot();
        b.set_quantity(40);
        assert_eq!(a.id().as_str(), "SKU-001");
        assert!(a.same_identity(&b));
    }

    #[test]
    fn mutation_refreshes_last_updated() {
        let created = DateTime::<Utc>::UNIX_EPOCH;
        let mut p = Product::new_at("S", "n", "c", Money::from_minor(1), 1, created);
        assert_eq!(p.last_updated(), created);

        p.set_quantity(2);
        assert!(p.last_updated() > created);

        let after_qty = p.last_updated();
        p.set_price(Money::from_minor(5));
        assert!(p.last_updated() >= after_qty);
    }

    #[test]
    fn snapshot_is_independent_of_live_product() {
        let mut live = widget(5);
        let snap = live.snapshot();
        live.set_quantity(8);

        assert_eq!(snap.quantity(), 5);
        assert_eq!(live.quantity(), 8);
        assert_eq!(snap.sku(), live.sku());
    }

    #[test]
    fn negative_values_are_accepted_as_given() {
        let p = Product::new("NEG", "n", "c", Money::from_minor(-100), -3);
        assert_eq!(p.inventory_value(), Money::from_minor(300));
    }

    #[test]
    fn display_renders_all_fields() {
        let rendered = widget(4).to_string();
        assert_eq!(
            rendered,
            "SKU: SKU-001, Name: Widget, Category: Tools, Price: 2.50, Qty: 4, Value: 10.00"
        );
    }
}
