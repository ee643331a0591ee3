//! `stockroom-core` — inventory foundation building blocks.
//!
//! Identifiers, money, entity/value-object traits and the error taxonomy.
//! No storage, no IO.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use id::Sku;
pub use value_object::{Money, ValueObject};
