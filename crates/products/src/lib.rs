//! Product catalog entity and report orderings.
//!
//! Pure domain logic: no storage, no IO. Aggregates spanning many products
//! live in `stockroom-inventory`.

pub mod ordering;
pub mod product;

pub use ordering::SortCriterion;
pub use product::Product;
