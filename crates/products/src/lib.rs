//! Products domain module.
//!
//! Catalog entries with quantity-tiered discounts, and the admin operations that
//! replace them. Pure domain logic (no IO, no storage).

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::{Discount, NewProduct, Product};
