//! `shopcart-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod update;
pub mod value_object;

pub use entity::{Entity, position_by_id};
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use update::Update;
pub use value_object::ValueObject;
