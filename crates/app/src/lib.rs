//! Shop session: admin and cart operations over an injected key/value store.
//!
//! Products and coupons persist under fixed keys; the cart lives only as long as
//! the session.

pub mod seed;
pub mod shop;

pub use shop::{COUPONS_KEY, PRODUCTS_KEY, Shop};
