//! Coupons domain module.
//!
//! Cart-level coupons (flat amount or percentage) and the admin-side coupon list.

pub mod book;
pub mod coupon;

pub use book::CouponBook;
pub use coupon::{Coupon, DiscountType};
