//! Cart domain module.
//!
//! Cart lines, the pricing rules (tier discounts first, then one coupon on the
//! discounted total), and the session-scoped cart state. Pure domain logic.

pub mod cart;
pub mod pricing;

pub use cart::{CartItem, CartState};
pub use pricing::{
    CartTotals, cart_totals, coupon_applied_total, discounted_price, item_total,
    max_applicable_discount_rate, update_cart_item_quantity,
};
