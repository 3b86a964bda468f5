//! Cart lines and session-scoped cart state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopcart_core::{ProductId, ValueObject};
use shopcart_coupons::Coupon;
use shopcart_products::Product;

use crate::pricing::{self, CartTotals};

/// One cart line: a product snapshot and how many units of it.
///
/// Invariant: `0 < quantity <= product.stock` for lines held by a `CartState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl ValueObject for CartItem {}

/// Cart contents plus the selected coupon, for the lifetime of a session.
///
/// Lines are kept in insertion order and are unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartItem>,
    selected_coupon: Option<Coupon>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn selected_coupon(&self) -> Option<&Coupon> {
        self.selected_coupon.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn line(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product.id == product_id)
    }

    /// Units of `product` not yet claimed by the cart.
    pub fn remaining_stock(&self, product: &Product) -> u32 {
        let in_cart = self.line(&product.id).map_or(0, |item| item.quantity);
        product.stock.saturating_sub(in_cart)
    }

    /// Add one unit of `product`.
    ///
    /// Returns `false` (and leaves the cart alone) when no stock remains.
    pub fn add_to_cart(&mut self, product: &Product) -> bool {
        if self.remaining_stock(product) == 0 {
            tracing::debug!(product_id = %product.id, "add to cart skipped: out of stock");
            return false;
        }

        match self.items.iter().position(|item| item.product.id == product.id) {
            Some(idx) => {
                let next = self.items[idx]
                    .with_change(|line| line.quantity = (line.quantity + 1).min(product.stock));
                self.items[idx] = next;
            }
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            }),
        }
        true
    }

    /// Drop the line for `product_id`. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.items.retain(|item| &item.product.id != product_id);
    }

    /// Set a line's quantity (zero removes it, over-stock requests clamp).
    pub fn update_quantity(&mut self, product_id: &ProductId, new_quantity: u32) {
        self.items = pricing::update_cart_item_quantity(&self.items, product_id, new_quantity);
    }

    pub fn apply_coupon(&mut self, coupon: Coupon) {
        self.selected_coupon = Some(coupon);
    }

    pub fn clear_coupon(&mut self) {
        self.selected_coupon = None;
    }

    /// Tier rate currently earned by the line for `product_id` (zero if absent).
    pub fn applied_discount_rate(&self, product_id: &ProductId) -> Decimal {
        self.line(product_id)
            .map_or(Decimal::ZERO, pricing::max_applicable_discount_rate)
    }

    pub fn totals(&self) -> CartTotals {
        pricing::cart_totals(&self.items, self.selected_coupon.as_ref())
    }
}
