//! Pricing rules.
//!
//! Order of operations is fixed: quantity-tier discounts apply per line first, then
//! the selected coupon (if any) applies once to the tier-discounted grand total.
//! Every function here is total: nothing returns an error and nothing panics.
//! Money arithmetic saturates at `Decimal::MAX`/`Decimal::MIN` instead of
//! overflowing. Out-of-range rates are accepted and yield whatever the arithmetic
//! yields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopcart_core::{ProductId, ValueObject};
use shopcart_coupons::{Coupon, DiscountType};

use crate::cart::CartItem;

/// Cart-level figures shown in the order summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of `quantity * unit price`, no discounts.
    #[serde(with = "shopcart_core::money::json_number")]
    pub total_before_discount: Decimal,
    /// Sum of line totals with tier discounts, before the coupon.
    #[serde(with = "shopcart_core::money::json_number")]
    pub total_after_item_discount: Decimal,
    /// Final amount payable.
    #[serde(with = "shopcart_core::money::json_number")]
    pub total_after_discount: Decimal,
    /// `total_before_discount - total_after_discount`.
    #[serde(with = "shopcart_core::money::json_number")]
    pub total_discount: Decimal,
}

/// Highest tier rate the line qualifies for, or zero if no tier threshold is met.
///
/// The largest rate wins regardless of tier order or threshold proximity.
pub fn max_applicable_discount_rate(item: &CartItem) -> Decimal {
    item.product
        .discounts
        .iter()
        .filter(|tier| tier.quantity <= item.quantity)
        .fold(Decimal::ZERO, |max, tier| max.max(tier.rate))
}

/// `price * (1 - rate)`. The rate is not clamped.
pub fn discounted_price(price: Decimal, rate: Decimal) -> Decimal {
    price.saturating_mul(Decimal::ONE.saturating_sub(rate))
}

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Line total with the best applicable tier discount.
pub fn item_total(item: &CartItem) -> Decimal {
    let rate = max_applicable_discount_rate(item);
    Decimal::from(item.quantity).saturating_mul(discounted_price(item.product.price, rate))
}

/// Apply a coupon to an amount.
///
/// Amount coupons floor at zero; percentage coupons take `value / 100` off;
/// unknown coupon types leave the amount unchanged.
pub fn coupon_applied_total(amount: Decimal, coupon: &Coupon) -> Decimal {
    match coupon.discount_type {
        DiscountType::Amount => amount
            .saturating_sub(coupon.discount_value)
            .max(Decimal::ZERO),
        DiscountType::Percentage => {
            discounted_price(amount, coupon.discount_value / Decimal::ONE_HUNDRED)
        }
        DiscountType::Unknown => amount,
    }
}

/// Order summary for a cart and an optional selected coupon.
pub fn cart_totals(cart: &[CartItem], selected_coupon: Option<&Coupon>) -> CartTotals {
    let total_before_discount = saturating_sum(
        cart.iter()
            .map(|item| Decimal::from(item.quantity).saturating_mul(item.product.price)),
    );

    let total_after_item_discount = saturating_sum(cart.iter().map(item_total));

    let total_after_discount = match selected_coupon {
        Some(coupon) => coupon_applied_total(total_after_item_discount, coupon),
        None => total_after_item_discount,
    };

    CartTotals {
        total_before_discount,
        total_after_item_discount,
        total_after_discount,
        total_discount: total_before_discount.saturating_sub(total_after_discount),
    }
}

/// New cart with one line's quantity changed.
///
/// A quantity of zero removes the line. Any other quantity is clamped to the line's
/// product stock. Lines for other products pass through unchanged, as does the whole
/// cart when no line matches.
pub fn update_cart_item_quantity(
    cart: &[CartItem],
    product_id: &ProductId,
    new_quantity: u32,
) -> Vec<CartItem> {
    if new_quantity == 0 {
        return cart
            .iter()
            .filter(|item| &item.product.id != product_id)
            .cloned()
            .collect();
    }

    cart.iter()
        .map(|item| {
            if &item.product.id == product_id {
                item.with_change(|line| line.quantity = new_quantity.min(line.product.stock))
            } else {
                item.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shopcart_products::{Discount, Product};

    fn rate(percent: i64) -> Decimal {
        Decimal::new(percent, 2)
    }

    fn product(id: &str, price: i64, stock: u32, tiers: &[(u32, i64)]) -> Product {
        Product::new(id, format!("Product {id}"), Decimal::from(price), stock)
            .with_discounts(tiers.iter().map(|&(q, r)| Discount::new(q, rate(r))))
    }

    fn line(product: Product, quantity: u32) -> CartItem {
        CartItem { product, quantity }
    }

    #[test]
    fn item_total_applies_qualifying_tier() {
        let item = line(product("p1", 10_000, 20, &[(10, 10)]), 10);
        assert_eq!(item_total(&item), Decimal::from(90_000));
    }

    #[test]
    fn item_total_without_qualifying_tier_is_full_price() {
        let item = line(product("p1", 10_000, 20, &[(10, 10)]), 9);
        assert_eq!(max_applicable_discount_rate(&item), Decimal::ZERO);
        assert_eq!(item_total(&item), Decimal::from(90_000));
    }

    #[test]
    fn max_rate_wins_regardless_of_tier_order() {
        // The larger threshold carries the smaller rate.
        let item = line(product("p1", 1_000, 50, &[(5, 30), (20, 10)]), 25);
        assert_eq!(max_applicable_discount_rate(&item), rate(30));
    }

    #[test]
    fn discounted_price_edges() {
        let p = Decimal::from(12_345);
        assert_eq!(discounted_price(p, Decimal::ZERO), p);
        assert_eq!(discounted_price(p, Decimal::ONE), Decimal::ZERO);
        // Not clamped.
        assert_eq!(discounted_price(p, Decimal::from(2)), -p);
    }

    #[test]
    fn percentage_coupon_applies_to_item_discounted_total() {
        let cart = vec![line(product("p1", 10_000, 20, &[(10, 10)]), 10)];
        let coupon = Coupon::percentage("10% 할인", "PERCENT10", Decimal::from(10));

        let totals = cart_totals(&cart, Some(&coupon));
        assert_eq!(totals.total_before_discount, Decimal::from(100_000));
        assert_eq!(totals.total_after_item_discount, Decimal::from(90_000));
        assert_eq!(totals.total_after_discount, Decimal::from(81_000));
        assert_eq!(totals.total_discount, Decimal::from(19_000));
    }

    #[test]
    fn amount_coupon_floors_at_zero() {
        let coupon = Coupon::amount("big", "BIG", Decimal::from(100_000));
        assert_eq!(
            coupon_applied_total(Decimal::from(50_000), &coupon),
            Decimal::ZERO
        );
    }

    #[test]
    fn unknown_coupon_type_is_pass_through() {
        let coupon = Coupon {
            name: "odd".to_string(),
            code: "ODD".to_string(),
            discount_type: DiscountType::Unknown,
            discount_value: Decimal::from(500),
        };
        assert_eq!(
            coupon_applied_total(Decimal::from(7_000), &coupon),
            Decimal::from(7_000)
        );
    }

    #[test]
    fn totals_without_coupon_stop_at_item_discounts() {
        let cart = vec![
            line(product("p1", 10_000, 20, &[(10, 10)]), 10),
            line(product("p2", 20_000, 20, &[(10, 15)]), 1),
        ];
        let totals = cart_totals(&cart, None);
        assert_eq!(totals.total_before_discount, Decimal::from(120_000));
        assert_eq!(totals.total_after_discount, Decimal::from(110_000));
        assert_eq!(totals.total_after_discount, totals.total_after_item_discount);
        assert_eq!(totals.total_discount, Decimal::from(10_000));
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let coupon = Coupon::amount("a", "A", Decimal::from(5_000));
        assert_eq!(cart_totals(&[], Some(&coupon)), CartTotals::default());
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let huge = Decimal::from_i128_with_scale(10i128.pow(28), 0);
        let pricey = Product::new("p1", "Yacht", huge, 100)
            .with_discounts([Discount::new(5, rate(10))]);
        let cart = vec![line(pricey.clone(), 10), line(pricey, 10)];

        let totals = cart_totals(&cart, None);
        assert_eq!(totals.total_before_discount, Decimal::MAX);
        assert_eq!(totals.total_after_item_discount, Decimal::MAX);
        assert_eq!(totals.total_discount, Decimal::ZERO);

        let coupon = Coupon::amount("a", "A", Decimal::MIN);
        assert_eq!(coupon_applied_total(Decimal::MAX, &coupon), Decimal::MAX);
        assert_eq!(
            discounted_price(Decimal::MAX, Decimal::from(-1)),
            Decimal::MAX
        );
    }

    #[test]
    fn update_quantity_clamps_to_stock() {
        let cart = vec![line(product("p1", 10_000, 20, &[]), 1)];
        let next = update_cart_item_quantity(&cart, &ProductId::new("p1"), 25);
        assert_eq!(next[0].quantity, 20);
        // Input untouched.
        assert_eq!(cart[0].quantity, 1);
    }

    #[test]
    fn update_quantity_zero_removes_line() {
        let cart = vec![
            line(product("p1", 10_000, 20, &[]), 1),
            line(product("p2", 20_000, 20, &[]), 3),
        ];
        let next = update_cart_item_quantity(&cart, &ProductId::new("p1"), 0);
        assert_eq!(next, vec![cart[1].clone()]);
    }

    #[test]
    fn update_quantity_for_absent_id_is_identity() {
        let cart = vec![line(product("p1", 10_000, 20, &[]), 2)];
        assert_eq!(
            update_cart_item_quantity(&cart, &ProductId::new("p9"), 5),
            cart
        );
        assert_eq!(
            update_cart_item_quantity(&cart, &ProductId::new("p9"), 0),
            cart
        );
    }

    fn arb_tiers() -> impl Strategy<Value = Vec<(u32, i64)>> {
        prop::collection::vec((1u32..50, 0i64..100), 0..6)
    }

    fn arb_cart() -> impl Strategy<Value = Vec<CartItem>> {
        prop::collection::vec((1i64..1_000_000, 1u32..100, arb_tiers()), 0..8).prop_map(
            |lines| {
                lines
                    .into_iter()
                    .enumerate()
                    .map(|(idx, (price, stock, tiers))| {
                        let p = product(&format!("p{idx}"), price, stock, &tiers);
                        let quantity = (stock / 2).max(1);
                        line(p, quantity)
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the chosen rate is the max over qualifying tiers, else zero.
        #[test]
        fn max_rate_is_max_over_qualifying_tiers(tiers in arb_tiers(), quantity in 0u32..60) {
            let item = line(product("p1", 1_000, 100, &tiers), quantity);
            let expected = tiers
                .iter()
                .filter(|(q, _)| *q <= quantity)
                .map(|(_, r)| rate(*r))
                .max()
                .unwrap_or(Decimal::ZERO);
            prop_assert_eq!(max_applicable_discount_rate(&item), expected);
        }

        /// Property: amount coupons never drive a total negative.
        #[test]
        fn amount_coupon_is_never_negative(amount in 0i64..10_000_000, value in 0i64..10_000_000) {
            let coupon = Coupon::amount("c", "C", Decimal::from(value));
            let result = coupon_applied_total(Decimal::from(amount), &coupon);
            prop_assert!(result >= Decimal::ZERO);
            prop_assert!(result <= Decimal::from(amount));
        }

        /// Property: total discount is exactly before minus after.
        #[test]
        fn total_discount_is_before_minus_after(cart in arb_cart(), percent in 0i64..100, with_coupon in any::<bool>()) {
            let coupon = Coupon::percentage("p", "P", Decimal::from(percent));
            let totals = cart_totals(&cart, with_coupon.then_some(&coupon));
            prop_assert_eq!(
                totals.total_discount,
                totals.total_before_discount - totals.total_after_discount
            );
            prop_assert!(totals.total_after_item_discount <= totals.total_before_discount);
        }

        /// Property: quantity zero removes exactly the targeted line.
        #[test]
        fn zero_quantity_removes_only_target(cart in arb_cart(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!cart.is_empty());
            let target = cart[pick.index(cart.len())].product.id.clone();
            let next = update_cart_item_quantity(&cart, &target, 0);

            let expected: Vec<CartItem> = cart
                .iter()
                .filter(|item| item.product.id != target)
                .cloned()
                .collect();
            prop_assert_eq!(next, expected);
        }

        /// Property: requested quantities above stock clamp to stock.
        #[test]
        fn over_stock_request_clamps(cart in arb_cart(), pick in any::<prop::sample::Index>(), extra in 1u32..1_000) {
            prop_assume!(!cart.is_empty());
            let idx = pick.index(cart.len());
            let target = cart[idx].product.id.clone();
            let stock = cart[idx].product.stock;

            let next = update_cart_item_quantity(&cart, &target, stock + extra);
            prop_assert_eq!(next.len(), cart.len());
            prop_assert_eq!(next[idx].quantity, stock);
        }
    }
}
