//! Initial catalog and coupons used when nothing has been persisted yet.

use rust_decimal::Decimal;

use shopcart_coupons::Coupon;
use shopcart_products::{Discount, Product};

fn rate(percent: i64) -> Decimal {
    Decimal::new(percent, 2)
}

pub fn initial_products() -> Vec<Product> {
    vec![
        Product::new("p1", "상품1", Decimal::from(10_000), 20)
            .with_discounts([Discount::new(10, rate(10)), Discount::new(20, rate(20))]),
        Product::new("p2", "상품2", Decimal::from(20_000), 20)
            .with_discounts([Discount::new(10, rate(15))]),
        Product::new("p3", "상품3", Decimal::from(30_000), 20)
            .with_discounts([Discount::new(10, rate(20)), Discount::new(30, rate(25))]),
    ]
}

pub fn initial_coupons() -> Vec<Coupon> {
    vec![
        Coupon::amount("5000원 할인 쿠폰", "AMOUNT5000", Decimal::from(5_000)),
        Coupon::percentage("10% 할인 쿠폰", "PERCENT10", Decimal::from(10)),
    ]
}
