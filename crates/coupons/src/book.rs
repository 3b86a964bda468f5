//! Coupon book: the admin-side list of active coupons.

use shopcart_core::{DomainError, DomainResult};

use crate::coupon::Coupon;

/// Ordered coupon list; a code identifies at most one coupon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from existing coupons.
    ///
    /// Later coupons reusing a code are dropped so the book stays unique by code.
    pub fn from_coupons(coupons: impl IntoIterator<Item = Coupon>) -> Self {
        let mut book = Self::new();
        for coupon in coupons {
            if book.find_by_code(&coupon.code).is_some() {
                tracing::warn!(code = %coupon.code, "dropping duplicate coupon code");
                continue;
            }
            book.coupons.push(coupon);
        }
        book
    }

    /// Add a coupon. Fails with `Conflict` if its code is already taken.
    pub fn add_coupon(&mut self, coupon: Coupon) -> DomainResult<()> {
        if self.find_by_code(&coupon.code).is_some() {
            return Err(DomainError::conflict(format!(
                "coupon code {} already exists",
                coupon.code
            )));
        }
        self.coupons.push(coupon);
        Ok(())
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.code == code)
    }

    /// Coupon at a list position (the selection widget addresses coupons by index).
    pub fn get(&self, index: usize) -> Option<&Coupon> {
        self.coupons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter()
    }

    pub fn as_slice(&self) -> &[Coupon] {
        &self.coupons
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }

    pub fn into_coupons(self) -> Vec<Coupon> {
        self.coupons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn add_coupon_appends_in_order() {
        let mut book = CouponBook::new();
        book.add_coupon(Coupon::amount("5000원 할인", "AMOUNT5000", Decimal::from(5_000)))
            .unwrap();
        book.add_coupon(Coupon::percentage("10% 할인", "PERCENT10", Decimal::from(10)))
            .unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.get(1).unwrap().code, "PERCENT10");
        assert_eq!(
            book.find_by_code("AMOUNT5000").unwrap().discount_value,
            Decimal::from(5_000)
        );
    }

    #[test]
    fn duplicate_code_is_a_conflict() {
        let mut book = CouponBook::new();
        book.add_coupon(Coupon::amount("a", "DUP", Decimal::ONE)).unwrap();

        let err = book
            .add_coupon(Coupon::percentage("b", "DUP", Decimal::TEN))
            .unwrap_err();
        match err {
            DomainError::Conflict(msg) if msg.contains("DUP") => {}
            _ => panic!("Expected Conflict for duplicate coupon code"),
        }
        assert_eq!(book.len(), 1);
        assert_eq!(book.find_by_code("DUP").unwrap().name, "a");
    }

    #[test]
    fn from_coupons_keeps_first_of_duplicate_codes() {
        let book = CouponBook::from_coupons([
            Coupon::amount("first", "X", Decimal::ONE),
            Coupon::amount("second", "X", Decimal::TEN),
            Coupon::percentage("third", "Y", Decimal::TEN),
        ]);
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(0).unwrap().name, "first");
        assert_eq!(book.get(1).unwrap().code, "Y");
    }
}
