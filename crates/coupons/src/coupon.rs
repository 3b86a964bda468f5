use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a coupon's `discount_value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Flat currency amount taken off the total.
    Amount,
    /// Whole-number percent taken off the total (`10` = 10%).
    Percentage,
    /// Any other type found in stored data. Applying it leaves the total unchanged.
    #[serde(other)]
    Unknown,
}

/// A named, uniquely-coded discount applied once to a cart total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub name: String,
    pub code: String,
    pub discount_type: DiscountType,
    #[serde(with = "shopcart_core::money::json_number")]
    pub discount_value: Decimal,
}

impl Coupon {
    pub fn amount(name: impl Into<String>, code: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            discount_type: DiscountType::Amount,
            discount_value: value,
        }
    }

    pub fn percentage(name: impl Into<String>, code: impl Into<String>, percent: Decimal) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            discount_type: DiscountType::Percentage,
            discount_value: percent,
        }
    }

    /// Short label for the coupon value: `5000원` or `10%`.
    pub fn value_label(&self) -> String {
        let value = self.discount_value.normalize();
        match self.discount_type {
            DiscountType::Amount => format!("{value}원"),
            DiscountType::Percentage => format!("{value}%"),
            DiscountType::Unknown => value.to_string(),
        }
    }
}

impl core::fmt::Display for Coupon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.value_label())
    }
}
