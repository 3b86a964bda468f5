//! JSON shape for money and rates.
//!
//! Stored catalogs and coupon lists carry prices and rates as plain JSON numbers
//! (`"price": 10000`, `"rate": 0.1`). Use with `#[serde(with = "shopcart_core::money::json_number")]`.

/// Whole values are written as integers, everything else as a float. Reading
/// accepts numbers and decimal strings.
pub mod json_number {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = value.normalize();
        if value.scale() == 0 {
            if let Some(whole) = value.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }
        rust_decimal::serde::float::serialize(&value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Decimal as Deserialize>::deserialize(deserializer)
    }
}
