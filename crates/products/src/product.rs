use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopcart_core::{Entity, ProductId};

/// Quantity-tiered discount: buying at least `quantity` units earns `rate` off the unit price.
///
/// `rate` is a fraction (`0.1` = 10%). Values are not range-checked; pricing treats a
/// rate outside `[0, 1)` as a caller contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub quantity: u32,
    #[serde(with = "shopcart_core::money::json_number")]
    pub rate: Decimal,
}

impl Discount {
    pub fn new(quantity: u32, rate: Decimal) -> Self {
        Self { quantity, rate }
    }

    /// Rate expressed as a whole-number percentage (`0.1` -> `10`).
    pub fn percent(&self) -> Decimal {
        (self.rate * Decimal::ONE_HUNDRED).normalize()
    }
}

impl core::fmt::Display for Discount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}+ units: {}% off", self.quantity, self.percent())
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in currency units.
    #[serde(with = "shopcart_core::money::json_number")]
    pub price: Decimal,
    pub stock: u32,
    /// Discount tiers, in the order the admin added them.
    #[serde(default)]
    pub discounts: Vec<Discount>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            discounts: Vec::new(),
        }
    }

    /// Builder-style helper for attaching tiers.
    pub fn with_discounts(mut self, discounts: impl IntoIterator<Item = Discount>) -> Self {
        self.discounts.extend(discounts);
        self
    }

    /// Copy of this product with `discount` appended to its tiers.
    pub fn with_added_discount(&self, discount: Discount) -> Self {
        let mut next = self.clone();
        next.discounts.push(discount);
        next
    }

    /// Copy of this product without the tier at `index`, or `None` if there is no such tier.
    pub fn without_discount(&self, index: usize) -> Option<Self> {
        if index >= self.discounts.len() {
            return None;
        }
        let mut next = self.clone();
        next.discounts.remove(index);
        Some(next)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Admin input for a product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(with = "shopcart_core::money::json_number")]
    pub price: Decimal,
    pub stock: u32,
    #[serde(default)]
    pub discounts: Vec<Discount>,
}

impl NewProduct {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            discounts: self.discounts,
        }
    }
}
