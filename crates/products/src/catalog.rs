//! Product catalog: the admin-side list of products.
//!
//! Every operation replaces whole `Product` values; nothing is patched in place.

use shopcart_core::{DomainError, DomainResult, Entity, ProductId, position_by_id};

use crate::product::{Discount, NewProduct, Product};

/// Ordered product list, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from existing products.
    ///
    /// Later duplicates of an id are dropped so the catalog stays unique by id.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            if catalog.products.iter().any(|p| p.is_same_entity(&product)) {
                tracing::warn!(product_id = %product.id, "dropping duplicate product id");
                continue;
            }
            catalog.products.push(product);
        }
        catalog
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        position_by_id(&self.products, id).map(|idx| &self.products[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Register a new product under a freshly generated id.
    pub fn add_product(&mut self, draft: NewProduct) -> Product {
        let product = draft.into_product(ProductId::generate());
        self.products.push(product.clone());
        product
    }

    /// Replace the product that has the same id.
    pub fn update_product(&mut self, product: Product) -> DomainResult<()> {
        let idx = position_by_id(&self.products, product.id())
            .ok_or_else(|| DomainError::not_found(format!("product {}", product.id)))?;
        self.products[idx] = product;
        Ok(())
    }

    /// Append a discount tier to a product.
    pub fn add_discount(&mut self, id: &ProductId, discount: Discount) -> DomainResult<Product> {
        let current = self
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let next = current.with_added_discount(discount);
        self.update_product(next.clone())?;
        Ok(next)
    }

    /// Remove the discount tier at `index` from a product.
    pub fn remove_discount(&mut self, id: &ProductId, index: usize) -> DomainResult<Product> {
        let current = self
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let next = current.without_discount(index).ok_or_else(|| {
            DomainError::validation(format!("product {id} has no discount tier at index {index}"))
        })?;
        self.update_product(next.clone())?;
        Ok(next)
    }
}
