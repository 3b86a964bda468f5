use shopcart_cart::{CartState, CartTotals};
use shopcart_core::{DomainError, DomainResult, ProductId};
use shopcart_coupons::{Coupon, CouponBook};
use shopcart_products::{Discount, NewProduct, Product, ProductCatalog};
use shopcart_storage::{KeyValueStore, PersistedState};

/// Storage key for the product list.
pub const PRODUCTS_KEY: &str = "products";
/// Storage key for the coupon list.
pub const COUPONS_KEY: &str = "coupons";

/// One user session: persisted catalog + coupons, and an in-memory cart.
///
/// Cart lines hold product snapshots taken when they were added; later admin edits
/// to a product do not rewrite existing lines.
#[derive(Debug)]
pub struct Shop<S> {
    products: PersistedState<Vec<Product>, S>,
    coupons: PersistedState<Vec<Coupon>, S>,
    cart: CartState,
}

impl<S> Shop<S>
where
    S: KeyValueStore + Clone,
{
    /// Open a session, loading persisted products/coupons or falling back to the given ones.
    pub fn open(store: S, initial_products: Vec<Product>, initial_coupons: Vec<Coupon>) -> Self {
        let products = PersistedState::new(store.clone(), PRODUCTS_KEY, initial_products);
        let coupons = PersistedState::new(store, COUPONS_KEY, initial_coupons);
        tracing::info!(
            products = products.value().len(),
            coupons = coupons.value().len(),
            "shop session opened"
        );
        Self {
            products,
            coupons,
            cart: CartState::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        self.products.value()
    }

    pub fn coupons(&self) -> &[Coupon] {
        self.coupons.value()
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|p| &p.id == id)
    }

    fn catalog(&self) -> ProductCatalog {
        ProductCatalog::from_products(self.products.value().clone())
    }

    fn coupon_book(&self) -> CouponBook {
        CouponBook::from_coupons(self.coupons.value().clone())
    }

    // Admin operations.

    pub fn add_product(&mut self, draft: NewProduct) -> Product {
        let mut catalog = self.catalog();
        let product = catalog.add_product(draft);
        self.products.set(catalog.into_products());
        tracing::info!(product_id = %product.id, name = %product.name, "product added");
        product
    }

    pub fn update_product(&mut self, product: Product) -> DomainResult<()> {
        let mut catalog = self.catalog();
        let id = product.id.clone();
        catalog.update_product(product)?;
        self.products.set(catalog.into_products());
        tracing::info!(product_id = %id, "product updated");
        Ok(())
    }

    pub fn add_discount(&mut self, id: &ProductId, discount: Discount) -> DomainResult<Product> {
        let mut catalog = self.catalog();
        let updated = catalog.add_discount(id, discount)?;
        self.products.set(catalog.into_products());
        Ok(updated)
    }

    pub fn remove_discount(&mut self, id: &ProductId, index: usize) -> DomainResult<Product> {
        let mut catalog = self.catalog();
        let updated = catalog.remove_discount(id, index)?;
        self.products.set(catalog.into_products());
        Ok(updated)
    }

    pub fn add_coupon(&mut self, coupon: Coupon) -> DomainResult<()> {
        let mut book = self.coupon_book();
        let code = coupon.code.clone();
        book.add_coupon(coupon)?;
        self.coupons.set(book.into_coupons());
        tracing::info!(code = %code, "coupon added");
        Ok(())
    }

    /// Forget persisted products/coupons and return to the initial data.
    pub fn reset(&mut self) {
        self.products.remove();
        self.coupons.remove();
        self.cart = CartState::new();
    }

    // Cart operations.

    /// Add one unit of a catalog product. `Ok(false)` when it is out of remaining stock.
    pub fn add_to_cart(&mut self, id: &ProductId) -> DomainResult<bool> {
        let product = self
            .product(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        Ok(self.cart.add_to_cart(&product))
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove_from_cart(id);
    }

    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        self.cart.update_quantity(id, quantity);
    }

    /// Select the coupon with `code` for the cart.
    pub fn apply_coupon(&mut self, code: &str) -> DomainResult<()> {
        let coupon = self
            .coupons()
            .iter()
            .find(|c| c.code == code)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("coupon {code}")))?;
        self.cart.apply_coupon(coupon);
        Ok(())
    }

    pub fn clear_coupon(&mut self) {
        self.cart.clear_coupon();
    }

    /// Units of a catalog product still available to add.
    pub fn remaining_stock(&self, id: &ProductId) -> Option<u32> {
        self.product(id).map(|p| self.cart.remaining_stock(p))
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }
}
