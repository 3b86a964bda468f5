use anyhow::Context;
use shopcart_app::{Shop, seed};
use shopcart_core::ProductId;

fn main() -> anyhow::Result<()> {
    shopcart_observability::init();

    let config = shopcart_storage::StorageConfig::from_env().context("reading storage config")?;
    let store = config.open().context("opening storage")?;
    let mut shop = Shop::open(store, seed::initial_products(), seed::initial_coupons());

    let p1 = ProductId::new("p1");
    for _ in 0..10 {
        shop.add_to_cart(&p1)?;
    }
    shop.add_to_cart(&ProductId::new("p3"))?;
    shop.apply_coupon("PERCENT10")?;

    for item in shop.cart().items() {
        tracing::info!(
            product = %item.product.name,
            quantity = item.quantity,
            line_total = %shopcart_cart::item_total(item),
            discount_rate = %shop.cart().applied_discount_rate(&item.product.id),
            "cart line"
        );
    }

    let totals = shop.totals();
    tracing::info!(
        before = %totals.total_before_discount,
        discount = %totals.total_discount,
        payable = %totals.total_after_discount,
        "order summary"
    );

    Ok(())
}
