//! The storefront keeps working when its backend is unreachable or unset.
//!
//! - The listing is empty.
//! - The product page reports the product as unavailable.
//! - Checkout is acknowledged and the cart is untouched.

use organimo::prelude::*;
use organimo_app::{config::BackendConfig, context::AppContext, storefront::Storefront};
use rust_decimal_macros::dec;
use testresult::TestResult;

fn storefront(backend_url: &str) -> TestResult<Storefront> {
    let context = AppContext::from_config(&BackendConfig {
        backend_url: backend_url.to_string(),
        request_timeout_secs: 2,
    })?;

    Ok(Storefront::new(context))
}

fn cart() -> TestResult<Cart> {
    let mut cart = Cart::default();

    cart.add_item(NewLineItem::new(Sku::new("A")?, "Gel", dec!(10))?);
    cart.add_item(NewLineItem::new(Sku::new("B")?, "Capsules", dec!(5))?);

    Ok(cart)
}

#[tokio::test]
async fn unreachable_backend_degrades_every_view() -> TestResult {
    let storefront = storefront("http://127.0.0.1:1")?;

    let listing = storefront.show_listing(CategoryFilter::all());
    let products = storefront.load_listing(&listing).await.ok_or("listing dropped")?;

    assert!(products.is_empty());

    let product = storefront.show_product("sea-moss-gel");
    let page = storefront.load_product(&product).await.ok_or("product dropped")?;

    assert_eq!(
        page,
        ProductPage::Unavailable {
            slug: "sea-moss-gel".to_string()
        }
    );

    let cart = cart()?;
    let before = cart.clone();
    let outcome = storefront.checkout(&cart).await;

    assert_eq!(outcome, CheckoutOutcome::Acknowledged);
    assert_eq!(outcome.message(cart.currency()), "Checkout initialized.");
    assert_eq!(cart, before);

    Ok(())
}

#[tokio::test]
async fn same_origin_base_without_a_page_is_acknowledged() -> TestResult {
    let storefront = storefront("")?;
    let cart = cart()?;

    let outcome = storefront.checkout(&cart).await;

    assert_eq!(outcome, CheckoutOutcome::Acknowledged);
    assert_eq!(cart.subtotal(), dec!(15));

    Ok(())
}
