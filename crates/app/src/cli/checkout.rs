use std::io;

use clap::Args;
use organimo::{cart::PricePolicy, items::NewLineItem, session::Session};
use organimo_app::{render, storefront::Storefront};
use tracing::info;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Slugs of the products to add, one unit per occurrence
    #[arg(required = true)]
    slugs: Vec<String>,
}

pub(crate) async fn run(
    storefront: &Storefront,
    policy: PricePolicy,
    args: CheckoutArgs,
) -> Result<(), String> {
    let mut session = Session::new(policy);
    let mut out = io::stdout().lock();

    for slug in args.slugs {
        let ticket = storefront.show_product(slug);

        let Some(page) = storefront.load_product(&ticket).await else {
            continue;
        };

        let Some(product) = page.product() else {
            render::write_product(&mut out, &page, session.cart().currency())
                .map_err(|error| format!("failed to render product: {error}"))?;
            continue;
        };

        let item = NewLineItem::try_from(product)
            .map_err(|error| format!("cannot add {}: {error}", product.slug))?;

        let outcome = session.add_item(item);
        info!(slug = %product.slug, ?outcome, "added to cart");
    }

    render::write_cart(&mut out, session.cart())
        .map_err(|error| format!("failed to render cart: {error}"))?;

    let outcome = storefront.checkout(session.cart()).await;

    render::write_outcome(&mut out, &outcome, session.cart().currency())
        .map_err(|error| format!("failed to render checkout: {error}"))
}
