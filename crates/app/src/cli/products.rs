use std::io;

use clap::Args;
use organimo::products::CategoryFilter;
use organimo_app::{render, storefront::Storefront};
use rusty_money::iso::USD;

#[derive(Debug, Args)]
pub(crate) struct ProductsArgs {
    /// Category to show (gel, capsules, powder); all when omitted
    #[arg(long, default_value = "")]
    category: String,
}

pub(crate) async fn run(storefront: &Storefront, args: ProductsArgs) -> Result<(), String> {
    let ticket = storefront.show_listing(CategoryFilter::from_param(&args.category));

    let Some(products) = storefront.load_listing(&ticket).await else {
        return Ok(());
    };

    render::write_products(io::stdout().lock(), &products, USD)
        .map_err(|error| format!("failed to render products: {error}"))
}
