use std::io;

use clap::Args;
use organimo_app::{render, storefront::Storefront};
use rusty_money::iso::USD;

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product slug, e.g. sea-moss-gel
    slug: String,
}

pub(crate) async fn run(storefront: &Storefront, args: ProductArgs) -> Result<(), String> {
    let ticket = storefront.show_product(args.slug);

    let Some(page) = storefront.load_product(&ticket).await else {
        return Ok(());
    };

    render::write_product(io::stdout().lock(), &page, USD)
        .map_err(|error| format!("failed to render product: {error}"))
}
