use clap::{Parser, Subcommand};
use organimo_app::{
    config::ClientConfig, context::AppContext, observability, storefront::Storefront,
};
use tracing::warn;

mod checkout;
mod product;
mod products;

#[derive(Debug, Parser)]
#[command(name = "organimo", about = "Organimo storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally filtered by category
    Products(products::ProductsArgs),

    /// Show a single product
    Product(product::ProductArgs),

    /// Add products to a cart and check out
    Checkout(checkout::CheckoutArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        if self.config.backend.endpoints().is_same_origin() {
            warn!("no backend URL configured; set --backend-url or ORGANIMO_BACKEND_URL");
        }

        let context = AppContext::from_config(&self.config.backend)
            .map_err(|error| format!("failed to initialise client: {error}"))?;

        let storefront = Storefront::new(context);

        match self.command {
            Commands::Products(args) => products::run(&storefront, args).await,
            Commands::Product(args) => product::run(&storefront, args).await,
            Commands::Checkout(args) => {
                checkout::run(&storefront, self.config.cart.policy(), args).await
            }
        }
    }
}
