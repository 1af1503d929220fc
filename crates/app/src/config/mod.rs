//! Client configuration

use clap::Args;

pub mod backend;
pub mod cart;
pub mod logging;

pub use backend::BackendConfig;
pub use cart::{CartConfig, PricePolicyArg};
pub use logging::{LogFormat, LoggingConfig};

/// Settings shared by every `organimo` subcommand.
#[derive(Debug, Args)]
pub struct ClientConfig {
    /// Storefront backend settings.
    #[command(flatten)]
    pub backend: BackendConfig,

    /// Cart behaviour.
    #[command(flatten)]
    pub cart: CartConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
