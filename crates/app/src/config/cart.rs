//! Cart Config

use clap::{Args, ValueEnum};
use organimo::cart::PricePolicy;

/// Price kept when a sku already in the cart is added again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PricePolicyArg {
    /// Keep the price from the first add.
    #[default]
    FirstSeen,

    /// Replace the price with the one from the latest add.
    Latest,
}

impl From<PricePolicyArg> for PricePolicy {
    fn from(arg: PricePolicyArg) -> Self {
        match arg {
            PricePolicyArg::FirstSeen => Self::FirstSeen,
            PricePolicyArg::Latest => Self::Latest,
        }
    }
}

/// Cart settings.
#[derive(Debug, Args)]
pub struct CartConfig {
    /// Price policy for repeated skus (first-seen, latest)
    #[arg(
        long,
        env = "ORGANIMO_PRICE_POLICY",
        value_enum,
        default_value_t = PricePolicyArg::FirstSeen
    )]
    pub price_policy: PricePolicyArg,
}

impl CartConfig {
    #[must_use]
    pub fn policy(&self) -> PricePolicy {
        self.price_policy.into()
    }
}
