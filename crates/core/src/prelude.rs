//! Organimo prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddOutcome, Cart, PricePolicy},
    checkout::{CheckoutOutcome, CheckoutReceipt, CheckoutRequest},
    endpoints::Endpoints,
    fixtures::{FeaturedProduct, FixtureError},
    items::{ItemError, LineItem, NewLineItem, Sku},
    pricing::{PricingError, format_amount, format_money, to_money},
    products::{CategoryFilter, ProductDetail, ProductPage, ProductSummary},
    session::{Drawer, Session},
    views::{ViewGuard, ViewTicket},
};
