//! Organimo
//!
//! Cart aggregation for the Organimo storefront: line items keyed by sku,
//! decimal subtotals, the session that owns the cart, and the catalog and
//! checkout records exchanged with the backend.

pub mod cart;
pub mod checkout;
pub mod endpoints;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod session;
pub mod views;
