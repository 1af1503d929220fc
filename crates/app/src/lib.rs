//! Storefront client: HTTP catalog and checkout services, the storefront's
//! error policy, and terminal rendering for the `organimo` CLI.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod context;
pub mod observability;
pub mod render;
pub mod storefront;

#[cfg(test)]
mod test;
