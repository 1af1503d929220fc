//! Checkout service errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("checkout request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("checkout responded with status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("malformed checkout response: {0}")]
    Body(#[source] reqwest::Error),
}
