//! Catalog service errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog responded with status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("malformed catalog response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("product {0} not found")]
    NotFound(String),
}
