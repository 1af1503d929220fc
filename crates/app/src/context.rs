//! App Context

use std::sync::Arc;

use reqwest::Client;
use thiserror::Error;

use crate::{
    catalog::{CatalogService, HttpCatalogService},
    checkout::{CheckoutService, HttpCheckoutService},
    config::BackendConfig,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    /// Build application context from backend settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn from_config(config: &BackendConfig) -> Result<Self, AppInitError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(AppInitError::HttpClient)?;

        let endpoints = config.endpoints();

        Ok(Self {
            catalog: Arc::new(HttpCatalogService::new(endpoints.clone(), http.clone())),
            checkout: Arc::new(HttpCheckoutService::new(endpoints, http)),
        })
    }
}
