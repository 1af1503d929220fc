//! Browser client for the catalog and checkout services.
//!
//! Every call resolves to something the page can show: listings fall back to
//! empty, products to [`ProductPage::NotFound`] or [`ProductPage::Unavailable`],
//! and checkout to [`CheckoutOutcome::Acknowledged`].

use leptos::logging::warn;
use organimo::{
    checkout::{CheckoutOutcome, CheckoutReceipt, CheckoutRequest},
    endpoints::Endpoints,
    products::{CategoryFilter, ProductDetail, ProductPage, ProductSummary},
};
use reqwest::{Client, StatusCode};

/// Backend base URL baked in at build time; unset or empty means same-origin.
const BACKEND_URL: Option<&str> = option_env!("ORGANIMO_BACKEND_URL");

enum FetchError {
    NotFound,
    Failed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        Self::Failed(error.to_string())
    }
}

/// Handle to the storefront backend.
#[derive(Clone, Debug)]
pub struct Api {
    endpoints: Endpoints,
    http: Client,
}

impl Api {
    /// Client for the configured backend, resolved against the page origin.
    pub fn from_env() -> Self {
        Self::new(Endpoints::new(BACKEND_URL.unwrap_or_default()).or_origin(&page_origin()))
    }

    /// Client for `endpoints`.
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            http: Client::new(),
        }
    }

    /// Product listing for `filter`; empty when the catalog cannot be read.
    pub async fn products(&self, filter: &CategoryFilter) -> Vec<ProductSummary> {
        match self.fetch_products(filter).await {
            Ok(products) => products,
            Err(FetchError::NotFound) => Vec::new(),
            Err(FetchError::Failed(error)) => {
                warn!("product listing ({filter}) failed: {error}");
                Vec::new()
            }
        }
    }

    /// Product page for `slug`.
    pub async fn product(&self, slug: &str) -> ProductPage {
        let slug = slug.to_string();

        match self.fetch_product(&slug).await {
            Ok(product) => ProductPage::Loaded(product),
            Err(FetchError::NotFound) => ProductPage::NotFound { slug },
            Err(FetchError::Failed(error)) => {
                warn!("product {slug} failed: {error}");
                ProductPage::Unavailable { slug }
            }
        }
    }

    /// Submit a cart snapshot; failures are acknowledged rather than surfaced.
    pub async fn checkout(&self, request: &CheckoutRequest) -> CheckoutOutcome {
        match self.submit_checkout(request).await {
            Ok(receipt) => CheckoutOutcome::Confirmed(receipt),
            Err(FetchError::NotFound | FetchError::Failed(_)) => {
                warn!("checkout of {} lines was not confirmed", request.items.len());
                CheckoutOutcome::Acknowledged
            }
        }
    }

    async fn fetch_products(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Vec<ProductSummary>, FetchError> {
        let mut request = self.http.get(self.endpoints.products());

        if let Some(category) = filter.as_param() {
            request = request.query(&[("category", category)]);
        }

        Ok(request.send().await?.error_for_status()?.json().await?)
    }

    async fn fetch_product(&self, slug: &str) -> Result<ProductDetail, FetchError> {
        let url = self.endpoints.product(slug).ok_or(FetchError::NotFound)?;
        let response = self.http.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }

        Ok(response.error_for_status()?.json().await?)
    }

    async fn submit_checkout(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutReceipt, FetchError> {
        let response = self
            .http
            .post(self.endpoints.checkout())
            .json(request)
            .send()
            .await?;

        Ok(response.error_for_status()?.json().await?)
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
