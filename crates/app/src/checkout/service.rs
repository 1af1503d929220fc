//! Checkout service.

use async_trait::async_trait;
use mockall::automock;
use organimo::{
    checkout::{CheckoutReceipt, CheckoutRequest},
    endpoints::Endpoints,
};
use reqwest::Client;
use tracing::debug;

use crate::checkout::errors::CheckoutError;

/// Checkout backed by the storefront's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCheckoutService {
    endpoints: Endpoints,
    http: Client,
}

impl HttpCheckoutService {
    #[must_use]
    pub fn new(endpoints: Endpoints, http: Client) -> Self {
        Self { endpoints, http }
    }
}

#[async_trait]
impl CheckoutService for HttpCheckoutService {
    async fn submit(&self, request: &CheckoutRequest) -> Result<CheckoutReceipt, CheckoutError> {
        let url = self.endpoints.checkout();

        debug!(%url, lines = request.items.len(), "submitting checkout");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CheckoutError::UnexpectedStatus(status));
        }

        response.json().await.map_err(CheckoutError::Body)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Submit a snapshot of the cart and return the backend's receipt.
    async fn submit(&self, request: &CheckoutRequest) -> Result<CheckoutReceipt, CheckoutError>;
}

#[cfg(test)]
mod tests {
    use organimo::{
        cart::Cart,
        items::{NewLineItem, Sku},
    };
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::test::{StubResponse, StubServer};

    use super::*;

    fn cart() -> Result<Cart, Box<dyn std::error::Error>> {
        let mut cart = Cart::default();
        let gel = NewLineItem::new(Sku::new("A")?, "Gel", dec!(10))?;

        cart.add_item(gel.clone());
        cart.add_item(gel);

        Ok(cart)
    }

    #[tokio::test]
    async fn submit_posts_cart_snapshot() -> TestResult {
        let server =
            StubServer::start(StubResponse::json(200, r#"{"status":"ok","total":20.0}"#)).await?;
        let service = HttpCheckoutService::new(Endpoints::new(server.base_url()), Client::new());

        let receipt = service.submit(&CheckoutRequest::from(&cart()?)).await?;

        assert_eq!(receipt.status, "ok");
        assert_eq!(receipt.total, dec!(20));
        assert_eq!(server.request_lines(), ["POST /api/checkout HTTP/1.1"]);

        let body: serde_json::Value = serde_json::from_str(&server.request_bodies().concat())?;
        let first = body
            .pointer("/items/0")
            .ok_or("request body has no items")?;

        assert_eq!(first.get("sku"), Some(&serde_json::json!("A")));
        assert_eq!(first.get("quantity"), Some(&serde_json::json!(2)));

        Ok(())
    }

    #[tokio::test]
    async fn submit_rejects_error_status() -> TestResult {
        let server = StubServer::start(StubResponse::json(500, "{}")).await?;
        let service = HttpCheckoutService::new(Endpoints::new(server.base_url()), Client::new());

        let result = service.submit(&CheckoutRequest::from(&cart()?)).await;

        assert!(matches!(result, Err(CheckoutError::UnexpectedStatus(_))));

        Ok(())
    }

    #[tokio::test]
    async fn submit_rejects_malformed_receipt() -> TestResult {
        let server = StubServer::start(StubResponse::json(200, r#"{"state":"ok"}"#)).await?;
        let service = HttpCheckoutService::new(Endpoints::new(server.base_url()), Client::new());

        let result = service.submit(&CheckoutRequest::from(&cart()?)).await;

        assert!(matches!(result, Err(CheckoutError::Body(_))));

        Ok(())
    }
}
