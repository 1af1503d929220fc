//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use organimo::{
    endpoints::Endpoints,
    products::{CategoryFilter, ProductDetail, ProductSummary},
};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::catalog::errors::CatalogError;

/// Catalog backed by the storefront's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    endpoints: Endpoints,
    http: Client,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(endpoints: Endpoints, http: Client) -> Self {
        Self { endpoints, http }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_products(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Vec<ProductSummary>, CatalogError> {
        let url = self.endpoints.products();
        let mut request = self.http.get(&url);

        if let Some(category) = filter.as_param() {
            request = request.query(&[("category", category)]);
        }

        debug!(%url, %filter, "fetching product listing");

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus(status));
        }

        response.json().await.map_err(CatalogError::Body)
    }

    async fn get_product(&self, slug: &str) -> Result<ProductDetail, CatalogError> {
        let Some(url) = self.endpoints.product(slug) else {
            return Err(CatalogError::NotFound(slug.to_string()));
        };

        debug!(%url, slug, "fetching product");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(slug.to_string()));
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus(status));
        }

        response.json().await.map_err(CatalogError::Body)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves the product listing, optionally filtered by category.
    async fn list_products(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Vec<ProductSummary>, CatalogError>;

    /// Retrieve a single product by slug.
    async fn get_product(&self, slug: &str) -> Result<ProductDetail, CatalogError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::test::{StubResponse, StubServer};

    use super::*;

    const LISTING: &str = r#"[{"sku":"ORG-SM-001","slug":"sea-moss-gel","title":"Sea Moss Gel",
        "description":"Daily jar","price":29.99,"image":"gel.jpg","category":"gel"}]"#;

    const DETAIL: &str = r#"{"sku":"ORG-SM-001","slug":"sea-moss-gel","title":"Sea Moss Gel",
        "description":"Daily jar","price":29.99,"image":"gel.jpg","rating":4.9,"reviews":300}"#;

    fn catalog(server: &StubServer) -> HttpCatalogService {
        HttpCatalogService::new(Endpoints::new(server.base_url()), Client::new())
    }

    #[tokio::test]
    async fn list_products_decodes_listing() -> TestResult {
        let server = StubServer::start(StubResponse::json(200, LISTING)).await?;

        let products = catalog(&server).list_products(&CategoryFilter::all()).await?;

        assert_eq!(products.len(), 1);
        assert_eq!(products.first().map(|p| p.price), Some(dec!(29.99)));
        assert_eq!(server.request_lines(), ["GET /api/products HTTP/1.1"]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_sends_category_query() -> TestResult {
        let server = StubServer::start(StubResponse::json(200, "[]")).await?;

        let products = catalog(&server)
            .list_products(&CategoryFilter::only("gel"))
            .await?;

        assert!(products.is_empty());
        assert_eq!(
            server.request_lines(),
            ["GET /api/products?category=gel HTTP/1.1"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_rejects_error_status() -> TestResult {
        let server = StubServer::start(StubResponse::json(503, "{}")).await?;

        let result = catalog(&server).list_products(&CategoryFilter::all()).await;

        assert!(matches!(
            result,
            Err(CatalogError::UnexpectedStatus(StatusCode::SERVICE_UNAVAILABLE))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn list_products_rejects_malformed_body() -> TestResult {
        let server = StubServer::start(StubResponse::json(200, "<html>")).await?;

        let result = catalog(&server).list_products(&CategoryFilter::all()).await;

        assert!(matches!(result, Err(CatalogError::Body(_))));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_decodes_detail() -> TestResult {
        let server = StubServer::start(StubResponse::json(200, DETAIL)).await?;

        let product = catalog(&server).get_product("sea-moss-gel").await?;

        assert_eq!(product.sku, "ORG-SM-001");
        assert_eq!(product.reviews, Some(300));
        assert_eq!(
            server.request_lines(),
            ["GET /api/products/sea-moss-gel HTTP/1.1"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_maps_404_to_not_found() -> TestResult {
        let server = StubServer::start(StubResponse::json(404, r#"{"detail":"missing"}"#)).await?;

        let result = catalog(&server).get_product("missing").await;

        assert!(matches!(result, Err(CatalogError::NotFound(slug)) if slug == "missing"));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_keeps_slug_inside_product_path() -> TestResult {
        let server = StubServer::start(StubResponse::json(404, "{}")).await?;

        let result = catalog(&server).get_product("../checkout").await;

        assert!(matches!(result, Err(CatalogError::NotFound(slug)) if slug == "../checkout"));
        assert_eq!(
            server.request_lines(),
            ["GET /api/products/..%2Fcheckout HTTP/1.1"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_dot_slug_is_not_found_without_request() -> TestResult {
        let server = StubServer::start(StubResponse::json(200, DETAIL)).await?;

        let result = catalog(&server).get_product("..").await;

        assert!(matches!(result, Err(CatalogError::NotFound(slug)) if slug == ".."));
        assert!(server.request_lines().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_catalog_is_a_transport_error() {
        let catalog = HttpCatalogService::new(Endpoints::new("http://127.0.0.1:1"), Client::new());

        let result = catalog.get_product("sea-moss-gel").await;

        assert!(matches!(result, Err(CatalogError::Http(_))));
    }
}
