//! Storefront
//!
//! Applies the storefront's error policy on top of the catalog and checkout
//! services, and drops fetch results whose view has been navigated away from.
//!
//! - Listing failures show an empty listing.
//! - Product failures show [`ProductPage::NotFound`] or [`ProductPage::Unavailable`].
//! - Checkout failures are acknowledged with [`CheckoutOutcome::Acknowledged`].

use organimo::{
    cart::Cart,
    checkout::{CheckoutOutcome, CheckoutRequest},
    products::{CategoryFilter, ProductPage, ProductSummary},
    views::{ViewGuard, ViewTicket},
};
use tracing::{debug, warn};

use crate::{catalog::CatalogError, context::AppContext};

/// Front-end facing operations over the catalog and checkout services.
#[derive(Clone)]
pub struct Storefront {
    context: AppContext,
    listing: ViewGuard<CategoryFilter>,
    product: ViewGuard<String>,
}

impl Storefront {
    #[must_use]
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            listing: ViewGuard::new(),
            product: ViewGuard::new(),
        }
    }

    /// Display the listing for `filter`. Pass the ticket to [`Self::load_listing`].
    pub fn show_listing(&self, filter: CategoryFilter) -> ViewTicket<CategoryFilter> {
        self.listing.navigate(filter)
    }

    /// Fetch the listing for `ticket`.
    ///
    /// Returns `None` if the listing view changed while the fetch was in flight.
    /// A failed fetch yields an empty listing.
    pub async fn load_listing(
        &self,
        ticket: &ViewTicket<CategoryFilter>,
    ) -> Option<Vec<ProductSummary>> {
        let products = match self.context.catalog.list_products(ticket.key()).await {
            Ok(products) => products,
            Err(error) => {
                warn!(%error, filter = %ticket.key(), "product listing failed, showing none");
                Vec::new()
            }
        };

        let accepted = self.listing.accept(ticket, products);

        if accepted.is_none() {
            debug!(filter = %ticket.key(), "dropping stale product listing");
        }

        accepted
    }

    /// Display the product page for `slug`. Pass the ticket to [`Self::load_product`].
    pub fn show_product(&self, slug: impl Into<String>) -> ViewTicket<String> {
        self.product.navigate(slug.into())
    }

    /// Fetch the product for `ticket`.
    ///
    /// Returns `None` if another product was displayed while the fetch was in
    /// flight.
    pub async fn load_product(&self, ticket: &ViewTicket<String>) -> Option<ProductPage> {
        let slug = ticket.key().clone();

        let page = match self.context.catalog.get_product(&slug).await {
            Ok(product) => ProductPage::Loaded(product),
            Err(CatalogError::NotFound(_)) => {
                warn!(%slug, "product not found");
                ProductPage::NotFound { slug }
            }
            Err(error) => {
                warn!(%error, %slug, "product fetch failed");
                ProductPage::Unavailable { slug }
            }
        };

        let accepted = self.product.accept(ticket, page);

        if accepted.is_none() {
            debug!(slug = %ticket.key(), "dropping stale product");
        }

        accepted
    }

    /// Submit a snapshot of `cart`. The cart is only borrowed, so it is left
    /// exactly as it was whatever the outcome.
    pub async fn checkout(&self, cart: &Cart) -> CheckoutOutcome {
        let request = CheckoutRequest::from(cart);

        match self.context.checkout.submit(&request).await {
            Ok(receipt) => CheckoutOutcome::Confirmed(receipt),
            Err(error) => {
                warn!(%error, lines = request.items.len(), "checkout failed, acknowledging anyway");
                CheckoutOutcome::Acknowledged
            }
        }
    }
}
