//! Fixtures
//!
//! Static storefront content compiled into the front end, such as the home
//! page's featured product.

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    items::{ItemError, NewLineItem},
    products::ProductDetail,
};

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The fixture is priced in a different currency than the cart.
    #[error("Featured product is priced in {found}, expected {expected}")]
    CurrencyMismatch {
        /// Currency the cart is kept in.
        expected: &'static str,
        /// Currency the fixture was priced in.
        found: &'static str,
    },

    /// The fixture does not describe a product that can be added to a cart.
    #[error("Invalid featured product: {0}")]
    InvalidProduct(#[from] ItemError),
}

/// Wrapper for the featured product in YAML
#[derive(Debug, Deserialize)]
struct FeaturedFixture {
    featured: FeaturedProductFixture,
}

/// Featured Product Fixture
#[derive(Debug, Deserialize)]
struct FeaturedProductFixture {
    sku: String,
    slug: String,
    title: String,
    description: String,

    /// Product price (e.g., "29.99 USD")
    price: String,

    image: String,
    rating: String,

    /// Review count label (e.g., "300+")
    reviews: String,

    #[serde(default)]
    badges: Vec<String>,
}

/// Product highlighted on the home page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeaturedProduct {
    /// Product record, shaped like a catalog detail response.
    pub product: ProductDetail,

    /// Rating line, e.g. `4.9 (300+)`.
    pub rating_label: String,

    /// Short claims shown as pills.
    pub badges: Vec<String>,
}

impl FeaturedProduct {
    /// Cart candidate for the "Add to Cart" button.
    ///
    /// # Errors
    ///
    /// Returns an [`ItemError`] if the fixture's sku or price is invalid.
    pub fn line_item(&self) -> Result<NewLineItem, ItemError> {
        NewLineItem::try_from(&self.product)
    }
}

/// Load the featured product from fixture YAML, priced in `currency`.
///
/// # Errors
///
/// Returns an error when the YAML cannot be parsed, the price is malformed or
/// in another currency, or the product cannot be turned into a cart item.
pub fn load_featured(
    yaml: &str,
    currency: &'static Currency,
) -> Result<FeaturedProduct, FixtureError> {
    let fixture: FeaturedFixture = serde_norway::from_str(yaml)?;
    let featured = fixture.featured;

    let (price, priced_in) = parse_price(&featured.price)?;

    if priced_in.iso_alpha_code != currency.iso_alpha_code {
        return Err(FixtureError::CurrencyMismatch {
            expected: currency.iso_alpha_code,
            found: priced_in.iso_alpha_code,
        });
    }

    let product = ProductDetail {
        sku: featured.sku,
        slug: featured.slug,
        title: featured.title,
        description: featured.description,
        price,
        image: featured.image,
        rating: featured.rating.parse::<Decimal>().ok(),
        reviews: None,
    };

    NewLineItem::try_from(&product)?;

    Ok(FeaturedProduct {
        rating_label: format!("{} ({})", featured.rating, featured.reviews),
        product,
        badges: featured.badges,
    })
}

/// Parse price string (e.g., "29.99 USD") into an amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code is
/// not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount < Decimal::ZERO {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((amount, currency))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    const FEATURED_YAML: &str = include_str!("../../../fixtures/featured.yml");

    #[test]
    fn loads_bundled_featured_product() -> TestResult {
        let featured = load_featured(FEATURED_YAML, USD)?;

        assert_eq!(featured.product.sku, "ORG-SM-001");
        assert_eq!(featured.product.slug, "sea-moss-gel");
        assert_eq!(featured.product.price, dec!(29.99));
        assert_eq!(featured.rating_label, "4.9 (300+)");
        assert_eq!(featured.badges.len(), 5);

        let item = featured.line_item()?;

        assert_eq!(item.slug(), Some("sea-moss-gel"));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("29.99USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-1.00 USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn featured_without_sku_is_rejected() {
        let yaml = r#"
featured:
  sku: ""
  slug: gel
  title: Gel
  description: ""
  price: "1.00 USD"
  image: ""
  rating: "5"
  reviews: "1"
"#;

        let result = load_featured(yaml, USD);

        assert!(matches!(
            result,
            Err(FixtureError::InvalidProduct(ItemError::EmptySku))
        ));
    }

    #[test]
    fn featured_in_another_currency_is_rejected() {
        let yaml = r#"
featured:
  sku: ORG-SM-001
  slug: sea-moss-gel
  title: Sea Moss Gel
  description: ""
  price: "29.99 EUR"
  image: ""
  rating: "4.9"
  reviews: "300+"
"#;

        let result = load_featured(yaml, USD);

        assert!(matches!(
            result,
            Err(FixtureError::CurrencyMismatch { expected: "USD", found: "EUR" })
        ));
    }
}
