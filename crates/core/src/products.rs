//! Products
//!
//! Records returned by the catalog service and the conversions that turn them
//! into cart candidates.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::items::{ItemError, NewLineItem, Sku};

/// Product as listed on the shop page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Stock keeping unit.
    pub sku: String,

    /// URL slug of the product page.
    pub slug: String,

    /// Display title.
    pub title: String,

    /// Short description.
    #[serde(default)]
    pub description: String,

    /// Unit price in USD.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Image URL.
    #[serde(default)]
    pub image: String,

    /// Catalog category (e.g. `gel`).
    #[serde(default)]
    pub category: Option<String>,
}

/// Product as shown on its detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    /// Stock keeping unit.
    pub sku: String,

    /// URL slug of the product page.
    pub slug: String,

    /// Display title.
    pub title: String,

    /// Long description.
    #[serde(default)]
    pub description: String,

    /// Unit price in USD.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Image URL.
    #[serde(default)]
    pub image: String,

    /// Average review rating.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub rating: Option<Decimal>,

    /// Number of reviews.
    #[serde(default)]
    pub reviews: Option<u64>,
}

impl ProductDetail {
    /// Rating line shown under the title, e.g. `4.9 (300)`.
    pub fn rating_label(&self) -> Option<String> {
        let rating = self.rating?;

        Some(match self.reviews {
            Some(reviews) => format!("{rating} ({reviews})"),
            None => rating.to_string(),
        })
    }
}

impl TryFrom<&ProductSummary> for NewLineItem {
    type Error = ItemError;

    fn try_from(product: &ProductSummary) -> Result<Self, Self::Error> {
        Ok(
            NewLineItem::new(Sku::new(product.sku.as_str())?, &product.title, product.price)?
                .with_slug(&product.slug),
        )
    }
}

impl TryFrom<&ProductDetail> for NewLineItem {
    type Error = ItemError;

    fn try_from(product: &ProductDetail) -> Result<Self, Self::Error> {
        Ok(
            NewLineItem::new(Sku::new(product.sku.as_str())?, &product.title, product.price)?
                .with_slug(&product.slug),
        )
    }
}

/// Category filter for catalog listings. The default lists every product.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CategoryFilter(Option<String>);

impl CategoryFilter {
    /// List every product.
    pub fn all() -> Self {
        Self(None)
    }

    /// List only products in the given category.
    pub fn only(category: impl Into<String>) -> Self {
        Self::from_param(&category.into())
    }

    /// Build a filter from a form/query value, where an empty value means all.
    pub fn from_param(value: &str) -> Self {
        let value = value.trim();

        if value.is_empty() {
            Self(None)
        } else {
            Self(Some(value.to_string()))
        }
    }

    /// The `category` query parameter, if any.
    pub fn as_param(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param().unwrap_or("all"))
    }
}

/// Outcome of loading a product detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProductPage {
    /// The product was found.
    Loaded(ProductDetail),

    /// The catalog has no product with this slug.
    NotFound {
        /// Requested slug.
        slug: String,
    },

    /// The catalog could not be reached or answered with a malformed body.
    Unavailable {
        /// Requested slug.
        slug: String,
    },
}

impl ProductPage {
    /// Returns the loaded product, if any.
    pub fn product(&self) -> Option<&ProductDetail> {
        match self {
            Self::Loaded(product) => Some(product),
            Self::NotFound { .. } | Self::Unavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    const LISTING_JSON: &str = r#"[
        {
            "sku": "ORG-SM-001",
            "slug": "sea-moss-gel",
            "title": "Organimo Sea Moss Gel",
            "description": "Daily wellness jar.",
            "price": 29.99,
            "image": "https://example.com/gel.jpg",
            "category": "gel"
        },
        {
            "sku": "ORG-SM-002",
            "slug": "sea-moss-capsules",
            "title": "Sea Moss Capsules",
            "price": 24
        }
    ]"#;

    #[test]
    fn decodes_listing_with_optional_fields() -> TestResult {
        let products: Vec<ProductSummary> = serde_json::from_str(LISTING_JSON)?;

        let [gel, capsules] = products.as_slice() else {
            return Err("expected two products".into());
        };

        assert_eq!(gel.price, dec!(29.99));
        assert_eq!(gel.category.as_deref(), Some("gel"));
        assert_eq!(capsules.price, dec!(24));
        assert!(capsules.description.is_empty());
        assert!(capsules.category.is_none());

        Ok(())
    }

    #[test]
    fn listing_without_price_is_malformed() {
        let result =
            serde_json::from_str::<Vec<ProductSummary>>(r#"[{"sku":"A","slug":"a","title":"A"}]"#);

        assert!(result.is_err(), "price is required");
    }

    #[test]
    fn detail_converts_to_line_item_candidate() -> TestResult {
        let product: ProductDetail = serde_json::from_str(
            r#"{"sku":"ORG-SM-001","slug":"sea-moss-gel","title":"Gel","description":"",
                "price":29.99,"image":"","rating":4.9,"reviews":300}"#,
        )?;

        let item = NewLineItem::try_from(&product)?;

        assert_eq!(item.sku().as_str(), "ORG-SM-001");
        assert_eq!(item.price(), dec!(29.99));
        assert_eq!(item.slug(), Some("sea-moss-gel"));
        assert_eq!(product.rating_label().as_deref(), Some("4.9 (300)"));

        Ok(())
    }

    #[test]
    fn summary_without_sku_cannot_be_added() {
        let product = ProductSummary {
            sku: String::new(),
            slug: "mystery".to_string(),
            title: "Mystery".to_string(),
            description: String::new(),
            price: dec!(1),
            image: String::new(),
            category: None,
        };

        assert_eq!(NewLineItem::try_from(&product), Err(ItemError::EmptySku));
    }

    #[test]
    fn category_filter_treats_blank_as_all() {
        assert_eq!(CategoryFilter::from_param(""), CategoryFilter::all());
        assert_eq!(CategoryFilter::from_param("  "), CategoryFilter::all());
        assert_eq!(CategoryFilter::only("gel").as_param(), Some("gel"));
        assert_eq!(CategoryFilter::all().to_string(), "all");
    }

    #[test]
    fn product_page_exposes_loaded_product_only() {
        let page = ProductPage::NotFound {
            slug: "missing".to_string(),
        };

        assert!(page.product().is_none());
    }
}
