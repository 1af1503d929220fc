//! Items

use std::{fmt, num::NonZeroU32, ops::Deref};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::line_total;

/// Errors raised while building cart items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The sku was empty or whitespace only.
    #[error("sku cannot be empty")]
    EmptySku,

    /// The price was below zero (sku, price).
    #[error("item {0} has negative price {1}")]
    NegativePrice(String, Decimal),
}

/// Stock keeping unit, the key of a line item within a cart.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    /// Creates a sku from a non-empty identifier. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::EmptySku`] if nothing is left after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ItemError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ItemError::EmptySku);
        }

        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Returns the sku as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Sku {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Sku {
    type Error = ItemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Sku {
    type Error = ItemError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sku> for String {
    fn from(sku: Sku) -> Self {
        sku.0
    }
}

/// A candidate item handed to the cart. Quantity is implied (one unit).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewLineItem {
    sku: Sku,
    title: String,
    price: Decimal,
    slug: Option<String>,
}

impl NewLineItem {
    /// Creates a candidate item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NegativePrice`] if `price` is below zero.
    pub fn new(sku: Sku, title: impl Into<String>, price: Decimal) -> Result<Self, ItemError> {
        if price < Decimal::ZERO {
            return Err(ItemError::NegativePrice(sku.into(), price));
        }

        Ok(Self {
            sku,
            title: title.into(),
            price,
            slug: None,
        })
    }

    /// Attaches the product page slug the item was added from.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Returns the sku.
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the product slug, if known.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

/// One product entry in the cart with its aggregated quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    sku: Sku,

    title: String,

    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,

    #[serde(alias = "qty", default = "default_quantity")]
    quantity: NonZeroU32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
}

fn default_quantity() -> NonZeroU32 {
    NonZeroU32::MIN
}

impl LineItem {
    /// Returns the sku.
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the unit price recorded for this line.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Returns the product slug, if known.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Returns `price * quantity`, unrounded.
    pub fn line_total(&self) -> Decimal {
        line_total(self.price, self.quantity.get())
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn reprice(&mut self, item: NewLineItem) {
        self.title = item.title;
        self.price = item.price;

        if item.slug.is_some() {
            self.slug = item.slug;
        }
    }
}

impl From<NewLineItem> for LineItem {
    fn from(item: NewLineItem) -> Self {
        Self {
            sku: item.sku,
            title: item.title,
            price: item.price,
            quantity: NonZeroU32::MIN,
            slug: item.slug,
        }
    }
}
