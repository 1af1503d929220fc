//! Terminal rendering for listings, products, carts and checkout outcomes.

use std::io;

use organimo::{
    cart::Cart,
    checkout::CheckoutOutcome,
    pricing::{PricingError, format_amount},
    products::{ProductPage, ProductSummary},
};
use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

/// Errors that can occur while rendering output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An amount could not be formatted as money.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Error writing output.
    #[error("failed to write output")]
    IO,
}

/// Write the product listing as a table.
///
/// # Errors
///
/// Returns a [`RenderError`] if a price cannot be formatted or writing fails.
pub fn write_products(
    mut out: impl io::Write,
    products: &[ProductSummary],
    currency: &'static Currency,
) -> Result<(), RenderError> {
    if products.is_empty() {
        return writeln!(out, "No products found.").map_err(|_err| RenderError::IO);
    }

    let mut builder = Builder::default();

    builder.push_record(["Slug", "Title", "Category", "Price"]);

    for product in products {
        builder.push_record([
            product.slug.clone(),
            product.title.clone(),
            product.category.clone().unwrap_or_default(),
            format_amount(product.price, currency)?,
        ]);
    }

    write_table(&mut out, builder, 3)
}

/// Write a product page: the product's details, or why there are none.
///
/// # Errors
///
/// Returns a [`RenderError`] if the price cannot be formatted or writing fails.
pub fn write_product(
    mut out: impl io::Write,
    page: &ProductPage,
    currency: &'static Currency,
) -> Result<(), RenderError> {
    let product = match page {
        ProductPage::Loaded(product) => product,
        ProductPage::NotFound { slug } => {
            return writeln!(out, "Product \"{slug}\" was not found.")
                .map_err(|_err| RenderError::IO);
        }
        ProductPage::Unavailable { slug } => {
            return writeln!(out, "Product \"{slug}\" could not be loaded. Try again later.")
                .map_err(|_err| RenderError::IO);
        }
    };

    let price = format_amount(product.price, currency)?;

    writeln!(out, "{}", product.title).map_err(|_err| RenderError::IO)?;
    writeln!(out, "{price}  ({})", product.sku).map_err(|_err| RenderError::IO)?;

    if let Some(rating) = product.rating_label() {
        writeln!(out, "Rated {rating}").map_err(|_err| RenderError::IO)?;
    }

    if !product.description.is_empty() {
        writeln!(out, "\n{}", product.description).map_err(|_err| RenderError::IO)?;
    }

    Ok(())
}

/// Write the cart's lines, subtotal and item count.
///
/// # Errors
///
/// Returns a [`RenderError`] if an amount cannot be formatted or writing fails.
pub fn write_cart(mut out: impl io::Write, cart: &Cart) -> Result<(), RenderError> {
    if cart.is_empty() {
        return writeln!(out, "Your cart is empty.").map_err(|_err| RenderError::IO);
    }

    let currency = cart.currency();
    let mut builder = Builder::default();

    builder.push_record(["SKU", "Title", "Qty", "Price", "Total"]);

    for line in cart.items() {
        builder.push_record([
            line.sku().to_string(),
            line.title().to_string(),
            line.quantity().to_string(),
            format_amount(line.price(), currency)?,
            format_amount(line.line_total(), currency)?,
        ]);
    }

    write_table(&mut out, builder, 2)?;

    writeln!(
        out,
        " Subtotal: {} ({} items)\n",
        format_amount(cart.subtotal(), currency)?,
        cart.item_count()
    )
    .map_err(|_err| RenderError::IO)
}

/// Write the message the user sees after checking out.
///
/// # Errors
///
/// Returns [`RenderError::IO`] if writing fails.
pub fn write_outcome(
    mut out: impl io::Write,
    outcome: &CheckoutOutcome,
    currency: &'static Currency,
) -> Result<(), RenderError> {
    writeln!(out, "{}", outcome.message(currency)).map_err(|_err| RenderError::IO)
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    first_numeric_column: usize,
) -> Result<(), RenderError> {
    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Columns::new(first_numeric_column..), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| RenderError::IO)
}
