//! Pricing
//!
//! Amounts are accumulated as unrounded [`Decimal`]s. Rounding to the
//! currency's minor unit only happens when an amount is turned into
//! [`Money`] for display.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::items::LineItem;

/// Errors that can occur while converting amounts for display.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The amount does not fit into minor units of the currency.
    #[error("amount {0} cannot be represented in {1} minor units")]
    OutOfRange(Decimal, &'static str),
}

/// Calculates `price * quantity` without rounding.
pub fn line_total(price: Decimal, quantity: u32) -> Decimal {
    price * Decimal::from(quantity)
}

/// Calculates the subtotal of a list of line items.
///
/// The fold is a plain sum of line totals, so the result does not depend on
/// the order of `items`.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc + item.line_total())
}

/// Rounds an amount to cents (half away from zero).
///
/// # Errors
///
/// Returns [`PricingError::OutOfRange`] if the rounded amount does not fit in
/// an `i64` count of minor units.
pub fn to_money(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|value| value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|value| value.to_i64())
        .ok_or(PricingError::OutOfRange(amount, currency.iso_alpha_code))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Formats money with its currency symbol, e.g. `$29.99`.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    format_minor(money.to_minor_units(), money.currency())
}

/// Rounds and formats an amount in one step, e.g. `$25.00`.
///
/// # Errors
///
/// Returns [`PricingError::OutOfRange`] when the amount cannot be rounded into
/// minor units.
pub fn format_amount(amount: Decimal, currency: &'static Currency) -> Result<String, PricingError> {
    to_money(amount, currency).map(|money| format_money(&money))
}

fn format_minor(minor_units: i64, currency: &Currency) -> String {
    let abs_minor = minor_units.unsigned_abs();
    let major_units = abs_minor / 100;
    let fractional = abs_minor % 100;
    let sign = if minor_units < 0 { "-" } else { "" };
    let amount = format!("{major_units}.{fractional:02}");

    match currency.iso_alpha_code {
        "GBP" => format!("{sign}£{amount}"),
        "USD" => format!("{sign}${amount}"),
        "EUR" => format!("{sign}€{amount}"),
        code => format!("{sign}{amount} {code}"),
    }
}
