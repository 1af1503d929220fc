//! Checkout
//!
//! Wire types for the checkout service and the outcome presented to the user.

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use serde::{Deserialize, Serialize};

use crate::{cart::Cart, items::LineItem, pricing};

/// Message shown when the checkout service could not confirm an order.
pub const FALLBACK_MESSAGE: &str = "Checkout initialized.";

/// Body sent to the checkout service: a snapshot of the cart's lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Line items in cart order.
    pub items: Vec<LineItem>,
}

impl From<&Cart> for CheckoutRequest {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
        }
    }
}

/// Response from the checkout service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    /// Order status reported by the backend.
    pub status: String,

    /// Order total reported by the backend.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// What the user is told after pressing checkout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The backend answered with a status and total.
    Confirmed(CheckoutReceipt),

    /// The backend was unreachable or answered badly; the user still gets an
    /// acknowledgement.
    Acknowledged,
}

impl CheckoutOutcome {
    /// User-facing message for this outcome, e.g. `Checkout: created. Total $25.00`.
    pub fn message(&self, currency: &'static Currency) -> String {
        match self {
            Self::Confirmed(receipt) => {
                let total = pricing::format_amount(receipt.total, currency)
                    .unwrap_or_else(|_| receipt.total.to_string());

                format!("Checkout: {}. Total {total}", receipt.status)
            }
            Self::Acknowledged => FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Returns `true` when the backend confirmed the order.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }
}
