//! Cart

use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};
use serde::{Deserialize, Serialize};

use crate::{
    items::{LineItem, NewLineItem, Sku},
    pricing,
};

/// What happens to the stored price when a sku already in the cart is added again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricePolicy {
    /// Keep the title and price recorded on first add.
    #[default]
    FirstSeen,

    /// Replace title and price with the latest add.
    Latest,
}

/// Result of adding an item to the cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended at the given position.
    Inserted {
        /// Position of the new line.
        index: usize,
    },

    /// An existing line's quantity was incremented.
    Merged {
        /// Position of the existing line.
        index: usize,

        /// Quantity after the increment.
        quantity: u32,
    },
}

/// Cart
///
/// Line items are kept in first-added order and keyed by sku: adding a sku
/// that is already present bumps its quantity instead of appending a line.
#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: &'static Currency,
    policy: PricePolicy,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(PricePolicy::default())
    }
}

impl Cart {
    /// Create an empty USD cart with the given duplicate-price policy.
    pub fn new(policy: PricePolicy) -> Self {
        Self::with_currency(iso::USD, policy)
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: &'static Currency, policy: PricePolicy) -> Self {
        Cart {
            items: Vec::new(),
            currency,
            policy,
        }
    }

    /// Add one unit of an item, merging with an existing line of the same sku.
    pub fn add_item(&mut self, item: NewLineItem) -> AddOutcome {
        let existing = self
            .items
            .iter_mut()
            .enumerate()
            .find(|(_, line)| line.sku() == item.sku());

        match existing {
            Some((index, line)) => {
                line.increment();

                if self.policy == PricePolicy::Latest {
                    line.reprice(item);
                }

                AddOutcome::Merged {
                    index,
                    quantity: line.quantity(),
                }
            }
            None => {
                let index = self.items.len();
                self.items.push(LineItem::from(item));

                AddOutcome::Inserted { index }
            }
        }
    }

    /// Calculate the subtotal of the cart, unrounded.
    pub fn subtotal(&self) -> Decimal {
        pricing::subtotal(&self.items)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |acc, item| acc.saturating_add(item.quantity()))
    }

    /// Find the line for a sku.
    pub fn get(&self, sku: &Sku) -> Option<&LineItem> {
        self.items.iter().find(|item| item.sku() == sku)
    }

    /// Line items in first-added order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Get the duplicate-price policy of the cart.
    pub fn policy(&self) -> PricePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::items::ItemError;

    use super::*;

    fn new_item(sku: &str, title: &str, price: Decimal) -> Result<NewLineItem, ItemError> {
        NewLineItem::new(Sku::new(sku)?, title, price)
    }

    #[test]
    fn new_cart_is_empty_usd() {
        let cart = Cart::default();

        assert!(cart.is_empty());
        assert_eq!(cart.currency(), iso::USD);
        assert_eq!(cart.policy(), PricePolicy::FirstSeen);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn add_item_appends_new_skus() -> TestResult {
        let mut cart = Cart::default();

        let first = cart.add_item(new_item("A", "Gel", dec!(10))?);
        let second = cart.add_item(new_item("B", "Capsules", dec!(5))?);

        assert_eq!(first, AddOutcome::Inserted { index: 0 });
        assert_eq!(second, AddOutcome::Inserted { index: 1 });
        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[test]
    fn add_item_merges_duplicate_skus() -> TestResult {
        let mut cart = Cart::default();

        cart.add_item(new_item("A", "Gel", dec!(10))?);
        let outcome = cart.add_item(new_item("A", "Gel", dec!(10))?);

        assert_eq!(
            outcome,
            AddOutcome::Merged {
                index: 0,
                quantity: 2
            }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);

        Ok(())
    }

    #[test]
    fn first_seen_policy_keeps_original_price_and_title() -> TestResult {
        let mut cart = Cart::new(PricePolicy::FirstSeen);

        cart.add_item(new_item("A", "Gel", dec!(10))?);
        cart.add_item(new_item("A", "Gel (new label)", dec!(12))?);

        let line = cart.get(&Sku::new("A")?).ok_or("missing line")?;

        assert_eq!(line.price(), dec!(10));
        assert_eq!(line.title(), "Gel");
        assert_eq!(line.quantity(), 2);
        assert_eq!(cart.subtotal(), dec!(20));

        Ok(())
    }

    #[test]
    fn latest_policy_refreshes_price_and_title() -> TestResult {
        let mut cart = Cart::new(PricePolicy::Latest);

        cart.add_item(new_item("A", "Gel", dec!(10))?);
        cart.add_item(new_item("A", "Gel (new label)", dec!(12))?);

        let line = cart.get(&Sku::new("A")?).ok_or("missing line")?;

        assert_eq!(line.price(), dec!(12));
        assert_eq!(line.title(), "Gel (new label)");
        assert_eq!(cart.subtotal(), dec!(24));

        Ok(())
    }

    #[test]
    fn item_count_sums_quantities() -> TestResult {
        let mut cart = Cart::default();

        cart.add_item(new_item("A", "Gel", dec!(10))?);
        cart.add_item(new_item("A", "Gel", dec!(10))?);
        cart.add_item(new_item("B", "Capsules", dec!(5))?);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[test]
    fn get_unknown_sku_returns_none() -> TestResult {
        let cart = Cart::default();

        assert!(cart.get(&Sku::new("Z")?).is_none());

        Ok(())
    }

    #[test]
    fn price_policy_uses_kebab_case_names() -> TestResult {
        let policy: PricePolicy = serde_json::from_str(r#""first-seen""#)?;

        assert_eq!(policy, PricePolicy::FirstSeen);
        assert_eq!(serde_json::to_string(&PricePolicy::Latest)?, r#""latest""#);

        Ok(())
    }
}
