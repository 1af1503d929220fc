//! Session
//!
//! The session is the single owner of the cart. Views read the cart through
//! [`Session::cart`] and change it only through [`Session::add_item`].

use crate::{
    cart::{AddOutcome, Cart, PricePolicy},
    items::NewLineItem,
};

/// Visibility of the cart drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Drawer {
    /// Drawer is showing.
    Open,

    /// Drawer is hidden.
    #[default]
    Closed,
}

impl Drawer {
    /// Returns `true` when the drawer is showing.
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Per-visit storefront state: the cart and the drawer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    cart: Cart,
    drawer: Drawer,
}

impl Session {
    /// Start a session with an empty cart and a closed drawer.
    pub fn new(policy: PricePolicy) -> Self {
        Self {
            cart: Cart::new(policy),
            drawer: Drawer::Closed,
        }
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of an item to the cart and reveal the drawer.
    pub fn add_item(&mut self, item: NewLineItem) -> AddOutcome {
        let outcome = self.cart.add_item(item);
        self.drawer = Drawer::Open;
        outcome
    }

    /// Current drawer state.
    pub fn drawer(&self) -> Drawer {
        self.drawer
    }

    /// Show the drawer.
    pub fn open_drawer(&mut self) {
        self.drawer = Drawer::Open;
    }

    /// Hide the drawer.
    pub fn close_drawer(&mut self) {
        self.drawer = Drawer::Closed;
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::items::Sku;

    use super::*;

    #[test]
    fn new_session_is_empty_and_closed() {
        let session = Session::new(PricePolicy::FirstSeen);

        assert!(session.cart().is_empty());
        assert_eq!(session.drawer(), Drawer::Closed);
    }

    #[test]
    fn add_item_opens_drawer() -> TestResult {
        let mut session = Session::default();

        session.add_item(NewLineItem::new(Sku::new("A")?, "Gel", dec!(10))?);

        assert!(session.drawer().is_open());
        assert_eq!(session.cart().item_count(), 1);

        Ok(())
    }

    #[test]
    fn add_item_reopens_closed_drawer() -> TestResult {
        let mut session = Session::default();

        session.add_item(NewLineItem::new(Sku::new("A")?, "Gel", dec!(10))?);
        session.close_drawer();
        session.add_item(NewLineItem::new(Sku::new("A")?, "Gel", dec!(10))?);

        assert_eq!(session.drawer(), Drawer::Open);
        assert_eq!(session.cart().len(), 1);

        Ok(())
    }

    #[test]
    fn drawer_toggles_independently_of_cart() {
        let mut session = Session::default();

        session.open_drawer();
        assert!(session.drawer().is_open());
        assert!(session.cart().is_empty());

        session.close_drawer();
        assert!(!session.drawer().is_open());
    }
}
