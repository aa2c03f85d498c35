//! # Sales Ledger
//!
//! Append-only history of finalized carts, oldest first.
//!
//! Once a cart is appended the ledger owns it and only hands out shared
//! borrows; no method edits or removes a recorded sale.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::money::Money;

/// Recorded sales in the order they were completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesLedger {
    sales: Vec<Cart>,
}

impl SalesLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finalized cart and returns its 1-based sale number.
    pub fn append(&mut self, cart: Cart) -> usize {
        self.sales.push(cart);
        self.sales.len()
    }

    /// All recorded carts in recording order.
    pub fn all(&self) -> &[Cart] {
        &self.sales
    }

    /// Sum of every recorded cart's total, or `AmountOutOfRange` once the
    /// running sum no longer fits.
    pub fn grand_total(&self) -> CoreResult<Money> {
        self.sales
            .iter()
            .try_fold(Money::zero(), |total, cart| total.checked_add(cart.total_price()?))
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
