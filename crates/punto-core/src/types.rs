//! # Domain Types
//!
//! The `Product` value shared by the inventory and by carts.
//!
//! ```text
//! ┌─────────────────┐
//! │    Product      │    Same shape in two places:
//! │  ─────────────  │    • Inventory: quantity = units in stock
//! │  name           │    • Cart:      quantity = units sold on this line
//! │  unit_price     │
//! │  quantity       │
//! └─────────────────┘
//! ```
//!
//! A `Product` has no identity of its own; the barcode it is stored under
//! identifies the product line.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// An immutable product record.
///
/// Quantity changes never mutate a `Product`; callers build a replacement
/// with [`Product::with_quantity`] and store that instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    unit_price: Money,
    quantity: i64,
}

impl Product {
    /// Creates a product record.
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        Product {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Display name shown in tables and on receipts.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns a copy of this product with a different quantity.
    ///
    /// Used both for stock decrements and for freezing a sale line: the sale
    /// line keeps the inventory's name and price at the time of sale.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        Product {
            name: self.name.clone(),
            unit_price: self.unit_price,
            quantity,
        }
    }

    /// Line total (unit price × quantity), or `AmountOutOfRange` when it
    /// does not fit.
    #[inline]
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
