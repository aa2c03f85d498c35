//! # Cart
//!
//! One sale transaction: the lines being sold, keyed by barcode.
//!
//! ## Lifecycle
//! ```text
//! Cart::new() ──► add() / remove_all() ──► SalesLedger::append(cart)
//!   (open)          (lines change)            (frozen from here on)
//! ```
//!
//! Each line is a [`Product`] whose quantity is the number of units sold,
//! with the name and price frozen from the inventory at the time of sale.
//!
//! `add` refuses a line whose total, or whose effect on the cart total,
//! would overflow `Money`; the cart is left as it was.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Product;

/// The lines of one sale.
///
/// ## Invariants
/// - Lines are unique by barcode (adding the same barcode replaces the line)
/// - `total_price()` is always the sum of `unit_price × quantity`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: IndexMap<String, Product>,
    opened_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: IndexMap::new(),
            opened_at: Utc::now(),
        }
    }

    /// Adds a line, replacing any line already under `barcode`.
    ///
    /// Re-adding a barcode is how the quantity of a line is changed
    /// within the same sale.
    pub fn add(&mut self, barcode: impl Into<String>, product: Product) -> CoreResult<()> {
        let barcode = barcode.into();

        let mut total = product.line_total()?;
        for (existing, line) in &self.lines {
            if *existing != barcode {
                total = total.checked_add(line.line_total()?)?;
            }
        }

        self.lines.insert(barcode, product);
        Ok(())
    }

    /// Removes the line for `barcode`, if any.
    pub fn remove_all(&mut self, barcode: &str) -> Option<Product> {
        self.lines.shift_remove(barcode)
    }

    /// Sum of every line total. Zero for an empty cart.
    pub fn total_price(&self) -> CoreResult<Money> {
        self.lines
            .values()
            .try_fold(Money::zero(), |total, line| total.checked_add(line.line_total()?))
    }

    /// Iterates over `(barcode, line)` pairs in the order they were added.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &Product)> {
        self.lines.iter().map(|(barcode, line)| (barcode.as_str(), line))
    }

    /// When the sale was started.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn line(name: &str, price_cents: i64, quantity: i64) -> Product {
        Product::new(name, Money::from_cents(price_cents), quantity)
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Ok(Money::zero()));
    }

    #[test]
    fn test_cart_total() {
        let mut cart = Cart::new();
        cart.add("111", line("Milk", 250, 2)).unwrap();
        cart.add("333", line("Eggs", 300, 1)).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_price(), Ok(Money::from_cents(800))); // 2×2.50 + 1×3.00
    }

    #[test]
    fn test_cart_readd_replaces_line() {
        let mut cart = Cart::new();
        cart.add("111", line("Milk", 250, 2)).unwrap();
        cart.add("111", line("Milk", 250, 5)).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_price(), Ok(Money::from_cents(1250)));
    }

    #[test]
    fn test_cart_remove_all() {
        let mut cart = Cart::new();
        cart.add("111", line("Milk", 250, 2)).unwrap();
        cart.add("333", line("Eggs", 300, 1)).unwrap();

        assert!(cart.remove_all("111").is_some());
        assert!(cart.remove_all("111").is_none());
        assert_eq!(cart.total_price(), Ok(Money::from_cents(300)));
    }

    #[test]
    fn test_cart_lines_keep_order() {
        let mut cart = Cart::new();
        cart.add("b", line("Bread", 120, 1)).unwrap();
        cart.add("a", line("Apple", 50, 4)).unwrap();

        let names: Vec<&str> = cart.lines().map(|(_, l)| l.name()).collect();
        assert_eq!(names, vec!["Bread", "Apple"]);
    }

    #[test]
    fn test_overflowing_line_is_refused() {
        let mut cart = Cart::new();
        cart.add("111", line("Milk", 250, 2)).unwrap();
        let before = cart.clone();

        assert_eq!(
            cart.add("333", line("Eggs", 300, i64::MAX)),
            Err(CoreError::AmountOutOfRange)
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_overflowing_cart_total_is_refused() {
        let mut cart = Cart::new();
        cart.add("111", line("Gold", i64::MAX, 1)).unwrap();

        assert_eq!(
            cart.add("222", line("Milk", 250, 1)),
            Err(CoreError::AmountOutOfRange)
        );
        assert_eq!(cart.len(), 1);

        // Replacing the big line itself is measured without its old total
        cart.add("111", line("Gold", i64::MAX - 250, 1)).unwrap();
        cart.add("222", line("Milk", 250, 1)).unwrap();
        assert_eq!(cart.total_price(), Ok(Money::from_cents(i64::MAX)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: total equals the sum of price × quantity over the lines.
            #[test]
            fn total_is_sum_of_lines(
                lines in prop::collection::vec((0i64..100_000, 0i64..1_000), 0..30)
            ) {
                let mut cart = Cart::new();
                let mut expected = 0i64;
                for (i, (price, quantity)) in lines.iter().enumerate() {
                    cart.add(i.to_string(), line("Item", *price, *quantity)).unwrap();
                    expected += price * quantity;
                }

                prop_assert_eq!(cart.total_price().unwrap().cents(), expected);
            }
        }
    }
}
