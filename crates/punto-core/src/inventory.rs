//! # Inventory Store
//!
//! Barcode-keyed stock of products.
//!
//! ## Stock Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Menu Action              Method                  Entry Change          │
//! │  ───────────              ──────                  ────────────          │
//! │                                                                         │
//! │  Register product ───────► add() ───────────────► insert / overwrite    │
//! │                                                                         │
//! │  Remove product ─────────► remove_all() ────────► delete (no-op if none)│
//! │                                                                         │
//! │  Record sale ────────────► get() ───────────────► (read only)           │
//! │                 └────────► remove_by_quantity() ► replace or delete     │
//! │                                                                         │
//! │  Show inventory ─────────► list() ──────────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries keep their registration order, so tables print the same way
//! every time. Overwriting a barcode keeps its original position.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

/// The authoritative stock mapping.
///
/// ## Invariants
/// - At most one product per barcode (the last `add` wins)
/// - `remove_by_quantity` never leaves a zero-quantity entry behind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    products: IndexMap<String, Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product under `barcode`, silently replacing any
    /// product already stored there.
    pub fn add(&mut self, barcode: impl Into<String>, product: Product) {
        self.products.insert(barcode.into(), product);
    }

    /// Looks up the product registered under `barcode`.
    pub fn get(&self, barcode: &str) -> CoreResult<&Product> {
        self.products
            .get(barcode)
            .ok_or_else(|| CoreError::ProductNotFound(barcode.to_string()))
    }

    /// Removes the whole entry for `barcode`.
    ///
    /// Absent barcodes are a no-op. The removed product is returned so the
    /// caller can tell whether anything was there.
    pub fn remove_all(&mut self, barcode: &str) -> Option<Product> {
        self.products.shift_remove(barcode)
    }

    /// Takes `quantity` units of `barcode` out of stock.
    ///
    /// ## Rules
    /// - Current stock of exactly 1: the entry is deleted, whatever
    ///   `quantity` was requested
    /// - Otherwise the entry is replaced with `stock - quantity`; a result of
    ///   0 deletes the entry
    /// - The request is NOT checked against available stock, so the stored
    ///   quantity can go negative
    /// - A difference that does not fit in `i64` is `QuantityOutOfRange`
    ///   and leaves the entry untouched
    ///
    /// ## Returns
    /// The replacement product, or `None` when the entry was deleted.
    pub fn remove_by_quantity(
        &mut self,
        barcode: &str,
        quantity: i64,
    ) -> CoreResult<Option<Product>> {
        let current = self.get(barcode)?;

        if current.quantity() == 1 {
            self.products.shift_remove(barcode);
            return Ok(None);
        }

        let remaining = current.quantity().checked_sub(quantity).ok_or(
            CoreError::QuantityOutOfRange {
                stock: current.quantity(),
                requested: quantity,
            },
        )?;
        if remaining == 0 {
            self.products.shift_remove(barcode);
            return Ok(None);
        }

        let replacement = current.with_quantity(remaining);
        self.products.insert(barcode.to_string(), replacement.clone());
        Ok(Some(replacement))
    }

    /// Iterates over `(barcode, product)` pairs in registration order.
    pub fn list(&self) -> impl Iterator<Item = (&str, &Product)> {
        self.products
            .iter()
            .map(|(barcode, product)| (barcode.as_str(), product))
    }

    /// Checks whether a barcode is registered.
    pub fn contains(&self, barcode: &str) -> bool {
        self.products.contains_key(barcode)
    }

    /// Number of registered barcodes.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn milk(quantity: i64) -> Product {
        Product::new("Milk", Money::from_cents(250), quantity)
    }

    #[test]
    fn test_add_and_get() {
        let mut inventory = Inventory::new();
        inventory.add("111", milk(10));

        let product = inventory.get("111").unwrap();
        assert_eq!(product.name(), "Milk");
        assert_eq!(product.quantity(), 10);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_get_unknown_barcode() {
        let inventory = Inventory::new();
        assert_eq!(
            inventory.get("999").unwrap_err(),
            CoreError::ProductNotFound("999".to_string())
        );
    }

    #[test]
    fn test_add_overwrites_in_place() {
        let mut inventory = Inventory::new();
        inventory.add("111", milk(10));
        inventory.add("222", Product::new("Bread", Money::from_cents(120), 5));
        inventory.add("111", milk(3));

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.get("111").unwrap().quantity(), 3);

        let order: Vec<&str> = inventory.list().map(|(barcode, _)| barcode).collect();
        assert_eq!(order, vec!["111", "222"]);
    }

    #[test]
    fn test_remove_all() {
        let mut inventory = Inventory::new();
        inventory.add("111", milk(10));

        assert_eq!(inventory.remove_all("111"), Some(milk(10)));
        assert!(!inventory.contains("111"));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_remove_all_absent_is_noop() {
        let mut inventory = Inventory::new();
        inventory.add("111", milk(10));
        let before = inventory.clone();

        assert_eq!(inventory.remove_all("999"), None);
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_remove_by_quantity_decrements() {
        let mut inventory = Inventory::new();
        inventory.add("111", milk(10));

        let replacement = inventory.remove_by_quantity("111", 3).unwrap();
        assert_eq!(replacement, Some(milk(7)));

        let product = inventory.get("111").unwrap();
        assert_eq!(product.quantity(), 7);
        assert_eq!(product.unit_price(), Money::from_cents(250));
        assert_eq!(product.name(), "Milk");
    }

    #[test]
    fn test_remove_by_quantity_last_unit_deletes() {
        let mut inventory = Inventory::new();
        inventory.add("222", Product::new("Bread", Money::from_cents(120), 1));

        assert_eq!(inventory.remove_by_quantity("222", 1).unwrap(), None);
        assert!(!inventory.contains("222"));
    }

    #[test]
    fn test_remove_by_quantity_single_unit_ignores_request() {
        let mut inventory = Inventory::new();
        inventory.add("222", Product::new("Bread", Money::from_cents(120), 1));

        assert_eq!(inventory.remove_by_quantity("222", 5).unwrap(), None);
        assert!(!inventory.contains("222"));
    }

    #[test]
    fn test_remove_by_quantity_exact_stock_deletes() {
        let mut inventory = Inventory::new();
        inventory.add("111", milk(4));

        assert_eq!(inventory.remove_by_quantity("111", 4).unwrap(), None);
        assert!(!inventory.contains("111"));
    }

    #[test]
    fn test_remove_by_quantity_oversell_goes_negative() {
        let mut inventory = Inventory::new();
        inventory.add("111", milk(2));

        inventory.remove_by_quantity("111", 5).unwrap();
        assert_eq!(inventory.get("111").unwrap().quantity(), -3);
    }

    #[test]
    fn test_remove_by_quantity_overflow_leaves_stock() {
        let mut inventory = Inventory::new();
        inventory.add("111", milk(2));
        let before = inventory.clone();

        assert_eq!(
            inventory.remove_by_quantity("111", i64::MIN),
            Err(CoreError::QuantityOutOfRange {
                stock: 2,
                requested: i64::MIN,
            })
        );
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_remove_by_quantity_unknown_barcode() {
        let mut inventory = Inventory::new();
        assert!(matches!(
            inventory.remove_by_quantity("999", 1),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: one entry per barcode, and the last add wins.
            #[test]
            fn last_add_wins(
                adds in prop::collection::vec(("[0-9]{1,2}", 0i64..100), 0..40)
            ) {
                let mut inventory = Inventory::new();
                for (barcode, quantity) in &adds {
                    inventory.add(barcode.clone(), milk(*quantity));
                }

                let mut expected = std::collections::HashMap::new();
                for (barcode, quantity) in &adds {
                    expected.insert(barcode.clone(), *quantity);
                }

                prop_assert_eq!(inventory.len(), expected.len());
                for (barcode, quantity) in &expected {
                    prop_assert_eq!(inventory.get(barcode).unwrap().quantity(), *quantity);
                }
            }

            /// Property: a single unit in stock always disappears.
            #[test]
            fn single_unit_always_removed(request in -50i64..50) {
                let mut inventory = Inventory::new();
                inventory.add("b", milk(1));

                inventory.remove_by_quantity("b", request).unwrap();
                prop_assert!(!inventory.contains("b"));
            }

            /// Property: removing an absent barcode changes nothing.
            #[test]
            fn remove_all_absent_is_idempotent(
                barcodes in prop::collection::vec("[a-z]{1,3}", 0..10),
                absent in "[0-9]{1,3}"
            ) {
                let mut inventory = Inventory::new();
                for barcode in &barcodes {
                    inventory.add(barcode.clone(), milk(3));
                }
                let before = inventory.clone();

                prop_assert_eq!(inventory.remove_all(&absent), None);
                prop_assert_eq!(inventory, before);
            }
        }
    }
}
