//! # punto-core: Pure Business Logic for Punto POS
//!
//! This crate holds every stock and sales rule of the point-of-sale console
//! as plain data structures with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Punto POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 punto-console (terminal menu)                   │   │
//! │  │   Add ──► Remove ──► Show Inventory ──► Record Sale ──► List    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ punto-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ inventory │  │   cart    │  │  ledger   │  │   │
//! │  │   │  Product  │  │ Inventory │  │   Cart    │  │  Sales    │  │   │
//! │  │   │   Money   │  │           │  │           │  │  Ledger   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO LOGGING • PLAIN DATA               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Product` value type
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`inventory`] - Barcode-keyed stock store
//! - [`cart`] - One sale in progress
//! - [`ledger`] - Append-only history of finalized carts
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use punto_core::{Cart, Inventory, Money, Product, SalesLedger};
//!
//! let mut inventory = Inventory::new();
//! inventory.add("111", Product::new("Milk", Money::from_cents(250), 10));
//!
//! let stocked = inventory.get("111").unwrap();
//! let mut cart = Cart::new();
//! cart.add("111", stocked.with_quantity(2)).unwrap();
//! inventory.remove_by_quantity("111", 2).unwrap();
//!
//! let mut ledger = SalesLedger::new();
//! ledger.append(cart);
//!
//! assert_eq!(inventory.get("111").unwrap().quantity(), 8);
//! assert_eq!(ledger.all()[0].total_price(), Ok(Money::from_cents(500)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod inventory;
pub mod ledger;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult};
pub use inventory::Inventory;
pub use ledger::SalesLedger;
pub use money::Money;
pub use types::Product;
