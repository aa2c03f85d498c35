//! # Application Context
//!
//! The single owner of everything a session mutates.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      AppContext                          │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │  Inventory   │  │ SalesLedger  │  │ ConsoleConfig  │  │
//! │  │  barcode →   │  │  Vec<Cart>   │  │  read-only     │  │
//! │  │  Product     │  │  append-only │  │                │  │
//! │  └──────────────┘  └──────────────┘  └────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Built once in `run()` and lent to the controller by `&mut`. There are no
//! globals; a test can build as many independent contexts as it likes.

use punto_core::{Inventory, SalesLedger};

use crate::config::ConsoleConfig;

/// Session state: inventory, sales history and configuration.
#[derive(Debug, Default)]
pub struct AppContext {
    pub inventory: Inventory,
    pub ledger: SalesLedger,
    pub config: ConsoleConfig,
}

impl AppContext {
    /// Creates a context with an empty inventory and ledger.
    pub fn new(config: ConsoleConfig) -> Self {
        AppContext {
            inventory: Inventory::new(),
            ledger: SalesLedger::new(),
            config,
        }
    }
}
