//! # Error Types
//!
//! Domain-specific error types for punto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  punto-core errors (this file)                                         │
//! │  └── CoreError        - Lookup, parsing and range failures             │
//! │                                                                         │
//! │  punto-console errors (app crate)                                      │
//! │  └── ConsoleError     - What the operator sees on stderr               │
//! │                                                                         │
//! │  Flow: CoreError → ConsoleError → "error[CODE]: message"               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product is registered under the barcode.
    ///
    /// ## When This Occurs
    /// - Selling a barcode that was never registered
    /// - Selling a barcode whose stock already ran out (entry removed)
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Text could not be read as an amount of money.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidMoney { input: String, reason: String },

    /// A price × quantity product or a running total does not fit in `Money`.
    #[error("Amount out of range")]
    AmountOutOfRange,

    /// Taking `requested` units out of `stock` does not fit in a quantity.
    #[error("Cannot take {requested} units out of a stock of {stock}")]
    QuantityOutOfRange { stock: i64, requested: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
