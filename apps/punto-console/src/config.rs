//! # Console Configuration
//!
//! Settings fixed for the lifetime of a session.
//!
//! Configuration is built once at startup, owned by
//! [`AppContext`](crate::state::AppContext) and read-only afterwards. Nothing
//! is loaded from files or the environment: a session has no external state.

use punto_core::Money;

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Store name printed as the receipt banner
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Clear the terminal before each screen (ANSI escape)
    pub clear_screen: bool,

    /// Answer that keeps a repeat loop going, compared case-insensitively
    pub affirmative: String,
}

impl Default for ConsoleConfig {
    /// ## Default Values
    /// - Store: "Abarrotes El Inge"
    /// - Currency: `$`
    /// - Clear screen: enabled
    /// - Affirmative answer: `s` (sí)
    fn default() -> Self {
        ConsoleConfig {
            store_name: "Abarrotes El Inge".to_string(),
            currency_symbol: "$".to_string(),
            clear_screen: true,
            affirmative: "s".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use punto_console::config::ConsoleConfig;
    /// use punto_core::Money;
    ///
    /// let config = ConsoleConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}
