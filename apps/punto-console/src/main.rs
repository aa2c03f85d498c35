//! # Punto POS Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Create the application context (inventory, ledger, config)
//! 3. Run the interactive menu until "Salir" or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    punto_console::run()
}
