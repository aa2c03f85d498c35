//! # Punto Console Library
//!
//! Core library for the Punto POS terminal application.
//! This is the main entry point that wires logging, state and the menu loop.
//!
//! ## Module Organization
//! ```text
//! punto_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state.rs        ◄─── AppContext: Inventory, SalesLedger, Config
//! ├── config.rs       ◄─── ConsoleConfig and currency formatting
//! ├── controller.rs   ◄─── Menu state machine and screens
//! ├── prompt.rs       ◄─── Line reading, re-prompting, (s/n) answers
//! ├── render.rs       ◄─── ASCII tables for inventory and receipts
//! └── error.rs        ◄─── ConsoleError and diagnostic codes
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod prompt;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::ConsoleConfig;
use controller::Console;
use error::ConsoleResult;
use prompt::Prompter;
use state::AppContext;

/// Runs one session against `ctx` over the given streams.
///
/// Returns once the operator picks "Salir" or input ends. Tests call this
/// with in-memory buffers; [`run`] passes the process's stdin/stdout/stderr.
pub fn run_session<R, W, E>(ctx: &mut AppContext, input: R, out: W, err: E) -> ConsoleResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let prompter = Prompter::new(input, out, err);
    Console::new(ctx, prompter).run()
}

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: errors only, override with RUST_LOG                      │
/// │                                                                         │
/// │  2. Initialize State ─────────────────────────────────────────────────► │
/// │     • Empty Inventory and SalesLedger                                   │
/// │     • Default ConsoleConfig                                             │
/// │                                                                         │
/// │  3. Run the menu loop on stdin/stdout ────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    info!("Starting Punto POS console");
    let mut ctx = AppContext::new(ConsoleConfig::default());

    let stdin = io::stdin();
    let result = run_session(&mut ctx, stdin.lock(), io::stdout(), io::stderr());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Console session failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show screen changes and reported input errors
/// - `RUST_LOG=punto_console=info` - Show registered products and sales
/// - Default: errors only, so the menu on stdout stays readable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
