//! # Console Error Type
//!
//! Unified error type for the interactive controller.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Punto POS                              │
//! │                                                                         │
//! │  Operator input ──► Controller ──► punto-core                           │
//! │                         │              │                                │
//! │                         │      CoreError::ProductNotFound               │
//! │                         │              │                                │
//! │                         ▼              ▼                                │
//! │              ConsoleError (Parse / NotFound / OutOfRange / ...)         │
//! │                         │                                               │
//! │                         ▼                                               │
//! │   stderr: "error[NOT_FOUND]: no existe un producto con código ... 999"  │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                   menu shown again                                      │
//! │                                                                         │
//! │  Only Io leaves the controller; EndOfInput ends the session cleanly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;

use punto_core::CoreError;
use thiserror::Error;

/// Errors raised while running a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A menu selection or numeric field could not be read as a number.
    #[error("'{input}' no es un valor válido para {field}")]
    Parse { field: String, input: String },

    /// The menu selection is a number but not one of the listed options.
    #[error("La opción {selection} no existe. Ingrésala de vuelta.")]
    InvalidOption { selection: i64 },

    /// No product is registered under the barcode.
    #[error("no existe un producto con código de barras {barcode}")]
    NotFound { barcode: String },

    /// A quantity or amount too large to compute with.
    #[error("{detail}")]
    OutOfRange { detail: String },

    /// Standard input was closed.
    #[error("fin de la entrada")]
    EndOfInput,

    /// Reading from or writing to the terminal failed.
    #[error("error de entrada/salida: {0}")]
    Io(#[from] io::Error),
}

/// Error codes printed in front of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParseError,
    InvalidOption,
    NotFound,
    OutOfRange,
    EndOfInput,
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::InvalidOption => "INVALID_OPTION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::EndOfInput => "END_OF_INPUT",
            ErrorCode::IoError => "IO_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConsoleError {
    /// Creates a parse error for a named field.
    pub fn parse(field: &str, input: &str) -> Self {
        ConsoleError::Parse {
            field: field.to_string(),
            input: input.to_string(),
        }
    }

    /// Machine-readable classification of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConsoleError::Parse { .. } => ErrorCode::ParseError,
            ConsoleError::InvalidOption { .. } => ErrorCode::InvalidOption,
            ConsoleError::NotFound { .. } => ErrorCode::NotFound,
            ConsoleError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ConsoleError::EndOfInput => ErrorCode::EndOfInput,
            ConsoleError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Errors the controller reports and recovers from.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ConsoleError::Io(_) | ConsoleError::EndOfInput)
    }
}

/// Converts core errors to operator-facing errors.
impl From<CoreError> for ConsoleError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(barcode) => ConsoleError::NotFound { barcode },
            CoreError::InvalidMoney { input, .. } => ConsoleError::Parse {
                field: "precio".to_string(),
                input,
            },
            CoreError::AmountOutOfRange => ConsoleError::OutOfRange {
                detail: "el importe es demasiado grande".to_string(),
            },
            CoreError::QuantityOutOfRange { stock, requested } => ConsoleError::OutOfRange {
                detail: format!(
                    "no se pueden descontar {} unidades de una existencia de {}",
                    requested, stock
                ),
            },
        }
    }
}

/// Convenience type alias for Results with ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
