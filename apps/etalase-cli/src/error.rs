//! # CLI Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in etalase                                │
//! │                                                                         │
//! │  etalase quote --strict --height tall                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function → Result<String, CliError>                     │  │
//! │  │         │                                                        │  │
//! │  │  Config Error? ──── ConfigError::InvalidValue ──┐                │  │
//! │  │         │                                       │                │  │
//! │  │  Validation Error? ─ ValidationError::NotNumeric ┼─► CliError    │  │
//! │  │         │                                       │                │  │
//! │  │  Input File? ────── io / serde_json errors ─────┘                │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  table mode: "error: height must be a number, got \"tall\""  (stderr) │
//! │  json mode:  {"code":"VALIDATION_ERROR","message":"..."}     (stdout) │
//! │  exit status: 2 for validation, 1 for everything else                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::config::ConfigError;
use etalase_core::{CoreError, ValidationError};

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "length must be positive"
/// }
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct CliError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Strict input validation failed
    ValidationError,

    /// Config file, environment or price list is unusable
    ConfigError,

    /// Input file could not be read
    IoError,

    /// Input document is not valid JSON
    ParseError,
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self.code {
            ErrorCode::ValidationError => 2,
            _ => 1,
        }
    }

    /// JSON form for `--format json`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":"INTERNAL","message":{:?}}}"#, self.message)
        })
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(inner) => inner.into(),
            CoreError::InvalidPriceList { .. } => {
                CliError::new(ErrorCode::ConfigError, err.to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::new(ErrorCode::ParseError, format!("Invalid input JSON: {}", err))
    }
}
