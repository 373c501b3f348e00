//! # Error Types
//!
//! Domain-specific error types for etalase-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  etalase-core errors (this file)                                       │
//! │  ├── CoreError        - Price list and domain errors                   │
//! │  └── ValidationError  - Strict input validation failures               │
//! │                                                                         │
//! │  etalase-cli errors (host)                                             │
//! │  └── CliError         - What the terminal sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr / JSON          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note
//! `PricingEngine::compute` itself never returns an error. These types only
//! appear on the strict validation path and when loading a price list.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A configured price list cannot be used.
    ///
    /// ## When This Occurs
    /// - A unit rate is negative
    /// - A glass tier threshold is NaN or infinite
    /// - The reduced-height threshold is above the increased-height one
    #[error("Invalid price list: {field} {reason}")]
    InvalidPriceList { field: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for hosts that reject bad input instead of
/// coercing it.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Value is neither a number nor a numeric string.
    #[error("{field} must be a number, got {value}")]
    NotNumeric { field: String, value: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be an integer.
    #[error("{field} must be a whole number")]
    NotWholeNumber { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a flag that is not a boolean).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
