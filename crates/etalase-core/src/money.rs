//! # Money Module
//!
//! Provides the `Rupiah` type for unit prices.
//!
//! ## Where Integers Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UNIT PRICES vs LINE TOTALS                                             │
//! │                                                                         │
//! │  Unit prices are whole rupiah:                                          │
//! │    Frame Aluminium  Rp 35.000 per m1    → Rupiah(35_000)               │
//! │                                                                         │
//! │  Quantities are measured, not counted:                                  │
//! │    frame length = 4 × (1.2 + 0.5 + 1.0) + 2 × 0.5 = 11.8 m             │
//! │                                                                         │
//! │  So a line total is Rupiah × f64 and stays f64:                         │
//! │    35.000 × 11.8 = 413.000 (exact only after display rounding)         │
//! │                                                                         │
//! │  Nothing is rounded until the host formats the amount for display.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use etalase_core::money::Rupiah;
//!
//! let frame_rate = Rupiah::from_rupiah(35_000);
//! assert_eq!(frame_rate.times(12.0), 420_000.0);
//! assert_eq!(frame_rate.to_string(), "Rp 35.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Rupiah Type
// =============================================================================

/// A whole-rupiah amount (IDR has no minor unit in everyday pricing).
///
/// Serialized as a plain integer so hosts see `"unitPrice": 35000`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Rupiah(i64);

impl Rupiah {
    /// Creates an amount from whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use etalase_core::money::Rupiah;
    ///
    /// let wheel = Rupiah::from_rupiah(15_000);
    /// assert_eq!(wheel.amount(), 15_000);
    /// ```
    #[inline]
    pub const fn from_rupiah(amount: i64) -> Self {
        Rupiah(amount)
    }

    /// Returns the amount in whole rupiah.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns the amount as a float for quantity multiplication.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Prices a measured quantity at this unit rate.
    ///
    /// ## Example
    /// ```rust
    /// use etalase_core::money::Rupiah;
    ///
    /// // 6 m² of standard glass
    /// let glass = Rupiah::from_rupiah(200_000);
    /// assert_eq!(glass.times(6.0), 1_200_000.0);
    /// ```
    ///
    /// The result is not rounded.
    #[inline]
    pub fn times(&self, quantity: f64) -> f64 {
        self.as_f64() * quantity
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering: `Rp 35.000`.
///
/// ## Note
/// Hosts should do their own locale formatting; this is for logs and tests.
impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp {}", sign, grouped)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
