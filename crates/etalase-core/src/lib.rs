//! # etalase-core: Pricing Engine for Aluminium Glass Display Cases
//!
//! This crate prices a custom "etalase" (aluminium-framed glass display
//! case) from its dimensions. It is pure business logic with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Etalase Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Host (etalase-cli, web form, ...)                │   │
//! │  │    input fields ──► DimensionsInput ──► render line items       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ etalase-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌───────────┐ ┌───────────┐ ┌────────────┐   │   │
//! │  │   │ dimensions │ │ materials │ │  pricing  │ │ validation │   │   │
//! │  │   │ Dimensions │ │ Material  │ │ PriceList │ │  strict    │   │   │
//! │  │   │ coercion   │ │ Unit      │ │ Engine    │ │  checks    │   │   │
//! │  │   └────────────┘ └───────────┘ └───────────┘ └────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • compute() NEVER FAILS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`dimensions`] - Input records and lenient coercion
//! - [`materials`] - Material catalogue and pricing units
//! - [`pricing`] - Price list, glass tiers and the engine
//! - [`money`] - `Rupiah` unit prices
//! - [`validation`] - Strict input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same `Dimensions` in, bit-identical `PricingResult` out
//! 2. **Total**: bad input degrades to zero quantities, it never panics or errors
//! 3. **No Early Rounding**: line totals and the grand total stay `f64`
//! 4. **Formatting Is the Host's Job**: no currency rendering in results
//!
//! ## Example Usage
//!
//! ```rust
//! use etalase_core::{compute, Dimensions, Material};
//!
//! let case = Dimensions::new(2.0, 3.0, 1.0, 2);
//! let quote = compute(&case);
//!
//! assert_eq!(quote.line_item(Material::FrameAluminium).unwrap().quantity, 30.0);
//! assert_eq!(quote.line_item(Material::Glass).unwrap().quantity, 34.0);
//! assert_eq!(quote.line_item(Material::Rubber).unwrap().quantity, 48.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dimensions;
pub mod error;
pub mod materials;
pub mod money;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dimensions::{Dimensions, DimensionsInput};
pub use error::{CoreError, CoreResult, ValidationError};
pub use materials::{Material, Unit, WHEELS_PER_CASE};
pub use money::Rupiah;
pub use pricing::{
    compute, GlassTier, MaterialLineItem, MaterialQuantities, PriceList, PricingEngine,
    PricingResult,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// ISO 4217 code of the currency every `Rupiah` amount is in.
///
/// Results carry no currency; hosts print this next to totals.
pub const CURRENCY_CODE: &str = "IDR";
