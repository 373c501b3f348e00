//! # Validation Module
//!
//! Strict input validation for hosts that prefer to reject bad input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Input Paths                                    │
//! │                                                                         │
//! │  DimensionsInput                                                        │
//! │       │                                                                 │
//! │       ├── Lenient (default) ── Dimensions::from(input)                 │
//! │       │     "abc" → 0, -2 → 0, never fails                             │
//! │       │                                                                 │
//! │       └── Strict ───────────── validate_dimensions(&input)?            │
//! │             "abc" → NotNumeric, -2 → MustBePositive                    │
//! │                                                                         │
//! │  Both produce the same Dimensions for well-formed input.               │
//! │  The engine itself never validates: it is total over Dimensions.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use etalase_core::validation::validate_dimensions;
//! use etalase_core::DimensionsInput;
//!
//! let input: DimensionsInput =
//!     serde_json::from_str(r#"{"length": 2, "width": 0.5, "height": "1.2"}"#).unwrap();
//! let dims = validate_dimensions(&input).unwrap();
//! assert_eq!(dims.height(), 1.2);
//!
//! let bad: DimensionsInput = serde_json::from_str(r#"{"length": "two"}"#).unwrap();
//! assert!(validate_dimensions(&bad).is_err());
//! ```

use serde_json::Value;

use crate::dimensions::{numeric_value, DEFAULT_SECTIONS, DEFAULT_SIZE_METERS};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Rupiah;
use crate::pricing::PriceList;
use crate::{Dimensions, DimensionsInput};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Dimension Validators
// =============================================================================

/// Validates raw dimensions and builds `Dimensions` from them.
///
/// ## Rules
/// - Missing fields take the defaults (`1` for sizes and sections, `false`
///   for flags); a field that is present but `null` is an error
/// - `length`, `width`, `height` must be finite numbers `> 0`
/// - `sections` must be a whole number in `0..=u32::MAX`
/// - Flags must be JSON booleans
///
/// Numeric strings such as `"1.5"` are accepted, as form fields send them.
pub fn validate_dimensions(input: &DimensionsInput) -> ValidationResult<Dimensions> {
    let length = validate_size("length", input.length.as_ref())?;
    let width = validate_size("width", input.width.as_ref())?;
    let height = validate_size("height", input.height.as_ref())?;
    let sections = validate_sections(input.sections.as_ref())?;
    let use_wheels = validate_flag("useWheels", input.use_wheels.as_ref())?;
    let use_iron_frame = validate_flag("useIronFrame", input.use_iron_frame.as_ref())?;

    Ok(Dimensions::new(length, width, height, sections)
        .with_wheels(use_wheels)
        .with_iron_frame(use_iron_frame))
}

/// Validates one size in meters.
pub fn validate_size(field: &str, value: Option<&Value>) -> ValidationResult<f64> {
    let Some(value) = value else {
        return Ok(DEFAULT_SIZE_METERS);
    };

    let size = finite_number(field, value)?;
    if size <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(size)
}

/// Validates the partition count.
///
/// ## Example
/// ```rust
/// use etalase_core::validation::validate_sections;
/// use serde_json::json;
///
/// assert_eq!(validate_sections(Some(&json!(3))).unwrap(), 3);
/// assert_eq!(validate_sections(None).unwrap(), 1);
/// assert!(validate_sections(Some(&json!(1.5))).is_err());
/// assert!(validate_sections(Some(&json!(-1))).is_err());
/// ```
pub fn validate_sections(value: Option<&Value>) -> ValidationResult<u32> {
    let Some(value) = value else {
        return Ok(DEFAULT_SECTIONS);
    };

    let sections = finite_number("sections", value)?;

    if sections < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "sections".to_string(),
        });
    }

    if sections.fract() != 0.0 {
        return Err(ValidationError::NotWholeNumber {
            field: "sections".to_string(),
        });
    }

    if sections > u32::MAX as f64 {
        return Err(ValidationError::OutOfRange {
            field: "sections".to_string(),
            min: 0,
            max: u32::MAX as i64,
        });
    }

    Ok(sections as u32)
}

/// Validates a feature flag. Only JSON booleans are accepted.
pub fn validate_flag(field: &str, value: Option<&Value>) -> ValidationResult<bool> {
    match value {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("must be true or false, got {}", other),
        }),
    }
}

fn finite_number(field: &str, value: &Value) -> ValidationResult<f64> {
    let number = numeric_value(value).ok_or_else(|| ValidationError::NotNumeric {
        field: field.to_string(),
        value: value.to_string(),
    })?;

    if !number.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(number)
}

// =============================================================================
// Price List Validators
// =============================================================================

/// Validates a price list before it is handed to the engine.
///
/// ## Rules
/// - Every unit rate must be `>= 0` (free materials are allowed)
/// - Both glass tier thresholds must be finite
/// - `reduced_height_below <= increased_height_above`, so the two
///   non-standard tiers can never overlap
pub fn validate_price_list(prices: &PriceList) -> CoreResult<()> {
    let rates: [(&str, Rupiah); 7] = [
        ("framePerMeter", prices.frame_per_meter),
        ("glassPerSquareMeter", prices.glass_per_square_meter),
        (
            "glassReducedHeightPerSquareMeter",
            prices.glass_reduced_height_per_square_meter,
        ),
        (
            "glassIncreasedHeightPerSquareMeter",
            prices.glass_increased_height_per_square_meter,
        ),
        ("rubberPerMeter", prices.rubber_per_meter),
        ("wheelPerPiece", prices.wheel_per_piece),
        ("ironFramePerMeter", prices.iron_frame_per_meter),
    ];

    if let Some((field, _)) = rates.iter().find(|(_, rate)| rate.is_negative()) {
        return Err(CoreError::InvalidPriceList {
            field: field.to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    for (field, threshold) in [
        ("reducedHeightBelow", prices.reduced_height_below),
        ("increasedHeightAbove", prices.increased_height_above),
    ] {
        if !threshold.is_finite() {
            return Err(CoreError::InvalidPriceList {
                field: field.to_string(),
                reason: "must be a finite number".to_string(),
            });
        }
    }

    if prices.reduced_height_below > prices.increased_height_above {
        return Err(CoreError::InvalidPriceList {
            field: "reducedHeightBelow".to_string(),
            reason: format!(
                "({}) must not exceed increasedHeightAbove ({})",
                prices.reduced_height_below, prices.increased_height_above
            ),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> DimensionsInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_validate_dimensions_accepts_well_formed_input() {
        let dims = validate_dimensions(&input(json!({
            "length": 2,
            "width": "3",
            "height": 1,
            "sections": 2,
            "useWheels": true
        })))
        .unwrap();

        assert_eq!(dims, Dimensions::new(2.0, 3.0, 1.0, 2).with_wheels(true));
    }

    #[test]
    fn test_validate_dimensions_defaults_match_lenient_path() {
        let empty = DimensionsInput::default();
        assert_eq!(validate_dimensions(&empty).unwrap(), Dimensions::from(&empty));
    }

    #[test]
    fn test_validate_size() {
        assert_eq!(validate_size("length", Some(&json!(0.6))).unwrap(), 0.6);
        assert_eq!(validate_size("length", None).unwrap(), 1.0);

        assert_eq!(
            validate_size("length", Some(&json!(0))).unwrap_err(),
            ValidationError::MustBePositive {
                field: "length".to_string()
            }
        );
        assert!(matches!(
            validate_size("width", Some(&json!("wide"))),
            Err(ValidationError::NotNumeric { .. })
        ));
        assert!(matches!(
            validate_size("width", Some(&json!(""))),
            Err(ValidationError::NotNumeric { .. })
        ));
        assert!(matches!(
            validate_size("height", Some(&json!("inf"))),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            validate_size("height", Some(&json!(-1.0))),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_null_size_is_rejected_not_defaulted() {
        let err = validate_dimensions(&input(json!({"length": 1, "height": null}))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotNumeric {
                field: "height".to_string(),
                value: "null".to_string(),
            }
        );

        assert!(matches!(
            validate_sections(Some(&Value::Null)),
            Err(ValidationError::NotNumeric { .. })
        ));
        assert!(validate_flag("useIronFrame", Some(&Value::Null)).is_err());
    }

    #[test]
    fn test_validate_size_accepts_radix_literals() {
        assert_eq!(validate_size("length", Some(&json!("0x2"))).unwrap(), 2.0);
        assert_eq!(validate_sections(Some(&json!("0b11"))).unwrap(), 3);
    }

    #[test]
    fn test_validate_sections() {
        assert_eq!(validate_sections(Some(&json!(0))).unwrap(), 0);
        assert_eq!(validate_sections(Some(&json!("4"))).unwrap(), 4);

        assert!(matches!(
            validate_sections(Some(&json!(2.5))),
            Err(ValidationError::NotWholeNumber { .. })
        ));
        assert!(matches!(
            validate_sections(Some(&json!(-2))),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            validate_sections(Some(&json!(1e12))),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_flag() {
        assert!(validate_flag("useWheels", Some(&json!(true))).unwrap());
        assert!(!validate_flag("useWheels", None).unwrap());
        assert!(matches!(
            validate_flag("useWheels", Some(&json!("yes"))),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_price_list() {
        assert!(validate_price_list(&PriceList::default()).is_ok());

        let negative = PriceList {
            wheel_per_piece: Rupiah::from_rupiah(-1),
            ..PriceList::default()
        };
        let err = validate_price_list(&negative).unwrap_err();
        assert!(err.to_string().contains("wheelPerPiece"));

        let inverted = PriceList {
            reduced_height_below: 2.0,
            increased_height_above: 1.0,
            ..PriceList::default()
        };
        assert!(validate_price_list(&inverted).is_err());

        let nan = PriceList {
            increased_height_above: f64::NAN,
            ..PriceList::default()
        };
        assert!(validate_price_list(&nan).is_err());

        let free_rubber = PriceList {
            rubber_per_meter: Rupiah::from_rupiah(0),
            ..PriceList::default()
        };
        assert!(validate_price_list(&free_rubber).is_ok());
    }
}
