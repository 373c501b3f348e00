//! # Dimensions
//!
//! The input side of a quote: the physical size of the display case and the
//! two optional features.
//!
//! ## Two Shapes of Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      From Host to Engine                                │
//! │                                                                         │
//! │  Host (form, JSON body, CLI flags)                                      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  DimensionsInput   every field optional, any JSON value                 │
//! │     │                                                                   │
//! │     ├── lenient: Dimensions::from(input)   "abc" → 0, -2 → 0           │
//! │     │                                                                   │
//! │     └── strict:  validation::validate_dimensions(&input)?              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Dimensions        finite, non-negative, immutable                      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  PricingEngine::compute(&dimensions)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coercion Rules
//! - Missing field → default (`1` for sizes and sections, `false` for flags)
//! - Number or numeric string → its value (`0x`, `0o`, `0b` literals too)
//! - Empty string or `null` → `0`
//! - Anything else, NaN, infinities, negatives → `0`
//! - `sections` is truncated toward zero

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Default for `length`, `width` and `height` when the host leaves them out.
pub const DEFAULT_SIZE_METERS: f64 = 1.0;

/// Default partition count when the host leaves it out.
pub const DEFAULT_SECTIONS: u32 = 1;

// =============================================================================
// Dimensions
// =============================================================================

/// Coerced, immutable input to the pricing engine.
///
/// Fields are private so that every value in circulation has passed through
/// coercion: sizes are finite and `>= 0`.
///
/// ## Example
/// ```rust
/// use etalase_core::Dimensions;
///
/// let case = Dimensions::new(1.2, 0.5, 1.0, 2).with_wheels(true);
/// assert_eq!(case.length(), 1.2);
/// assert!(case.use_wheels());
/// assert!(!case.use_iron_frame());
///
/// // Garbage in, zero out
/// let broken = Dimensions::new(f64::NAN, -3.0, f64::INFINITY, 0);
/// assert_eq!((broken.length(), broken.width(), broken.height()), (0.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dimensions {
    /// Length in meters.
    length: f64,
    /// Width (depth) in meters.
    width: f64,
    /// Height in meters.
    height: f64,
    /// Number of internal glass partitions.
    sections: u32,
    use_wheels: bool,
    use_iron_frame: bool,
}

impl Dimensions {
    /// Creates dimensions with both features off.
    ///
    /// Non-finite and negative sizes are coerced to `0`.
    pub fn new(length: f64, width: f64, height: f64, sections: u32) -> Self {
        Dimensions {
            length: sanitize(length),
            width: sanitize(width),
            height: sanitize(height),
            sections,
            use_wheels: false,
            use_iron_frame: false,
        }
    }

    /// Returns a copy with the wheels option set.
    #[must_use]
    pub fn with_wheels(mut self, use_wheels: bool) -> Self {
        self.use_wheels = use_wheels;
        self
    }

    /// Returns a copy with the iron reinforcement frame option set.
    #[must_use]
    pub fn with_iron_frame(mut self, use_iron_frame: bool) -> Self {
        self.use_iron_frame = use_iron_frame;
        self
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn sections(&self) -> u32 {
        self.sections
    }

    #[inline]
    pub fn use_wheels(&self) -> bool {
        self.use_wheels
    }

    #[inline]
    pub fn use_iron_frame(&self) -> bool {
        self.use_iron_frame
    }
}

/// A 1 m cube with one partition and no extras.
impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::new(
            DEFAULT_SIZE_METERS,
            DEFAULT_SIZE_METERS,
            DEFAULT_SIZE_METERS,
            DEFAULT_SECTIONS,
        )
    }
}

/// Lenient coercion: never fails, degrades bad values to zero.
impl From<DimensionsInput> for Dimensions {
    fn from(input: DimensionsInput) -> Self {
        Dimensions::from(&input)
    }
}

impl From<&DimensionsInput> for Dimensions {
    fn from(input: &DimensionsInput) -> Self {
        let size = |field: &Option<Value>| {
            field
                .as_ref()
                .map_or(DEFAULT_SIZE_METERS, coerce_number)
        };

        Dimensions::new(
            size(&input.length),
            size(&input.width),
            size(&input.height),
            input
                .sections
                .as_ref()
                .map_or(DEFAULT_SECTIONS, coerce_sections),
        )
        .with_wheels(input.use_wheels.as_ref().is_some_and(coerce_flag))
        .with_iron_frame(input.use_iron_frame.as_ref().is_some_and(coerce_flag))
    }
}

/// Deserializes through [`DimensionsInput`] so JSON bodies get the same
/// coercion as every other host input.
impl<'de> Deserialize<'de> for Dimensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        DimensionsInput::deserialize(deserializer).map(Dimensions::from)
    }
}

// =============================================================================
// Dimensions Input
// =============================================================================

/// Raw dimensions as a host received them.
///
/// A field that is present but `null` holds `Some(Value::Null)`, which
/// coerces to `0`. Only an absent field takes the default.
///
/// ## Example
/// ```rust
/// use etalase_core::{Dimensions, DimensionsInput};
///
/// let input: DimensionsInput =
///     serde_json::from_str(r#"{"length": "2", "width": 3, "height": "abc"}"#).unwrap();
/// let dims = Dimensions::from(input);
///
/// assert_eq!(dims.length(), 2.0);
/// assert_eq!(dims.width(), 3.0);
/// assert_eq!(dims.height(), 0.0);   // non-numeric
/// assert_eq!(dims.sections(), 1);   // missing → default
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DimensionsInput {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub length: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub height: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub sections: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub use_wheels: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub use_iron_frame: Option<Value>,
}

/// Keeps `null` as `Some(Value::Null)`; absent fields fall back to `None`
/// through `#[serde(default)]`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl DimensionsInput {
    /// Layers `overrides` on top of `self`; fields set in `overrides` win.
    #[must_use]
    pub fn overlay(self, overrides: DimensionsInput) -> Self {
        DimensionsInput {
            length: overrides.length.or(self.length),
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            sections: overrides.sections.or(self.sections),
            use_wheels: overrides.use_wheels.or(self.use_wheels),
            use_iron_frame: overrides.use_iron_frame.or(self.use_iron_frame),
        }
    }
}

// =============================================================================
// Coercion
// =============================================================================

/// Reads a JSON number or a numeric string. Returns `None` for anything else,
/// including the empty string.
pub(crate) fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s.trim()),
        _ => None,
    }
}

/// Parses decimal text or an unsigned `0x`/`0o`/`0b` integer literal.
fn parse_number(text: &str) -> Option<f64> {
    let radix = match text.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ if text.is_empty() => return None,
        _ => return text.parse::<f64>().ok(),
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc: f64, ch| {
        ch.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

/// Coerces any JSON value to a finite, non-negative number.
pub fn coerce_number(value: &Value) -> f64 {
    sanitize(numeric_value(value).unwrap_or(0.0))
}

/// Coerces any JSON value to a partition count.
pub fn coerce_sections(value: &Value) -> u32 {
    // float → int `as` saturates at u32::MAX
    coerce_number(value).trunc() as u32
}

/// Coerces any JSON value to a feature flag.
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        ),
        _ => false,
    }
}

/// NaN, infinities and negatives (including `-0.0`) become `0.0`.
#[inline]
fn sanitize(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 {
        x
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_unit_cube_with_one_section() {
        let dims = Dimensions::default();
        assert_eq!(dims.length(), 1.0);
        assert_eq!(dims.width(), 1.0);
        assert_eq!(dims.height(), 1.0);
        assert_eq!(dims.sections(), 1);
        assert!(!dims.use_wheels());
        assert!(!dims.use_iron_frame());
    }

    #[test]
    fn test_new_sanitizes_sizes() {
        let dims = Dimensions::new(-1.0, f64::NAN, f64::NEG_INFINITY, 3);
        assert_eq!(dims.length(), 0.0);
        assert_eq!(dims.width(), 0.0);
        assert_eq!(dims.height(), 0.0);
        assert_eq!(dims.sections(), 3);

        let neg_zero = Dimensions::new(-0.0, 1.0, 1.0, 0);
        assert!(neg_zero.length().is_sign_positive());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(1.5)), 1.5);
        assert_eq!(coerce_number(&json!("2.25")), 2.25);
        assert_eq!(coerce_number(&json!("  0.6 ")), 0.6);
        assert_eq!(coerce_number(&json!("")), 0.0);
        assert_eq!(coerce_number(&json!("abc")), 0.0);
        assert_eq!(coerce_number(&json!("NaN")), 0.0);
        assert_eq!(coerce_number(&json!("inf")), 0.0);
        assert_eq!(coerce_number(&json!(-4)), 0.0);
        assert_eq!(coerce_number(&json!(true)), 0.0);
        assert_eq!(coerce_number(&json!([1])), 0.0);
        assert_eq!(coerce_number(&Value::Null), 0.0);
    }

    #[test]
    fn test_coerce_number_radix_literals() {
        assert_eq!(coerce_number(&json!("0x10")), 16.0);
        assert_eq!(coerce_number(&json!("0X1f")), 31.0);
        assert_eq!(coerce_number(&json!("0o17")), 15.0);
        assert_eq!(coerce_number(&json!("0b101")), 5.0);
        assert_eq!(coerce_number(&json!(" 0x2 ")), 2.0);
        assert_eq!(coerce_number(&json!("0x")), 0.0);
        assert_eq!(coerce_number(&json!("0x1g")), 0.0);
        assert_eq!(coerce_number(&json!("0b2")), 0.0);
        assert_eq!(coerce_number(&json!("-0x10")), 0.0);
        assert_eq!(coerce_sections(&json!("0x3")), 3);
    }

    #[test]
    fn test_coerce_sections_truncates() {
        assert_eq!(coerce_sections(&json!(2)), 2);
        assert_eq!(coerce_sections(&json!(2.9)), 2);
        assert_eq!(coerce_sections(&json!("3")), 3);
        assert_eq!(coerce_sections(&json!(-1)), 0);
        assert_eq!(coerce_sections(&json!("x")), 0);
        assert_eq!(coerce_sections(&json!(1e20)), u32::MAX);
    }

    #[test]
    fn test_coerce_flag() {
        assert!(coerce_flag(&json!(true)));
        assert!(!coerce_flag(&json!(false)));
        assert!(coerce_flag(&json!(1)));
        assert!(!coerce_flag(&json!(0)));
        assert!(coerce_flag(&json!("Yes")));
        assert!(coerce_flag(&json!("on")));
        assert!(!coerce_flag(&json!("nope")));
        assert!(!coerce_flag(&Value::Null));
    }

    #[test]
    fn test_from_input_applies_defaults_for_missing_fields() {
        let dims = Dimensions::from(DimensionsInput::default());
        assert_eq!(dims, Dimensions::default());
    }

    #[test]
    fn test_deserialize_coerces() {
        let dims: Dimensions = serde_json::from_value(json!({
            "length": "2",
            "width": -3,
            "height": null,
            "sections": "abc",
            "useWheels": true,
            "useIronFrame": "false"
        }))
        .unwrap();

        assert_eq!(dims.length(), 2.0);
        assert_eq!(dims.width(), 0.0);
        assert_eq!(dims.height(), 0.0); // null → 0, not the default
        assert_eq!(dims.sections(), 0);
        assert!(dims.use_wheels());
        assert!(!dims.use_iron_frame());
    }

    #[test]
    fn test_null_field_is_zero_not_default() {
        let dims: Dimensions =
            serde_json::from_str(r#"{"length":1,"width":1,"height":null,"sections":0}"#).unwrap();
        assert_eq!(dims.height(), 0.0);

        let glass = crate::compute(&dims)
            .line_item(crate::Material::Glass)
            .unwrap()
            .quantity;
        assert_eq!(glass, 2.0); // top and bottom only

        let input: DimensionsInput =
            serde_json::from_str(r#"{"sections":null,"useWheels":null}"#).unwrap();
        assert_eq!(input.sections, Some(Value::Null));
        assert_eq!(input.length, None);

        let dims = Dimensions::from(input);
        assert_eq!(dims.sections(), 0);
        assert_eq!(dims.length(), 1.0);
        assert!(!dims.use_wheels());
    }

    #[test]
    fn test_input_serializes_without_absent_fields() {
        let input = DimensionsInput {
            width: Some(Value::Null),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({"width": null}));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let dims = Dimensions::new(2.0, 1.0, 0.5, 0).with_iron_frame(true);
        let value = serde_json::to_value(dims).unwrap();
        assert_eq!(value["length"], json!(2.0));
        assert_eq!(value["useWheels"], json!(false));
        assert_eq!(value["useIronFrame"], json!(true));

        let back: Dimensions = serde_json::from_value(value).unwrap();
        assert_eq!(back, dims);
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let file = DimensionsInput {
            length: Some(json!(2)),
            width: Some(json!(1)),
            use_wheels: Some(json!(true)),
            ..Default::default()
        };
        let flags = DimensionsInput {
            length: Some(json!("3")),
            ..Default::default()
        };

        let merged = file.overlay(flags);
        assert_eq!(merged.length, Some(json!("3")));
        assert_eq!(merged.width, Some(json!(1)));
        assert_eq!(merged.use_wheels, Some(json!(true)));
        assert_eq!(merged.height, None);
    }
}
