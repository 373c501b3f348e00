//! # Pricing Engine
//!
//! Turns `Dimensions` into priced material line items and a total.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PricingEngine::compute                             │
//! │                                                                         │
//! │  Dimensions { length, width, height, sections, flags }                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MaterialQuantities::from_dimensions                                    │
//! │    frame  = 4(L + W + H) + S·W                                          │
//! │    glass  = 2LH + 2WH + 2LW + S·LW                                      │
//! │    rubber = 2(4H + 4L + 4W)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GlassTier::for_height(H)                                               │
//! │    H < 0.6 → reduced   H > 1.5 → increased   else → standard           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [frame, glass, rubber] ++ wheels? ++ iron frame?                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PricingResult { line_items, total_cost = Σ line_total }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Floating Point
//! Quantities are computed in exactly the order shown above and line totals
//! are summed left to right from `0.0`. Results must match those formulas
//! bit for bit.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dimensions::Dimensions;
use crate::error::CoreResult;
use crate::materials::{Material, Unit, WHEELS_PER_CASE};
use crate::money::Rupiah;
use crate::validation::validate_price_list;

// =============================================================================
// Price List
// =============================================================================

/// Unit rates and glass tier thresholds.
///
/// Every field has a default so a config file may override any subset:
/// ```rust
/// use etalase_core::PriceList;
///
/// let prices: PriceList = serde_json::from_str(r#"{"rubberPerMeter": 2500}"#).unwrap();
/// assert_eq!(prices.rubber_per_meter.amount(), 2_500);
/// assert_eq!(prices.frame_per_meter.amount(), 35_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PriceList {
    /// Aluminium profile, per linear meter.
    pub frame_per_meter: Rupiah,

    /// Glass for cases in the standard height range, per m².
    pub glass_per_square_meter: Rupiah,

    /// Glass for low cases (`height < reduced_height_below`), per m².
    pub glass_reduced_height_per_square_meter: Rupiah,

    /// Glass for tall cases (`height > increased_height_above`), per m².
    pub glass_increased_height_per_square_meter: Rupiah,

    /// Rubber seal, per meter.
    pub rubber_per_meter: Rupiah,

    /// One castor wheel.
    pub wheel_per_piece: Rupiah,

    /// Iron reinforcement frame, per linear meter of case length.
    pub iron_frame_per_meter: Rupiah,

    /// Heights strictly below this use the reduced-height glass rate.
    pub reduced_height_below: f64,

    /// Heights strictly above this use the increased-height glass rate.
    pub increased_height_above: f64,
}

impl PriceList {
    /// Checks rates and thresholds. See [`validate_price_list`].
    pub fn validate(&self) -> CoreResult<()> {
        validate_price_list(self)
    }

    /// Glass rate per m² for a tier.
    pub fn glass_rate(&self, tier: GlassTier) -> Rupiah {
        match tier {
            GlassTier::ReducedHeight => self.glass_reduced_height_per_square_meter,
            GlassTier::Standard => self.glass_per_square_meter,
            GlassTier::IncreasedHeight => self.glass_increased_height_per_square_meter,
        }
    }

    /// Unit rate for a material. Glass uses the given tier.
    pub fn rate(&self, material: Material, tier: GlassTier) -> Rupiah {
        match material {
            Material::FrameAluminium => self.frame_per_meter,
            Material::Glass => self.glass_rate(tier),
            Material::Rubber => self.rubber_per_meter,
            Material::Wheels => self.wheel_per_piece,
            Material::IronFrame => self.iron_frame_per_meter,
        }
    }
}

/// Workshop reference prices (IDR).
///
/// ```text
/// Frame Aluminium      35.000 per m1
/// Kaca                200.000 per m²   (250.000 below 0.6 m or above 1.5 m)
/// Karet                 2.000 per m
/// Roda                 15.000 pcs
/// Rangka Besi         200.000 per m1
/// ```
impl Default for PriceList {
    fn default() -> Self {
        PriceList {
            frame_per_meter: Rupiah::from_rupiah(35_000),
            glass_per_square_meter: Rupiah::from_rupiah(200_000),
            glass_reduced_height_per_square_meter: Rupiah::from_rupiah(250_000),
            glass_increased_height_per_square_meter: Rupiah::from_rupiah(250_000),
            rubber_per_meter: Rupiah::from_rupiah(2_000),
            wheel_per_piece: Rupiah::from_rupiah(15_000),
            iron_frame_per_meter: Rupiah::from_rupiah(200_000),
            reduced_height_below: 0.6,
            increased_height_above: 1.5,
        }
    }
}

// =============================================================================
// Glass Tier
// =============================================================================

/// Which glass rate applies, chosen by case height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GlassTier {
    /// `height < reduced_height_below`
    ReducedHeight,
    Standard,
    /// `height > increased_height_above`
    IncreasedHeight,
}

impl GlassTier {
    /// Selects the tier for a height.
    ///
    /// Both boundaries are exclusive. The tall check only runs when the low
    /// check fails, so exactly one tier applies even if the two non-standard
    /// rates differ.
    ///
    /// ## Example
    /// ```rust
    /// use etalase_core::{GlassTier, PriceList};
    ///
    /// let prices = PriceList::default();
    /// assert_eq!(GlassTier::for_height(0.5, &prices), GlassTier::ReducedHeight);
    /// assert_eq!(GlassTier::for_height(0.6, &prices), GlassTier::Standard);
    /// assert_eq!(GlassTier::for_height(1.5, &prices), GlassTier::Standard);
    /// assert_eq!(GlassTier::for_height(1.6, &prices), GlassTier::IncreasedHeight);
    /// ```
    pub fn for_height(height: f64, prices: &PriceList) -> Self {
        if height < prices.reduced_height_below {
            GlassTier::ReducedHeight
        } else if height > prices.increased_height_above {
            GlassTier::IncreasedHeight
        } else {
            GlassTier::Standard
        }
    }
}

// =============================================================================
// Material Quantities
// =============================================================================

/// Raw material usage for one case, before pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MaterialQuantities {
    /// Aluminium profile in meters.
    pub frame_length: f64,
    /// Glass in square meters.
    pub glass_area: f64,
    /// Rubber seal in meters.
    pub rubber_length: f64,
}

impl MaterialQuantities {
    /// Computes usage from dimensions.
    ///
    /// - Frame: the 12 edges of the box (4 of each dimension) plus one
    ///   width-long run per partition.
    /// - Glass: all six faces plus one length × width shelf per partition.
    /// - Rubber: every edge sealed twice.
    ///
    /// ## Example
    /// ```rust
    /// use etalase_core::{Dimensions, MaterialQuantities};
    ///
    /// let q = MaterialQuantities::from_dimensions(&Dimensions::new(2.0, 3.0, 1.0, 2));
    /// assert_eq!(q.frame_length, 30.0);
    /// assert_eq!(q.glass_area, 34.0);
    /// assert_eq!(q.rubber_length, 48.0);
    /// ```
    pub fn from_dimensions(dims: &Dimensions) -> Self {
        let (l, w, h) = (dims.length(), dims.width(), dims.height());
        let s = f64::from(dims.sections());

        let outer_frame = 4.0 * (l + w + h);
        let section_frames = s * w;

        let box_area = 2.0 * (l * h) + 2.0 * (w * h) + 2.0 * (l * w);
        let section_area = s * (l * w);

        MaterialQuantities {
            frame_length: outer_frame + section_frames,
            glass_area: box_area + section_area,
            rubber_length: 2.0 * ((4.0 * h) + (4.0 * l) + (4.0 * w)),
        }
    }
}

// =============================================================================
// Line Items & Result
// =============================================================================

/// One priced material on a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MaterialLineItem {
    pub material: Material,
    /// Trade name ("Kaca", "Roda", ...).
    pub name: String,
    pub unit_price: Rupiah,
    /// Meters, square meters or pieces depending on `unit`.
    pub quantity: f64,
    pub unit: Unit,
    /// `unit_price × quantity`, unrounded.
    pub line_total: f64,
}

impl MaterialLineItem {
    /// Prices `quantity` of `material` at `unit_price`.
    pub fn new(material: Material, unit_price: Rupiah, quantity: f64) -> Self {
        MaterialLineItem {
            material,
            name: material.name().to_string(),
            unit_price,
            quantity,
            unit: material.unit(),
            line_total: unit_price.times(quantity),
        }
    }
}

/// The priced quote for one set of dimensions.
///
/// Line items are in output order: frame, glass, rubber, then wheels and
/// iron frame when enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingResult {
    pub line_items: Vec<MaterialLineItem>,
    /// Sum of every `line_total`, unrounded.
    pub total_cost: f64,
    /// The glass tier that priced the `Kaca` line.
    pub glass_tier: GlassTier,
}

impl PricingResult {
    /// Finds the line item for a material, if it is on the quote.
    pub fn line_item(&self, material: Material) -> Option<&MaterialLineItem> {
        self.line_items.iter().find(|item| item.material == material)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MaterialLineItem> {
        self.line_items.iter()
    }

    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    /// Always false for engine output; frame, glass and rubber are always
    /// present.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

impl<'a> IntoIterator for &'a PricingResult {
    type Item = &'a MaterialLineItem;
    type IntoIter = std::slice::Iter<'a, MaterialLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.line_items.iter()
    }
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Prices display cases against a fixed price list.
///
/// The engine holds no mutable state; `compute` is a pure function of its
/// input, so one engine can be shared freely and results can be memoized by
/// `Dimensions` equality.
///
/// ## Example
/// ```rust
/// use etalase_core::{Dimensions, Material, PricingEngine};
///
/// let engine = PricingEngine::default();
/// let quote = engine.compute(&Dimensions::new(1.0, 1.0, 1.0, 0).with_wheels(true));
///
/// assert_eq!(quote.len(), 4);
/// assert_eq!(quote.line_item(Material::Wheels).unwrap().line_total, 60_000.0);
/// assert_eq!(quote.total_cost, 420_000.0 + 1_200_000.0 + 48_000.0 + 60_000.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingEngine {
    prices: PriceList,
}

impl PricingEngine {
    /// Creates an engine after validating the price list.
    pub fn new(prices: PriceList) -> CoreResult<Self> {
        prices.validate()?;
        Ok(PricingEngine { prices })
    }

    pub fn prices(&self) -> &PriceList {
        &self.prices
    }

    /// Prices a display case. Never fails.
    pub fn compute(&self, dims: &Dimensions) -> PricingResult {
        let quantities = MaterialQuantities::from_dimensions(dims);
        let glass_tier = GlassTier::for_height(dims.height(), &self.prices);
        let line = |material: Material, quantity: f64| {
            MaterialLineItem::new(material, self.prices.rate(material, glass_tier), quantity)
        };

        let always = [
            line(Material::FrameAluminium, quantities.frame_length),
            line(Material::Glass, quantities.glass_area),
            line(Material::Rubber, quantities.rubber_length),
        ];
        let wheels = dims
            .use_wheels()
            .then(|| line(Material::Wheels, f64::from(WHEELS_PER_CASE)));
        let iron_frame = dims
            .use_iron_frame()
            .then(|| line(Material::IronFrame, dims.length()));

        let line_items: Vec<MaterialLineItem> =
            always.into_iter().chain(wheels).chain(iron_frame).collect();
        let total_cost = line_items
            .iter()
            .fold(0.0, |sum, item| sum + item.line_total);

        PricingResult {
            line_items,
            total_cost,
            glass_tier,
        }
    }
}

/// Prices a display case at the reference prices.
pub fn compute(dims: &Dimensions) -> PricingResult {
    PricingEngine::default().compute(dims)
}

// =============================================================================
// Unit Tests
// =============================================================================
