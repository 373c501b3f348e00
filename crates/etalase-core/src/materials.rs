//! # Materials
//!
//! The raw materials that go into a display case, and the units they are
//! sold in.
//!
//! ```text
//! ┌────────────────────┬──────────────┬──────────┬─────────────────────────┐
//! │ Material           │ Name         │ Unit     │ Present                 │
//! ├────────────────────┼──────────────┼──────────┼─────────────────────────┤
//! │ FrameAluminium     │ Frame Alum.  │ per m1   │ always                  │
//! │ Glass              │ Kaca         │ per m²   │ always                  │
//! │ Rubber             │ Karet        │ per m    │ always                  │
//! │ Wheels             │ Roda         │ pcs      │ use_wheels              │
//! │ IronFrame          │ Rangka Besi  │ per m1   │ use_iron_frame          │
//! └────────────────────┴──────────────┴──────────┴─────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Wheels are sold as a set, one per corner.
pub const WHEELS_PER_CASE: u32 = 4;

// =============================================================================
// Material
// =============================================================================

/// A material line in a quote. Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Material {
    /// Aluminium profile along every edge and partition.
    FrameAluminium,
    /// Glass panels on all six faces plus partitions.
    Glass,
    /// Rubber seal along the edges.
    Rubber,
    /// Castor wheels (optional).
    Wheels,
    /// Iron base reinforcement (optional).
    IronFrame,
}

impl Material {
    /// Every material in output order.
    pub const ALL: [Material; 5] = [
        Material::FrameAluminium,
        Material::Glass,
        Material::Rubber,
        Material::Wheels,
        Material::IronFrame,
    ];

    /// Trade name used on quotes.
    pub const fn name(&self) -> &'static str {
        match self {
            Material::FrameAluminium => "Frame Aluminium",
            Material::Glass => "Kaca",
            Material::Rubber => "Karet",
            Material::Wheels => "Roda",
            Material::IronFrame => "Rangka Besi",
        }
    }

    /// Unit the material is priced in.
    pub const fn unit(&self) -> Unit {
        match self {
            Material::FrameAluminium | Material::IronFrame => Unit::MeterRun,
            Material::Glass => Unit::SquareMeter,
            Material::Rubber => Unit::Meter,
            Material::Wheels => Unit::Piece,
        }
    }

    /// Whether the material only appears when a feature flag is set.
    pub const fn is_optional(&self) -> bool {
        matches!(self, Material::Wheels | Material::IronFrame)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit
// =============================================================================

/// Pricing unit. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Unit {
    /// Linear meter of profile ("m1" in the trade).
    #[serde(rename = "per m1")]
    MeterRun,
    #[serde(rename = "per m²")]
    SquareMeter,
    #[serde(rename = "per m")]
    Meter,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    pub const fn label(&self) -> &'static str {
        match self {
            Unit::MeterRun => "per m1",
            Unit::SquareMeter => "per m²",
            Unit::Meter => "per m",
            Unit::Piece => "pcs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let names: Vec<&str> = Material::ALL.iter().map(Material::name).collect();
        assert_eq!(
            names,
            ["Frame Aluminium", "Kaca", "Karet", "Roda", "Rangka Besi"]
        );
    }

    #[test]
    fn test_units() {
        assert_eq!(Material::FrameAluminium.unit(), Unit::MeterRun);
        assert_eq!(Material::Glass.unit(), Unit::SquareMeter);
        assert_eq!(Material::Rubber.unit(), Unit::Meter);
        assert_eq!(Material::Wheels.unit(), Unit::Piece);
        assert_eq!(Material::IronFrame.unit(), Unit::MeterRun);
    }

    #[test]
    fn test_only_wheels_and_iron_frame_are_optional() {
        let optional: Vec<Material> = Material::ALL
            .into_iter()
            .filter(Material::is_optional)
            .collect();
        assert_eq!(optional, [Material::Wheels, Material::IronFrame]);
    }

    #[test]
    fn test_unit_serializes_as_label() {
        for unit in [Unit::MeterRun, Unit::SquareMeter, Unit::Meter, Unit::Piece] {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.label()));
        }
    }
}
