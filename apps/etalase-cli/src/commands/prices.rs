//! # Prices Command
//!
//! Shows the price list after config file and environment overrides, so an
//! operator can check what a quote will use.

use tracing::debug;

use etalase_core::PricingEngine;

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::error::CliError;
use crate::render;

/// Renders the prices held by the engine a quote would use.
pub fn execute(settings: &Settings, format: OutputFormat) -> Result<String, CliError> {
    debug!(?format, "prices command");

    let engine = PricingEngine::new(settings.prices.clone())?;
    match format {
        OutputFormat::Table => Ok(render::prices_table(engine.prices(), settings)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(engine.prices())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etalase_core::PriceList;

    #[test]
    fn test_json_is_the_price_list() {
        let out = execute(&Settings::default(), OutputFormat::Json).unwrap();
        let prices: PriceList = serde_json::from_str(&out).unwrap();
        assert_eq!(prices, PriceList::default());
    }

    #[test]
    fn test_table_mentions_every_material() {
        let out = execute(&Settings::default(), OutputFormat::Table).unwrap();
        for name in ["Frame Aluminium", "Kaca", "Karet", "Roda", "Rangka Besi"] {
            assert!(out.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_overrides_are_shown() {
        let mut settings = Settings::default();
        settings.prices.rubber_per_meter = etalase_core::Rupiah::from_rupiah(2_500);

        let out = execute(&settings, OutputFormat::Json).unwrap();
        let prices: PriceList = serde_json::from_str(&out).unwrap();
        assert_eq!(prices.rubber_per_meter.amount(), 2_500);
    }

    #[test]
    fn test_invalid_price_list_is_config_error() {
        let mut settings = Settings::default();
        settings.prices.increased_height_above = f64::NAN;

        let err = execute(&settings, OutputFormat::Table).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }
}
