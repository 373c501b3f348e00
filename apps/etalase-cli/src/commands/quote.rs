//! # Quote Command
//!
//! Prices a display case from command-line flags and/or a JSON document.
//!
//! ## Input Resolution
//! ```text
//! --input file.json ──► DimensionsInput ─┐
//!                                        ├─ overlay (flags win)
//! -l/-w/-H/-s/--wheels ► DimensionsInput ┘
//!                                        │
//!                     ┌──────────────────┴─────────────────┐
//!                     ▼                                    ▼
//!            Dimensions::from()                 validate_dimensions()?
//!            (default, lenient)                 (--strict)
//!                     └──────────────────┬─────────────────┘
//!                                        ▼
//!                              PricingEngine::compute
//! ```

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use etalase_core::validation::validate_dimensions;
use etalase_core::{Dimensions, DimensionsInput, PricingEngine, PricingResult};

use crate::cli::{OutputFormat, QuoteArgs};
use crate::config::Settings;
use crate::error::CliError;
use crate::render;

/// JSON output of `quote --format json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Dimensions after coercion, as priced.
    pub dimensions: Dimensions,

    #[serde(flatten)]
    pub quote: PricingResult,

    pub currency: String,
}

/// Runs the quote command and returns the rendered output.
pub fn execute(settings: &Settings, args: &QuoteArgs) -> Result<String, CliError> {
    let from_file = match &args.input {
        Some(path) => read_input(path)?,
        None => DimensionsInput::default(),
    };
    let input = from_file.overlay(args.to_input());

    let dims = resolve_dimensions(&input, args.strict)?;
    debug!(
        length = dims.length(),
        width = dims.width(),
        height = dims.height(),
        sections = dims.sections(),
        wheels = dims.use_wheels(),
        iron_frame = dims.use_iron_frame(),
        "Dimensions resolved"
    );

    let engine = PricingEngine::new(settings.prices.clone())?;
    let quote = engine.compute(&dims);
    debug!(
        items = quote.len(),
        glass_tier = ?quote.glass_tier,
        total = quote.total_cost,
        "Quote computed"
    );

    match args.format {
        OutputFormat::Table => Ok(render::quote_table(&dims, &quote, settings)),
        OutputFormat::Json => {
            let response = QuoteResponse {
                dimensions: dims,
                quote,
                currency: settings.currency_code.clone(),
            };
            Ok(serde_json::to_string_pretty(&response)?)
        }
    }
}

/// Lenient coercion by default; strict validation when asked.
pub fn resolve_dimensions(input: &DimensionsInput, strict: bool) -> Result<Dimensions, CliError> {
    if strict {
        Ok(validate_dimensions(input)?)
    } else {
        Ok(Dimensions::from(input))
    }
}

/// Reads a `DimensionsInput` JSON document from a file or stdin (`-`).
fn read_input(path: &Path) -> Result<DimensionsInput, CliError> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    debug!(path = %path.display(), bytes = contents.len(), "Read dimensions input");
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use etalase_core::Material;
    use serde_json::Value;

    fn args(length: &str, width: &str, height: &str, sections: &str) -> QuoteArgs {
        QuoteArgs {
            length: Some(length.to_string()),
            width: Some(width.to_string()),
            height: Some(height.to_string()),
            sections: Some(sections.to_string()),
            ..QuoteArgs::default()
        }
    }

    #[test]
    fn test_table_output() {
        let out = execute(&Settings::default(), &args("1", "1", "1", "0")).unwrap();
        assert!(out.ends_with("Total: 1.668.000 IDR"));
    }

    #[test]
    fn test_json_output() {
        let mut quote_args = args("2", "3", "1", "2");
        quote_args.iron_frame = true;
        quote_args.format = OutputFormat::Json;

        let out = execute(&Settings::default(), &quote_args).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["currency"], "IDR");
        assert_eq!(value["dimensions"]["sections"], 2);
        assert_eq!(value["glassTier"], "standard");
        assert_eq!(value["lineItems"].as_array().unwrap().len(), 4);
        assert_eq!(value["lineItems"][3]["name"], "Rangka Besi");
        assert_eq!(value["lineItems"][3]["quantity"], serde_json::json!(2.0));

        // 30 × 35.000 + 34 × 200.000 + 48 × 2.000 + 2 × 200.000
        assert_eq!(value["totalCost"], serde_json::json!(8_346_000.0));
    }

    #[test]
    fn test_lenient_mode_coerces_garbage() {
        let out = execute(&Settings::default(), &args("abc", "-1", "", "x")).unwrap();
        assert!(out.ends_with("Total: 0 IDR"));
    }

    #[test]
    fn test_strict_mode_rejects_garbage() {
        let mut quote_args = args("abc", "1", "1", "0");
        quote_args.strict = true;

        let err = execute(&Settings::default(), &quote_args).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("length"));
    }

    #[test]
    fn test_strict_and_lenient_agree_on_clean_input() {
        let input = args("1.2", "0.5", "0.95", "3").to_input();
        let strict = resolve_dimensions(&input, true).unwrap();
        let lenient = resolve_dimensions(&input, false).unwrap();
        assert_eq!(strict, lenient);
    }

    #[test]
    fn test_price_overrides_flow_into_quote() {
        let mut settings = Settings::default();
        settings.prices.wheel_per_piece = etalase_core::Rupiah::from_rupiah(20_000);

        let mut quote_args = QuoteArgs::default();
        quote_args.wheels = true;
        quote_args.format = OutputFormat::Json;

        let out = execute(&settings, &quote_args).unwrap();
        let response: Value = serde_json::from_str(&out).unwrap();
        let wheels = response["lineItems"]
            .as_array()
            .unwrap()
            .iter()
            .find(|item| item["material"] == "wheels")
            .unwrap();
        assert_eq!(wheels["lineTotal"], serde_json::json!(80_000.0));

        let dims = resolve_dimensions(&quote_args.to_input(), false).unwrap();
        let engine = PricingEngine::new(settings.prices).unwrap();
        assert!(engine.compute(&dims).line_item(Material::Wheels).is_some());
    }

    #[test]
    fn test_invalid_price_list_is_config_error() {
        let mut settings = Settings::default();
        settings.prices.reduced_height_below = 2.0;

        let err = execute(&settings, &QuoteArgs::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_missing_input_file_is_io_error() {
        let quote_args = QuoteArgs {
            input: Some("/nonexistent/dims.json".into()),
            ..QuoteArgs::default()
        };
        let err = execute(&Settings::default(), &quote_args).unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);
    }
}
