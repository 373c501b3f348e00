//! # Configuration
//!
//! Settings loaded at startup: currency labels and the price list.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ETALASE_*`)
//! 2. Config file (`--config`, `ETALASE_CONFIG`, or the platform config dir)
//! 3. Defaults (workshop reference prices)
//!
//! ## Config File
//! ```toml
//! currencyCode = "IDR"
//! currencySymbol = "Rp"
//!
//! [prices]
//! framePerMeter = 37500
//! glassPerSquareMeter = 210000
//! increasedHeightAbove = 1.6
//! ```
//! Any field may be left out; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use etalase_core::{CoreError, PriceList, Rupiah, CURRENCY_CODE};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Currency code printed after totals (ISO 4217)
    pub currency_code: String,

    /// Currency symbol printed before unit prices
    pub currency_symbol: String,

    /// Unit rates and glass tier thresholds
    pub prices: PriceList,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency_code: CURRENCY_CODE.to_string(),
            currency_symbol: "Rp".to_string(),
            prices: PriceList::default(),
        }
    }
}

impl Settings {
    /// Loads settings from all sources and validates the price list.
    ///
    /// ## Errors
    /// - An explicit config path that cannot be read
    /// - TOML that does not parse
    /// - An `ETALASE_*` variable that does not parse
    /// - A price list that fails validation
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match resolve_config_path(explicit_path) {
            Some(path) => {
                info!(path = %path.display(), "Loading config file");
                Settings::from_file(&path)?
            }
            None => {
                debug!("No config file, using defaults");
                Settings::default()
            }
        };

        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.prices.validate()?;

        Ok(settings)
    }

    /// Reads a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_toml_str(&contents)
    }

    /// Parses TOML config text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Renders the settings as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Applies `ETALASE_*` overrides using `lookup` to read variables.
    ///
    /// ## Environment Variables
    /// - `ETALASE_FRAME_PRICE`, `ETALASE_GLASS_PRICE`,
    ///   `ETALASE_GLASS_REDUCED_PRICE`, `ETALASE_GLASS_INCREASED_PRICE`,
    ///   `ETALASE_RUBBER_PRICE`, `ETALASE_WHEEL_PRICE`,
    ///   `ETALASE_IRON_FRAME_PRICE`: whole rupiah
    /// - `ETALASE_CURRENCY_CODE`, `ETALASE_CURRENCY_SYMBOL`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prices = &mut self.prices;
        let rates: [(&str, &mut Rupiah); 7] = [
            ("ETALASE_FRAME_PRICE", &mut prices.frame_per_meter),
            ("ETALASE_GLASS_PRICE", &mut prices.glass_per_square_meter),
            (
                "ETALASE_GLASS_REDUCED_PRICE",
                &mut prices.glass_reduced_height_per_square_meter,
            ),
            (
                "ETALASE_GLASS_INCREASED_PRICE",
                &mut prices.glass_increased_height_per_square_meter,
            ),
            ("ETALASE_RUBBER_PRICE", &mut prices.rubber_per_meter),
            ("ETALASE_WHEEL_PRICE", &mut prices.wheel_per_piece),
            ("ETALASE_IRON_FRAME_PRICE", &mut prices.iron_frame_per_meter),
        ];

        for (key, rate) in rates {
            if let Some(raw) = lookup(key) {
                let amount: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(key.to_string()))?;
                *rate = Rupiah::from_rupiah(amount);
                debug!(key, rate = %rate, "Price overridden from environment");
            }
        }

        if let Some(code) = lookup("ETALASE_CURRENCY_CODE") {
            self.currency_code = code;
        }

        if let Some(symbol) = lookup("ETALASE_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        Ok(())
    }
}

/// Picks the config file to read, if any.
///
/// An explicit path (from `--config` or `ETALASE_CONFIG`) is always used;
/// the platform default is only used when the file exists.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    default_config_path().filter(|path| path.is_file())
}

/// Platform config location.
///
/// - **Linux**: `~/.config/etalase/config.toml`
/// - **macOS**: `~/Library/Application Support/id.etalase.etalase/config.toml`
/// - **Windows**: `%APPDATA%\etalase\etalase\config\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("id", "etalase", "etalase")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error(transparent)]
    Prices(#[from] CoreError),
}
