//! # Config Commands
//!
//! `config show` prints the merged settings as TOML, ready to be saved as a
//! config file. `config path` prints where the file is looked up.

use std::path::Path;

use crate::config::{default_config_path, resolve_config_path, Settings};
use crate::error::CliError;

pub fn show(settings: &Settings) -> Result<String, CliError> {
    Ok(settings.to_toml()?)
}

pub fn path(explicit_path: Option<&Path>) -> String {
    match resolve_config_path(explicit_path) {
        Some(path) => path.display().to_string(),
        None => match default_config_path() {
            Some(path) => format!("{} (not present, using defaults)", path.display()),
            None => "no config directory on this platform (using defaults)".to_string(),
        },
    }
}
