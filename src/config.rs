//! Configuration loading
//!
//! Reads `~/.config/stocknews/config.toml`. A missing file means defaults;
//! a malformed one is reported and also falls back to defaults so the
//! dashboard always starts.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{
    ApiConfig, Config, DEFAULT_API_URL, HighlightColor, HighlightConfig, SuggestConfig,
};

use crate::error::StockNewsError;

const CONFIG_DIR: &str = "stocknews";
const CONFIG_FILE: &str = "config.toml";

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `path`, or from the default location when `None`
///
/// Never fails: problems are logged and defaults are returned.
pub fn load_config(path: Option<&Path>) -> Config {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return Config::default(),
        },
    };

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}", e);
            Config::default()
        }
    }
}

/// Load configuration from a specific file
///
/// Returns defaults when the file does not exist.
pub fn load_config_from_path(path: &Path) -> Result<Config, StockNewsError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents).map_err(|message| StockNewsError::Config {
        path: path.display().to_string(),
        message,
    })
}

/// Parse TOML config contents
pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
