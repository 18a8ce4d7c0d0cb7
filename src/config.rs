//! Configuration loading
//!
//! Reads `~/.config/giftai/config.toml`. A missing file yields the defaults;
//! a malformed one yields the defaults plus a warning for the caller to show.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{
    Config, DEFAULT_ERROR_RATE, DEFAULT_MAX_DELAY_MS, DEFAULT_MIN_DELAY_MS, SimulatorConfig,
};

use crate::error::GiftError;

const CONFIG_DIR: &str = "giftai";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the config file
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but couldn't be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load the config from `path`, degrading to defaults on any failure
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => {
            log::debug!("No config file at {}, using defaults", path.display());
            ConfigResult::default()
        }
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(e.to_string()),
        },
    }
}

/// Read and parse `path`; `Ok(None)` if the file doesn't exist
pub fn read_config(path: &Path) -> Result<Option<Config>, GiftError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    parse_config(path, &contents).map(Some)
}

pub fn parse_config(path: &Path, contents: &str) -> Result<Config, GiftError> {
    toml::from_str(contents).map_err(|e| GiftError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
