//! Configuration loading functionality.
//!
//! Resolves the configuration path, reads and validates the TOML file, and
//! falls back to defaults when no file exists.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::Config;
use super::validation::validate_config;
use crate::common::constants::*;
use crate::common::utils::private_path;

/// Global configuration directory, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// This can only be called once, typically at startup.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Get the custom configuration directory if one was set.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Get the configuration file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration using automatic path detection.
///
/// A missing file yields the default configuration. A custom directory given
/// with `--config` must exist.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        if let Some(dir) = get_custom_config_dir()
            && !dir.is_dir()
        {
            anyhow::bail!(
                "Configuration directory not found: {}",
                private_path(&dir)
            );
        }

        log_debug!(
            "No configuration at {}, using defaults",
            private_path(&config_path)
        );
        return Ok(Config {
            base_dir: config_path.parent().map(Path::to_path_buf),
            ..Config::default()
        });
    }

    load_from_path(&config_path)
}

/// Load configuration from a specific path.
///
/// Unlike [`load`], the file must exist.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!("Configuration file not found: {}", private_path(path));
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", private_path(path)))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", private_path(path)))?;

    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", private_path(path)))?;

    config.base_dir = path.parent().map(Path::to_path_buf);

    Ok(config)
}
