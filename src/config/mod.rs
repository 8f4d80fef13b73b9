//! Configuration for the widget host and CLI.
//!
//! Settings live in an optional `stockwidget.toml`:
//!
//! 1. **--config DIR**/stockwidget.toml when a directory was given
//! 2. **XDG_CONFIG_HOME**/stockwidget/stockwidget.toml otherwise
//!
//! A missing file is not an error; every field has a default.
//!
//! ```toml
//! store_path = "~/.local/share/stockwidget/CapacitorStorage.json"  # Preference store file
//! instances = [1, 2]       # Widget instance ids refreshed by `stockwidget refresh`
//! output = "text"          # Refresh output: "text" or "json"
//! ```
//!
//! Relative `store_path` values are resolved against the directory holding the
//! configuration file. Invalid values (empty or duplicate instance ids, id 0,
//! unknown output format) are rejected with a descriptive error.

pub mod loading;
pub mod validation;


use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::common::constants::*;
use crate::common::utils::private_path;
use crate::widget::WidgetId;

pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

/// How `refresh` reports each committed widget view.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawing terminal output through the logger.
    Text,
    /// One JSON object per widget instance on stdout.
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Configuration loaded from `stockwidget.toml`.
///
/// All fields are optional; use the accessor methods to get resolved values.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Location of the preference store file.
    pub store_path: Option<String>,

    /// Widget instance ids to refresh.
    pub instances: Option<Vec<u32>>,

    /// Output format for refresh results.
    pub output: Option<OutputFormat>,

    /// Directory the configuration was loaded from, used to resolve relative paths.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration using the module's load function
    pub fn load() -> Result<Self> {
        load()
    }

    /// Load from path using the module's load_from_path function
    pub fn load_from_path(path: &Path) -> Result<Self> {
        load_from_path(path)
    }

    /// Resolved preference store path.
    pub fn store_path(&self) -> Result<PathBuf> {
        match self.store_path.as_deref() {
            Some(configured) => Ok(self.resolve_path(configured)),
            None => default_store_path(),
        }
    }

    /// Widget instances to refresh, defaulting to a single instance.
    pub fn instances(&self) -> Vec<WidgetId> {
        match &self.instances {
            Some(ids) => ids.iter().copied().map(WidgetId).collect(),
            None => vec![WidgetId(DEFAULT_INSTANCE_ID)],
        }
    }

    pub fn output(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Text)
    }

    fn resolve_path(&self, configured: &str) -> PathBuf {
        let expanded = match configured.strip_prefix("~/") {
            Some(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => PathBuf::from(configured),
            },
            None => PathBuf::from(configured),
        };

        if expanded.is_relative()
            && let Some(base) = &self.base_dir
        {
            return base.join(expanded);
        }
        expanded
    }

    pub fn log_config(&self) {
        log_block_start!("Configuration");
        match self.store_path() {
            Ok(path) => log_indented!("Store: {}", private_path(&path)),
            Err(e) => log_indented!("Store: unresolved ({e})"),
        }
        let ids = self
            .instances()
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        log_indented!("Instances: {}", ids);
        log_indented!("Output: {}", self.output().as_str());
    }
}

/// Default preference store location under the XDG data directory.
pub fn default_store_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data_dir.join(CONFIG_DIR_NAME).join(PREFERENCES_FILE_NAME))
}
