//! Command-line command handlers for stockwidget.
//!
//! Each command lives in its own submodule. Handlers receive the loaded
//! configuration and open the preference store it points at.

pub mod clear;
pub mod help;
pub mod refresh;
pub mod show;
pub mod update;

use anyhow::Result;

use crate::common::utils::private_path;
use crate::config::Config;
use crate::store::FilePreferences;

/// Open the preference store configured for this process.
pub(crate) fn open_store(config: &Config) -> Result<FilePreferences> {
    let path = config.store_path()?;
    log_debug!("Using preference store {}", private_path(&path));
    Ok(FilePreferences::new(path))
}
