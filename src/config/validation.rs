//! Configuration validation functionality.

use anyhow::Result;
use std::collections::HashSet;

use super::Config;

/// Reject configurations the widget host cannot act on.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(ids) = &config.instances {
        if ids.is_empty() {
            anyhow::bail!("instances must list at least one widget id");
        }

        if ids.contains(&0) {
            anyhow::bail!("instances must be positive widget ids (got 0)");
        }

        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                anyhow::bail!("instances contains duplicate widget id {}", id);
            }
        }
    }

    if let Some(path) = config.store_path.as_deref()
        && path.trim().is_empty()
    {
        anyhow::bail!("store_path must not be empty");
    }

    Ok(())
}
