//! Clear command: remove the stored snapshot.

use anyhow::Result;

use crate::config::Config;
use crate::store::clear_widget_data;

/// Handle the clear command.
pub fn handle_clear_command(config: &Config) -> Result<()> {
    log_version!();

    let store = super::open_store(config)?;
    clear_widget_data(&store)?;

    log_block_start!("Widget data cleared");
    log_indented!("Widgets will show the no-data placeholder on their next refresh");
    log_end!();
    Ok(())
}

pub fn display_help() {
    log_version!();
    log_block_start!("clear - Remove the stored snapshot");
    log_block_start!("Usage: stockwidget clear");
    log_block_start!("Description:");
    log_indented!("Deletes the widget entry from the preference store. Other");
    log_indented!("entries in the store are left untouched.");
    log_end!();
}
