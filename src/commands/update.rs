//! Update command: store new inventory counters for the widget.

use anyhow::Result;

use crate::common::constants::WIDGET_DATA_KEY;
use crate::common::utils::private_path;
use crate::config::Config;
use crate::snapshot::parse;
use crate::store::{PreferenceStore, WidgetData, update_widget_data};

/// Handle the update command.
pub fn handle_update_command(config: &Config, total_stock: i64, inbound_today: i64) -> Result<()> {
    log_version!();

    let store = super::open_store(config)?;
    let data = WidgetData::now(total_stock, inbound_today);
    update_widget_data(&store, &data)?;

    log_block_start!("Widget data updated");
    log_indented!("Store: {}", private_path(store.path()));

    // Read back through the widget path so the user sees the rendered result
    let state = parse(store.get(WIDGET_DATA_KEY)?.as_deref());
    log_indented!("Total stock: {}", state.total_stock);
    log_indented!("Subtitle: {}", state.inbound_subtitle);
    log_pipe!();
    log_info!("Run 'stockwidget refresh' to push the change to your widgets");
    log_end!();
    Ok(())
}

pub fn display_help() {
    log_version!();
    log_block_start!("update - Store new stock and inbound counts");
    log_block_start!("Usage: stockwidget update <total_stock> <inbound_today>");
    log_block_start!("Arguments:");
    log_indented!("<total_stock>    Units currently in stock");
    log_indented!("<inbound_today>  Units received today");
    log_block_start!("Description:");
    log_indented!("Writes the counters, stamped with the current time, to the");
    log_indented!("preference store the widget reads from.");
    log_block_start!("Examples:");
    log_indented!("stockwidget update 152 12");
    log_end!();
}
