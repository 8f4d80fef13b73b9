//! Show command: print what the widget would display right now.

use anyhow::Result;

use crate::config::Config;
use crate::snapshot::{DisplayState, SnapshotRecord};
use crate::widget::{TerminalRenderer, WidgetHost};

/// Handle the show command.
pub fn handle_show_command(config: &Config, json: bool) -> Result<()> {
    let store = super::open_store(config)?;
    let host = WidgetHost::new(store, TerminalRenderer);
    let record = host.snapshot_record();
    let state = DisplayState::from_record(&record);

    if json {
        println!("{}", serde_json::to_string(&state)?);
        return Ok(());
    }

    log_version!();
    log_display_state(&state, &record);
    log_end!();
    Ok(())
}

fn log_display_state(state: &DisplayState, record: &SnapshotRecord) {
    log_block_start!("Widget display");
    log_indented!("Total stock: {}", state.total_stock);
    log_indented!("Inbound today: {}", state.inbound_count());
    log_indented!("Subtitle: {}", state.inbound_subtitle);

    match record {
        SnapshotRecord::Decoded(snapshot) => {
            if let Some(last_updated) = &snapshot.last_updated {
                log_indented!("Last updated: {}", last_updated);
            }
        }
        SnapshotRecord::Malformed => {
            log_pipe!();
            log_warning!("Stored snapshot is not a JSON object; showing the placeholder");
        }
        SnapshotRecord::Absent => {
            log_pipe!();
            log_info!("No inventory snapshot has been stored yet");
        }
    }
}

pub fn display_help() {
    log_version!();
    log_block_start!("show - Print the current widget display");
    log_block_start!("Usage: stockwidget show [--json]");
    log_block_start!("Description:");
    log_indented!("Parses the stored snapshot exactly as a widget refresh would");
    log_indented!("and prints the resulting count and subtitle.");
    log_block_start!("JSON output:");
    log_indented!(
        "{}",
        r#"{"totalStock":"152","inboundSubtitle":"总库存 · 今日入库 12"}"#
    );
    log_end!();
}
