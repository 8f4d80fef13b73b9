//! Refresh command: push the stored snapshot to every widget instance.

use anyhow::Result;

use crate::config::{Config, OutputFormat};
use crate::widget::{JsonRenderer, RefreshReport, TerminalRenderer, WidgetHost, WidgetId};

/// Handle the refresh command.
///
/// # Arguments
/// * `config` - Loaded configuration
/// * `instances` - Instance ids from the command line; empty uses the configured ones
/// * `json` - Force JSON output regardless of the configured format
pub fn handle_refresh_command(config: &Config, instances: &[u32], json: bool) -> Result<()> {
    let ids: Vec<WidgetId> = if instances.is_empty() {
        config.instances()
    } else {
        instances.iter().copied().map(WidgetId).collect()
    };

    let store = super::open_store(config)?;
    let format = if json {
        OutputFormat::Json
    } else {
        config.output()
    };

    let report = match format {
        OutputFormat::Json => WidgetHost::new(store, JsonRenderer::stdout()).on_update(&ids),
        OutputFormat::Text => {
            log_version!();
            let report = WidgetHost::new(store, TerminalRenderer).on_update(&ids);
            log_end!();
            report
        }
    };

    check_report(&report)
}

fn check_report(report: &RefreshReport) -> Result<()> {
    if report.is_success() {
        return Ok(());
    }

    let failed = report
        .failed
        .iter()
        .map(|(id, _)| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    anyhow::bail!(
        "{} of {} widget(s) failed to refresh: {}",
        report.failed.len(),
        report.failed.len() + report.updated.len(),
        failed
    )
}

pub fn display_help() {
    log_version!();
    log_block_start!("refresh - Refresh widget instances");
    log_block_start!("Usage: stockwidget refresh [--json] [<id>...]");
    log_block_start!("Arguments:");
    log_indented!("<id>  Widget instance id (defaults to `instances` from the config)");
    log_block_start!("Description:");
    log_indented!("Reads the stored inventory snapshot and updates the count and");
    log_indented!("subtitle of each widget. Missing or unreadable data shows `--`.");
    log_block_start!("Examples:");
    log_indented!("# Refresh configured widgets");
    log_indented!("stockwidget refresh");
    log_pipe!();
    log_indented!("# Refresh widgets 2 and 3 as JSON lines");
    log_indented!("stockwidget refresh --json 2 3");
    log_end!();
}
