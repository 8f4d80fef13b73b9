//! Help command implementation for stockwidget.
//!
//! Dispatches to command-specific help or prints the command overview.

use anyhow::Result;

/// Show brief usage for a command (used for error messages)
pub fn show_command_usage(command: &str) {
    match command {
        "refresh" | "r" => log_block_start!("Usage: stockwidget refresh [--json] [<id>...]"),
        "show" | "s" => log_block_start!("Usage: stockwidget show [--json]"),
        "update" | "u" => {
            log_block_start!("Usage: stockwidget update <total_stock> <inbound_today>")
        }
        "clear" | "c" => log_block_start!("Usage: stockwidget clear"),
        "help" | "h" => log_block_start!("Usage: stockwidget help [COMMAND]"),
        _ => log_block_start!("Usage: stockwidget [OPTIONS] [COMMAND]"),
    }
}

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("refresh") | Some("r") => super::refresh::display_help(),
        Some("show") | Some("s") => super::show::display_help(),
        Some("update") | Some("u") => super::update::display_help(),
        Some("clear") | Some("c") => super::clear::display_help(),
        Some("help") | Some("h") => display_help_help(),
        Some(unknown) => {
            log_warning_standalone!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("refresh, r [<id>...]    Refresh widget instances from the stored snapshot");
    log_indented!("show, s                 Print the current widget display");
    log_indented!("update, u <total> <in>  Store new stock and inbound counts");
    log_indented!("clear, c                Remove the stored snapshot");
    log_indented!("help, h [COMMAND]       Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'stockwidget help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'stockwidget --help' to see all options and general usage.");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: stockwidget help [COMMAND]");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("stockwidget help");
    log_indented!("stockwidget help update");
    log_end!();
}
