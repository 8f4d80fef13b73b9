//! Main application entry point.
//!
//! Parses the command line, prepares logging and configuration, then hands
//! off to the matching command handler in `stockwidget::commands`. Errors
//! from a handler are logged in the usual box-drawing style and turned into
//! a non-zero exit code.

use anyhow::Result;
use stockwidget::args::{self, CliAction, ParsedArgs};
use stockwidget::commands;
use stockwidget::common::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use stockwidget::config::{self, Config, OutputFormat};
use stockwidget::logger::Log;
use stockwidget::{log_debug, log_end, log_error_exit};

/// Shared setup for commands that read the configuration.
///
/// Returns the loaded configuration and whether output is JSON. In JSON mode
/// the logger is silenced before anything is printed, so stdout carries
/// nothing but JSON lines even with `--debug`.
fn prepare(
    debug_enabled: bool,
    config_dir: Option<String>,
    json_flag: bool,
    honor_config_output: bool,
) -> Result<(Config, bool)> {
    Log::set_debug(debug_enabled);
    if json_flag {
        Log::set_enabled(false);
    }

    config::set_config_dir(config_dir)?;
    let config = Config::load()?;

    let json = json_flag || (honor_config_output && config.output() == OutputFormat::Json);
    if json {
        Log::set_enabled(false);
    }

    if debug_enabled {
        config.log_config();
    }
    log_debug!("Configuration loaded");
    Ok((config, json))
}

fn run(action: CliAction) -> Result<i32> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
        }
        CliAction::ShowHelp => {
            args::display_help();
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            return Ok(EXIT_FAILURE);
        }
        CliAction::ShowCommandUsageDueToError { command } => {
            commands::help::show_command_usage(&command);
            log_end!();
            return Ok(EXIT_FAILURE);
        }
        CliAction::HelpCommand { command } => {
            commands::help::run_help_command(command.as_deref())?;
        }
        CliAction::Refresh {
            debug_enabled,
            config_dir,
            json,
            instances,
        } => {
            let (config, json) = prepare(debug_enabled, config_dir, json, true)?;
            commands::refresh::handle_refresh_command(&config, &instances, json)?;
        }
        CliAction::Show {
            debug_enabled,
            config_dir,
            json,
        } => {
            let (config, json) = prepare(debug_enabled, config_dir, json, false)?;
            commands::show::handle_show_command(&config, json)?;
        }
        CliAction::Update {
            debug_enabled,
            config_dir,
            total_stock,
            inbound_today,
        } => {
            let (config, _) = prepare(debug_enabled, config_dir, false, false)?;
            commands::update::handle_update_command(&config, total_stock, inbound_today)?;
        }
        CliAction::Clear {
            debug_enabled,
            config_dir,
        } => {
            let (config, _) = prepare(debug_enabled, config_dir, false, false)?;
            commands::clear::handle_clear_command(&config)?;
        }
    }

    Ok(EXIT_SUCCESS)
}

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let code = match run(parsed_args.action) {
        Ok(code) => code,
        Err(e) => {
            // Errors must be visible even when --json silenced the logger
            Log::set_enabled(true);
            log_error_exit!("{e:#}");
            log_end!();
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}
