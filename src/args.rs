//! Command-line argument parsing and processing.
//!
//! Arguments are parsed by hand into a [`CliAction`]. Global options may
//! appear anywhere; the first positional argument selects the command and
//! the remaining positionals are its arguments. Running without a command
//! refreshes the configured widget instances.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Refresh widget instances from the stored snapshot
    Refresh {
        debug_enabled: bool,
        config_dir: Option<String>,
        json: bool,
        instances: Vec<u32>, // Empty means "use configured instances"
    },
    /// Print the display state parsed from the stored snapshot
    Show {
        debug_enabled: bool,
        config_dir: Option<String>,
        json: bool,
    },
    /// Write a new snapshot
    Update {
        debug_enabled: bool,
        config_dir: Option<String>,
        total_stock: i64,
        inbound_today: i64,
    },
    /// Remove the stored snapshot
    Clear {
        debug_enabled: bool,
        config_dir: Option<String>,
    },
    /// Help subcommand, optionally for one command
    HelpCommand { command: Option<String> },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
    /// Show usage for a command whose arguments were wrong
    ShowCommandUsageDueToError { command: String },
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments, program name first
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut json = false;
        let mut unknown_arg_found = false;
        let mut config_dir: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();

        let mut i = 0;
        while i < args_vec.len() {
            let arg = &args_vec[i];
            match arg.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--json" | "-j" => json = true,
                "--config" | "-c" => {
                    if i + 1 < args_vec.len() && !args_vec[i + 1].starts_with('-') {
                        config_dir = Some(args_vec[i + 1].clone());
                        i += 1;
                    } else {
                        log_warning!("Missing directory for --config. Usage: --config <directory>");
                        unknown_arg_found = true;
                    }
                }
                // Negative numbers are values, not options
                _ if arg.starts_with('-') && arg.parse::<i64>().is_err() => {
                    log_warning!("Unknown option: {arg}");
                    unknown_arg_found = true;
                }
                _ => positionals.push(arg.clone()),
            }
            i += 1;
        }

        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if unknown_arg_found {
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }

        let Some((command, rest)) = positionals.split_first() else {
            return ParsedArgs {
                action: CliAction::Refresh {
                    debug_enabled,
                    config_dir,
                    json,
                    instances: Vec::new(),
                },
            };
        };

        let usage_error = |command: &str| ParsedArgs {
            action: CliAction::ShowCommandUsageDueToError {
                command: command.to_string(),
            },
        };

        if json && matches!(command.as_str(), "update" | "u" | "clear" | "c") {
            log_warning!("--json is only supported by refresh and show");
            return usage_error(command.as_str());
        }

        let action = match command.as_str() {
            "refresh" | "r" => {
                let mut instances = Vec::with_capacity(rest.len());
                for value in rest {
                    match value.parse::<u32>() {
                        Ok(id) if instances.contains(&id) => {
                            log_warning!("Duplicate widget id: {id}");
                            return usage_error("refresh");
                        }
                        Ok(id) if id > 0 => instances.push(id),
                        _ => {
                            log_warning!("Invalid widget id: {value}");
                            return usage_error("refresh");
                        }
                    }
                }
                CliAction::Refresh {
                    debug_enabled,
                    config_dir,
                    json,
                    instances,
                }
            }
            "show" | "s" => {
                if !rest.is_empty() {
                    log_warning!("'show' takes no arguments");
                    return usage_error("show");
                }
                CliAction::Show {
                    debug_enabled,
                    config_dir,
                    json,
                }
            }
            "update" | "u" => match rest {
                [total, inbound] => match (total.parse::<i64>(), inbound.parse::<i64>()) {
                    (Ok(total_stock), Ok(inbound_today)) => CliAction::Update {
                        debug_enabled,
                        config_dir,
                        total_stock,
                        inbound_today,
                    },
                    _ => {
                        log_warning!("Counts must be whole numbers");
                        return usage_error("update");
                    }
                },
                _ => {
                    log_warning!("'update' takes exactly two counts");
                    return usage_error("update");
                }
            },
            "clear" | "c" => {
                if !rest.is_empty() {
                    log_warning!("'clear' takes no arguments");
                    return usage_error("clear");
                }
                CliAction::Clear {
                    debug_enabled,
                    config_dir,
                }
            }
            "help" | "h" => match rest {
                [] => CliAction::HelpCommand { command: None },
                [name] => CliAction::HelpCommand {
                    command: Some(name.clone()),
                },
                _ => return usage_error("help"),
            },
            unknown => {
                log_warning!("Unknown command: {}", unknown);
                CliAction::ShowHelpDueToError
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    log_decorated!(env!("CARGO_PKG_DESCRIPTION"));
    log_end!();
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("stockwidget [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-j, --json             Machine-readable output (refresh, show)");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("refresh, r [<id>...]   Refresh widget instances (default)");
    log_indented!("show, s                Print the current widget display");
    log_indented!("update, u <total> <in> Store new stock and inbound counts");
    log_indented!("clear, c               Remove the stored snapshot");
    log_indented!("help, h [COMMAND]      Show detailed help for a command");
    log_end!();
}
