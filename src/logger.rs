//! Structured terminal logging with box-drawing output.
//!
//! All human-facing output goes through the macros defined here so the
//! refresh, update and help flows share one visual layout. Logging can be
//! switched off at runtime, which `--json` uses to keep stdout machine-readable.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Main logging interface.
///
/// ## Logging Conventions
///
/// - **`log_version!`** opens the output with `┏ stockwidget vX.Y.Z ━━╸`.
/// - **`log_block_start!`** starts a new block: an empty `┃` spacer, then `┣ message`.
/// - **`log_decorated!`** continues a block with `┣ message`.
/// - **`log_indented!`** prints nested detail as `┃   message`.
/// - **`log_pipe!`** inserts a lone `┃`, mostly before a level message.
/// - **`log_end!`** closes the output with `╹`.
/// - **`log_info!`, `log_debug!`, `log_warning!`, `log_error!`**
///   carry a colored `[LEVEL]` tag after the `┣` marker.
/// - **`log_error_exit!`** terminates a flow with `┗[ERROR]`.
///
/// `log_debug!` only prints once debug output has been enabled with
/// [`Log::set_debug`].
pub struct Log;

impl Log {
    /// Enable or disable all log output.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Enable or disable `log_debug!` output.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_debug() -> bool {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }
}

/// Write one already-decorated log line to stdout.
///
/// Public because the exported macros expand to it.
pub fn write_output(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

/// Format a level tag such as `[WARNING]` with its ANSI color.
pub fn level_tag(level: &str, color: u8) -> String {
    format!("[\x1b[{color}m{level}\x1b[0m]")
}

// # Logging Macros

/// Log a decorated message as part of the current block.
#[macro_export]
macro_rules! log_decorated {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┣ {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┣ {expr}\n"));
        }
    }};
}

/// Log an indented detail line within a block.
#[macro_export]
macro_rules! log_indented {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┃   {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┃   {expr}\n"));
        }
    }};
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log a block start message.
#[macro_export]
macro_rules! log_block_start {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┃\n┣ {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┃\n┣ {expr}\n"));
        }
    }};
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        if $crate::logger::Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ stockwidget v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Shared expansion for the `[LEVEL]` macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_level {
    ($marker:literal, $level:literal, $color:literal, $message:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let tag = $crate::logger::level_tag($level, $color);
            let message = $message;
            $crate::logger::write_output(&format!("{}{tag} {message}\n", $marker));
        }
    }};
}

/// Log a warning message in yellow.
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_level!("┣", "WARNING", 33, format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_level!("┣", "WARNING", 33, $expr)
    };
}

/// Log a warning outside of any block (no pipe marker).
#[macro_export]
macro_rules! log_warning_standalone {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_level!("", "WARNING", 33, format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_level!("", "WARNING", 33, $expr)
    };
}

/// Log an error message in red.
#[macro_export]
macro_rules! log_error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_level!("┣", "ERROR", 31, format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_level!("┣", "ERROR", 31, $expr)
    };
}

/// Log an error that ends the current flow.
#[macro_export]
macro_rules! log_error_exit {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_level!("┃\n┗", "ERROR", 31, format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_level!("┃\n┗", "ERROR", 31, $expr)
    };
}

/// Log an informational message in green.
#[macro_export]
macro_rules! log_info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__log_level!("┣", "INFO", 32, format!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::__log_level!("┣", "INFO", 32, $expr)
    };
}

/// Log a debug message. Silent unless debug output is enabled.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $($arg:tt)*) => {
        if $crate::logger::Log::is_debug() {
            $crate::__log_level!("┣", "DEBUG", 32, format!($fmt $($arg)*))
        }
    };
    ($expr:expr) => {
        if $crate::logger::Log::is_debug() {
            $crate::__log_level!("┣", "DEBUG", 32, $expr)
        }
    };
}
