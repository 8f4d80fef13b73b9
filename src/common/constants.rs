//! Application-wide constants.
//!
//! Storage identifiers are shared with the app-side write path and must not
//! drift from what the host platform persists.

// # Storage

/// Key under which the widget snapshot is stored.
pub const WIDGET_DATA_KEY: &str = "widget_data";

/// File name of the on-disk preference store.
pub const PREFERENCES_FILE_NAME: &str = "CapacitorStorage.json";

// # Display

/// Shown in the count slot when no snapshot has ever been written.
pub const STOCK_SENTINEL: &str = "--";

/// Fixed label preceding today's inbound count in the subtitle slot.
pub const SUBTITLE_LABEL: &str = "总库存 · 今日入库 ";

/// Layout id of the large count text.
pub const SLOT_COUNT_ID: &str = "widget_count";

/// Layout id of the subtitle text.
pub const SLOT_SUBTITLE_ID: &str = "widget_subtitle";

// # Configuration

pub const CONFIG_DIR_NAME: &str = "stockwidget";
pub const CONFIG_FILE_NAME: &str = "stockwidget.toml";
pub const DEFAULT_INSTANCE_ID: u32 = 1;
pub const DEFAULT_OUTPUT: &str = "text";

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
