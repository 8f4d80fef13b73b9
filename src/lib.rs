//! # Stockwidget Library
//!
//! Inventory home-screen widget support: turns the snapshot the app persists
//! into the two text fields the widget shows.
//!
//! ## Architecture
//!
//! - **Core**: `snapshot` parses an optional raw snapshot into a `DisplayState`.
//!   It is pure and total: absent or malformed data degrades to placeholders.
//! - **Storage**: `store` holds the key/value preference store and the app-side
//!   write path for widget counters.
//! - **Host**: `widget` drives refreshes per widget instance and hands views to
//!   a renderer.
//! - **Configuration**: `config` for TOML-based settings.
//! - **Commands**: `commands` for the CLI subcommands (refresh, show, update, clear).
//! - **Infrastructure**: argument parsing, logging, shared constants.

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod commands;
pub mod common;
pub mod config;
pub mod snapshot;
pub mod store;
pub mod widget;

pub use snapshot::{DisplayState, parse};
