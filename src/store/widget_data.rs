//! App-side write path for the widget snapshot.
//!
//! The app serialises its counters with a timestamp under the widget key.
//! Reading back here is strict: unlike [`crate::snapshot::parse`], a record
//! that does not match [`WidgetData`] exactly is reported as missing.

use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use super::PreferenceStore;
use crate::common::constants::WIDGET_DATA_KEY;

/// Counters the app publishes for the home-screen widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetData {
    pub total_stock: i64,
    pub inbound_today: i64,
    /// RFC 3339 timestamp of the write
    pub last_updated: String,
}

impl WidgetData {
    /// Counters stamped with the current local time.
    pub fn now(total_stock: i64, inbound_today: i64) -> Self {
        WidgetData {
            total_stock,
            inbound_today,
            last_updated: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

/// Store the snapshot under the widget key.
pub fn update_widget_data(store: &dyn PreferenceStore, data: &WidgetData) -> Result<()> {
    let json = serde_json::to_string(data).context("Failed to serialize widget data")?;
    store
        .set(WIDGET_DATA_KEY, &json)
        .context("Failed to update widget data")?;

    log_debug!(
        "Widget data updated: totalStock={}, inboundToday={}",
        data.total_stock,
        data.inbound_today
    );
    Ok(())
}

/// Read the snapshot back as the app wrote it.
///
/// Returns `None` when nothing is stored or the stored value cannot be read;
/// failures are logged rather than returned.
pub fn get_widget_data(store: &dyn PreferenceStore) -> Option<WidgetData> {
    let raw = match store.get(WIDGET_DATA_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log_warning!("Failed to get widget data: {e:#}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(data) => Some(data),
        Err(e) => {
            log_warning!("Stored widget data is unreadable: {e}");
            None
        }
    }
}

/// Remove the stored snapshot so the widget shows "no data yet".
pub fn clear_widget_data(store: &dyn PreferenceStore) -> Result<()> {
    store
        .remove(WIDGET_DATA_KEY)
        .context("Failed to clear widget data")
}
