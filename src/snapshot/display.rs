//! Display fields handed to the widget renderer.

use serde::Serialize;

use super::SnapshotRecord;
use crate::common::constants::{STOCK_SENTINEL, SUBTITLE_LABEL};

/// The two text values a widget instance shows.
///
/// Always fully populated. Built fresh on every refresh and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    /// Large count text, or `"--"` when no snapshot exists
    pub total_stock: String,

    /// Fixed label followed by today's inbound count
    pub inbound_subtitle: String,
}

impl DisplayState {
    /// The "no data yet" display: stock sentinel and zero inbound.
    pub fn no_data() -> Self {
        DisplayState {
            total_stock: STOCK_SENTINEL.to_string(),
            inbound_subtitle: subtitle_for("0"),
        }
    }

    /// Display for resolved counters.
    pub fn from_counts(total_stock: i64, inbound_today: i64) -> Self {
        DisplayState {
            total_stock: total_stock.to_string(),
            inbound_subtitle: subtitle_for(&inbound_today.to_string()),
        }
    }

    /// Substitute defaults for whatever the record lacks.
    pub fn from_record(record: &SnapshotRecord) -> Self {
        match record {
            SnapshotRecord::Absent | SnapshotRecord::Malformed => Self::no_data(),
            SnapshotRecord::Decoded(snapshot) => Self::from_counts(
                snapshot.total_stock.unwrap_or(0),
                snapshot.inbound_today.unwrap_or(0),
            ),
        }
    }

    /// The inbound count portion of the subtitle.
    pub fn inbound_count(&self) -> &str {
        self.inbound_subtitle
            .strip_prefix(SUBTITLE_LABEL)
            .unwrap_or(self.inbound_subtitle.as_str())
    }

    /// Whether this is the sentinel display for a missing snapshot.
    pub fn is_placeholder(&self) -> bool {
        self.total_stock == STOCK_SENTINEL
    }
}

fn subtitle_for(inbound: &str) -> String {
    format!("{SUBTITLE_LABEL}{inbound}")
}
