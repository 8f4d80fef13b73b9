//! Key/value preference storage shared by the app and the widget.
//!
//! The app writes the widget snapshot under a fixed key; the widget host reads
//! it back at refresh time. Values are opaque strings to the store.

pub mod file;
pub mod widget_data;

use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;

pub use file::FilePreferences;
pub use widget_data::{WidgetData, clear_widget_data, get_widget_data, update_widget_data};

/// A named string-to-string preference store.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| anyhow::anyhow!("Preference store lock poisoned"))
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
