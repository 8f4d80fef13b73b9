//! File-backed preference store.
//!
//! The store is a single JSON object of string values. Writers serialise on an
//! exclusive `fs2` lock held on a sibling `.lock` file and replace the store
//! atomically through a temporary file in the same directory, so readers never
//! see a partial write and never need the lock.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::PreferenceStore;
use crate::common::utils::private_path;

type Entries = BTreeMap<String, String>;

/// Preference store persisted as a JSON file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Failed to read preference store {}",
                private_path(&self.path)
            )
        })?;

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).with_context(|| {
            format!(
                "Preference store {} is not a JSON object of strings",
                private_path(&self.path)
            )
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let mut temp = NamedTempFile::new_in(dir).with_context(|| {
            format!("Failed to create temporary file in {}", private_path(dir))
        })?;
        serde_json::to_writer_pretty(&mut temp, entries)?;
        temp.write_all(b"\n")?;
        temp.flush()?;

        temp.persist(&self.path).with_context(|| {
            format!(
                "Failed to replace preference store {}",
                private_path(&self.path)
            )
        })?;
        Ok(())
    }

    /// Apply `change` to the stored entries under the writer lock.
    fn modify<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut Entries) -> bool,
    {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory {}", private_path(parent))
            })?;
        }

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file {}", private_path(&lock_path)))?;
        lock_file
            .lock_exclusive()
            .with_context(|| format!("Failed to lock {}", private_path(&lock_path)))?;

        let result = self.read_entries().and_then(|mut entries| {
            if change(&mut entries) {
                self.write_entries(&entries)
            } else {
                Ok(())
            }
        });

        release(&lock_file);
        result
    }
}

fn release(lock_file: &File) {
    // Dropping the handle releases the lock as well
    let _ = FileExt::unlock(lock_file);
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.modify(|entries| entries.remove(key).is_some())
    }
}
