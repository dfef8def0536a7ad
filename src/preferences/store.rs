// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage for preferences.
//!
//! Values are plain strings, addressed by stable keys, so the store behaves
//! like a browser's local storage: callers own parsing and defaults. Reads
//! never fail (a broken store reads as empty) and writes are best-effort.
//!
//! The production backend, [`FileStore`], keeps the whole map in memory and
//! rewrites a CBOR file in the data directory on every write.

use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Store file name within the app data directory.
pub const STORE_FILE: &str = "storage.cbor";

/// String-valued key-value storage.
pub trait PreferenceStore {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reads `key` and parses it, falling back to `default` when the value is
/// missing or `parse` rejects it.
pub fn load<T>(
    store: &dyn PreferenceStore,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
) -> T {
    store
        .get(key)
        .and_then(|raw| parse(&raw))
        .unwrap_or(default)
}

/// Writes the string form of `value` under `key`.
///
/// Failures are logged and swallowed; the caller keeps the in-memory value.
pub fn save(store: &mut dyn PreferenceStore, key: &str, value: impl ToString) {
    if let Err(error) = store.set(key, &value.to_string()) {
        tracing::warn!(key, %error, "failed to persist preference");
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-process store, used in tests and when no data directory is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// FileStore
// =============================================================================

/// CBOR-backed store persisted to a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file opens empty. An unreadable or corrupt file also opens
    /// empty (with a logged warning) and is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring unreadable preference store");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    /// Opens the store inside the resolved data directory.
    ///
    /// Returns `None` when no data directory can be determined.
    pub fn open_in(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| Self::open(dir.join(STORE_FILE)))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&self.path)?;
        ciborium::into_writer(&self.entries, BufWriter::new(file))
            .map_err(|e| Error::Storage(e.to_string()))
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let file = fs::File::open(path)?;
    ciborium::from_reader(BufReader::new(file)).map_err(|e| Error::Storage(e.to_string()))
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
