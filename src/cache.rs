//! Key-value snapshot cache.
//!
//! Normalized records are stored as JSON behind the [`KeyValueStore`]
//! capability so callers can choose where they live (a cache directory, an
//! in-process map, or their own backend). The pure statistics in
//! [`stats`](crate::stats) never touch a store.

use crate::config;
use crate::error::Result;
use crate::models::SnapshotRecord;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Stores each key as `<key>.json` under a cache directory.
pub struct FileStore {
    /// Directory where cached files are stored.
    pub cache_dir: PathBuf,
}

impl FileStore {
    /// Create a file store.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache directory.
    /// Creates the cache directory if it does not exist.
    pub fn new(cache_dir: Option<PathBuf>) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { cache_dir: dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Writes to a temp file in the same directory and renames on success,
    /// so an interrupted write never leaves a partial entry behind.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.cache_dir)?;
        let mut tmp = NamedTempFile::new_in(&self.cache_dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }

    /// Remove all cached files and recreate the cache directory.
    fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store; contents vanish with the value.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SnapshotCache
// ---------------------------------------------------------------------------

/// Record cache keyed by source fingerprint.
///
/// An entry written for a different source, or an older version of the same
/// source, is treated as stale. A corrupt entry is cleared and reported as a
/// miss so the next load starts fresh.
pub struct SnapshotCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SnapshotCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check whether the cache holds records for a different (or no) source
    /// version.
    pub fn is_stale(&self, fingerprint: &str) -> Result<bool> {
        match self.store.get(config::SOURCE_KEY)? {
            None => Ok(true),
            Some(cached) => Ok(cached.trim() != fingerprint),
        }
    }

    /// Cached records for `fingerprint`, or `None` on a miss.
    pub fn load(&self, fingerprint: &str) -> Result<Option<Vec<SnapshotRecord>>> {
        if self.is_stale(fingerprint)? {
            return Ok(None);
        }
        self.load_any()
    }

    /// Cached records whatever source version they came from. Used when the
    /// source cannot be checked.
    pub fn load_any(&self) -> Result<Option<Vec<SnapshotRecord>>> {
        let Some(raw) = self.store.get(config::SNAPSHOTS_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<SnapshotRecord>>(&raw) {
            Ok(records) => {
                tracing::debug!(records = records.len(), "snapshot cache hit");
                Ok(Some(records))
            }
            Err(e) => {
                tracing::warn!(error = %e, "corrupt snapshot cache entry -- clearing");
                self.store.clear()?;
                Ok(None)
            }
        }
    }

    /// Replace the cached records and remember which source they came from.
    pub fn save(&self, fingerprint: &str, records: &[SnapshotRecord]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.store.set(config::SNAPSHOTS_KEY, &json)?;
        self.store.set(config::SOURCE_KEY, fingerprint)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}
