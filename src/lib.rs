//! Writing statistics for word-count snapshot logs.
//!
//! Ingests a log of time-stamped word-count snapshots and derives the data a
//! writing dashboard renders: one summary per calendar day, a consecutive-day
//! streak, a gap-filled trend series and heatmap cells. The computations live
//! in [`stats`] as pure functions; [`WordStats`] wraps them with loading and
//! caching.
//!
//! # Quick start
//!
//! ```no_run
//! use wordstats::{TimeWindow, WordStats};
//!
//! let stats = WordStats::builder().file("wordcount.csv").build().unwrap();
//!
//! let view = stats.dashboard_today(TimeWindow::Month).unwrap();
//! println!("streak: {} days, total: {} words", view.writing_streak, view.latest_total);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod stats;

#[cfg(feature = "async")]
pub use async_client::AsyncWordStats;
pub use cache::{FileStore, KeyValueStore, MemoryStore, SnapshotCache};
pub use error::{Result, WordStatsError};
pub use loader::{RecordSource, SnapshotLoader};
pub use models::{
    ChartPoint, DailyAggregate, HeatmapPoint, SnapshotRecord, TimeWindow, ViewModel,
};

use chrono::{Local, NaiveDate};
use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Store type held by the client.
pub type BoxedStore = Box<dyn KeyValueStore + Send>;

enum CacheChoice {
    Dir(Option<PathBuf>),
    Memory,
    Disabled,
}

// ---------------------------------------------------------------------------
// WordStatsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`WordStats`] instance.
///
/// Use [`WordStats::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](WordStatsBuilder::build).
pub struct WordStatsBuilder {
    source: Option<RecordSource>,
    cache: CacheChoice,
    offline: bool,
    timeout: Duration,
}

impl Default for WordStatsBuilder {
    fn default() -> Self {
        Self {
            source: None,
            cache: CacheChoice::Dir(None),
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl WordStatsBuilder {
    /// Set the snapshot log source.
    pub fn source(mut self, source: RecordSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Read the log from a local file (`.gz` is decompressed).
    pub fn file<P: AsRef<Path>>(self, path: P) -> Self {
        self.source(RecordSource::File(path.as_ref().to_path_buf()))
    }

    /// Fetch the log over HTTP.
    pub fn url(self, url: impl Into<String>) -> Self {
        self.source(RecordSource::Url(url.into()))
    }

    /// Use log text that is already in memory.
    pub fn inline(self, text: impl Into<String>) -> Self {
        self.source(RecordSource::Inline(text.into()))
    }

    /// Set a custom cache directory.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/wordstats` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache = CacheChoice::Dir(Some(path.as_ref().to_path_buf()));
        self
    }

    /// Keep the cache in process memory instead of on disk.
    pub fn in_memory_cache(mut self) -> Self {
        self.cache = CacheChoice::Memory;
        self
    }

    /// Always load fresh from the source.
    pub fn no_cache(mut self) -> Self {
        self.cache = CacheChoice::Disabled;
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, URL sources are never fetched; only a previously cached
    /// copy can be used. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for URL sources.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client. Does not read the source yet.
    pub fn build(self) -> Result<WordStats> {
        let source = self.source.ok_or_else(|| {
            WordStatsError::InvalidArgument("No snapshot source configured".into())
        })?;

        let store: Option<BoxedStore> = match self.cache {
            CacheChoice::Dir(dir) => Some(Box::new(FileStore::new(dir)?)),
            CacheChoice::Memory => Some(Box::new(MemoryStore::new())),
            CacheChoice::Disabled => None,
        };

        Ok(WordStats {
            loader: RefCell::new(SnapshotLoader::new(source, self.offline, self.timeout)),
            cache: store.map(SnapshotCache::new),
        })
    }
}

// ---------------------------------------------------------------------------
// WordStats
// ---------------------------------------------------------------------------

/// Loads snapshot logs and derives dashboard data from them.
///
/// The cache policy lives here: [`records()`](Self::records) reuses the cache
/// while the source is unchanged, [`refresh()`](Self::refresh) always reloads.
pub struct WordStats {
    loader: RefCell<SnapshotLoader>,
    cache: Option<SnapshotCache<BoxedStore>>,
}

impl WordStats {
    /// Create a new builder.
    pub fn builder() -> WordStatsBuilder {
        WordStatsBuilder::default()
    }

    /// All snapshot records, from the cache when it holds the current version
    /// of the source.
    ///
    /// The source is re-checked on every call. If it cannot be checked (the
    /// file is gone, offline, host unreachable) any cached copy is used.
    pub fn records(&self) -> Result<Vec<SnapshotRecord>> {
        if let Some(cache) = &self.cache {
            let cached = match self.loader.borrow_mut().fingerprint()? {
                Some(fingerprint) => cache.load(&fingerprint)?,
                None => cache.load_any()?,
            };
            if let Some(records) = cached {
                return Ok(records);
            }
        }
        self.load_fresh()
    }

    /// Drop any cached copy and reload from the source.
    pub fn refresh(&self) -> Result<Vec<SnapshotRecord>> {
        self.clear_cache()?;
        let records = self.load_fresh()?;
        tracing::info!(records = records.len(), "snapshot cache refreshed");
        Ok(records)
    }

    fn load_fresh(&self) -> Result<Vec<SnapshotRecord>> {
        let (records, fingerprint) = self.loader.borrow_mut().load_versioned()?;
        if let Some(cache) = &self.cache {
            cache.save(&fingerprint, &records)?;
        }
        Ok(records)
    }

    /// Daily aggregates over the full history.
    pub fn daily(&self) -> Result<Vec<DailyAggregate>> {
        Ok(stats::aggregate(&self.records()?))
    }

    /// Assemble the dashboard view for `window` ending at `today`.
    pub fn dashboard(&self, window: TimeWindow, today: NaiveDate) -> Result<ViewModel> {
        let records = self.records()?;
        Ok(stats::assemble(&records, window, today))
    }

    /// [`dashboard()`](Self::dashboard) anchored at the local calendar date.
    pub fn dashboard_today(&self, window: TimeWindow) -> Result<ViewModel> {
        self.dashboard(window, Local::now().date_naive())
    }

    /// Remove cached records, if caching is enabled.
    pub fn clear_cache(&self) -> Result<()> {
        if let Some(cache) = &self.cache {
            cache.clear()?;
        }
        Ok(())
    }

    /// The configured source.
    pub fn source(&self) -> RecordSource {
        self.loader.borrow().source().clone()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for WordStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loader = self.loader.borrow();
        write!(
            f,
            "WordStats(source={}, cached={}, offline={})",
            loader.source(),
            self.cache.is_some(),
            loader.offline
        )
    }
}
