//! Async wrapper around [`WordStats`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! files are read or URLs fetched.
//!
//! # Example
//!
//! ```no_run
//! # use wordstats::{AsyncWordStats, TimeWindow, WordStats};
//! # async fn example() -> wordstats::Result<()> {
//! let builder = WordStats::builder().file("wordcount.csv");
//! let stats = AsyncWordStats::build(builder).await?;
//!
//! let view = stats.dashboard_today(TimeWindow::Week).await?;
//! println!("{} day streak", view.writing_streak);
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::error::{Result, WordStatsError};
use crate::models::{SnapshotRecord, TimeWindow, ViewModel};
use crate::{WordStats, WordStatsBuilder};

/// Async wrapper around [`WordStats`].
///
/// The inner client is protected by a [`Mutex`] since it uses `RefCell`
/// internally.
pub struct AsyncWordStats {
    inner: Arc<Mutex<WordStats>>,
}

impl AsyncWordStats {
    /// Build the client on the blocking thread pool.
    pub async fn build(builder: WordStatsBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || {
            let stats = builder.build()?;
            Ok(AsyncWordStats {
                inner: Arc::new(Mutex::new(stats)),
            })
        })
        .await
        .map_err(|e| WordStatsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Run a sync operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&WordStats) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let stats = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = stats
                .lock()
                .map_err(|_| WordStatsError::InvalidArgument("WordStats lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| WordStatsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn records(&self) -> Result<Vec<SnapshotRecord>> {
        self.run(|s| s.records()).await
    }

    pub async fn refresh(&self) -> Result<Vec<SnapshotRecord>> {
        self.run(|s| s.refresh()).await
    }

    pub async fn dashboard(&self, window: TimeWindow, today: NaiveDate) -> Result<ViewModel> {
        self.run(move |s| s.dashboard(window, today)).await
    }

    pub async fn dashboard_today(&self, window: TimeWindow) -> Result<ViewModel> {
        self.run(move |s| s.dashboard_today(window)).await
    }
}
