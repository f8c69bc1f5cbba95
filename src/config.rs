use std::path::PathBuf;
use std::time::Duration;

/// Day counts for the dashboard window presets. `year` covers 180 days.
pub const WEEK_DAYS: u32 = 7;
pub const MONTH_DAYS: u32 = 30;
pub const YEAR_DAYS: u32 = 180;

/// Number of raw snapshots surfaced as "recent saves".
pub const RECENT_SAVES: usize = 3;

/// Cache keys used by [`SnapshotCache`](crate::cache::SnapshotCache).
pub const SNAPSHOTS_KEY: &str = "snapshots";
pub const SOURCE_KEY: &str = "source";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Timestamp layouts accepted by the record normalizer, tried in order.
pub fn timestamp_formats() -> [&'static str; 3] {
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("wordstats")
    } else {
        PathBuf::from(".wordstats-cache")
    }
}
