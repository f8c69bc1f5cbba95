//! Shared fixtures for the wordstats integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::{Path, PathBuf};
use wordstats::{DailyAggregate, SnapshotRecord};

/// Parse `YYYY-MM-DD HH:MM:SS`.
pub fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Parse `YYYY-MM-DD`.
pub fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn record(timestamp: &str, filename: &str, total_words: u64, word_change: i64) -> SnapshotRecord {
    SnapshotRecord::new(ts(timestamp), filename, total_words, word_change)
}

/// Aggregate with only the fields streaks and series care about.
pub fn agg(date: &str, total_words: u64, net_change: i64) -> DailyAggregate {
    DailyAggregate {
        date: day(date),
        is_active: true,
        total_words,
        net_change,
        total_investment: net_change.unsigned_abs(),
    }
}

/// A small log spanning a gap day and an in-day rewrite.
///
/// 2024-01-01: 0 -> 100 (investment 100)
/// 2024-01-03: 100 -> 180 -> 150 (investment 80 + 30 = 110)
/// 2024-01-04: 150 -> 200 (investment 50)
pub const SAMPLE_LOG: &str = "\
timestamp,filename,total_words,word_change
2024-01-01 10:00:00,draft.md,100,100
2024-01-03 09:00:00,draft.md,180,80
2024-01-03 17:30:00,draft.md,150,-30
2024-01-04 08:15:00,draft.md,200,50
";

pub fn sample_records() -> Vec<SnapshotRecord> {
    vec![
        record("2024-01-01 10:00:00", "draft.md", 100, 100),
        record("2024-01-03 09:00:00", "draft.md", 180, 80),
        record("2024-01-03 17:30:00", "draft.md", 150, -30),
        record("2024-01-04 08:15:00", "draft.md", 200, 50),
    ]
}

/// Write `text` to `dir/name` and return the path.
pub fn write_log(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

/// Write `text` gzip-compressed to `dir/name` and return the path.
pub fn write_gz_log(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}
