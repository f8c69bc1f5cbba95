//! Record normalizer: turns raw log lines into [`SnapshotRecord`]s.
//!
//! The log is comma-delimited text with a header line:
//!
//! ```text
//! timestamp,filename,total_words,word_change
//! 2024-01-01 10:00:00,chapter-1.md,100,100
//! ```
//!
//! Lines with fewer than four fields or an unreadable timestamp are dropped.
//! Numeric fields that fail to parse become `0`.

use chrono::{DateTime, NaiveDateTime};

use crate::config;
use crate::models::SnapshotRecord;

/// Parse a whole log, discarding the header line and any malformed rows.
pub fn parse_log(text: &str) -> Vec<SnapshotRecord> {
    let mut dropped = 0usize;
    let records: Vec<SnapshotRecord> = text
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = parse_line(line);
            if record.is_none() {
                dropped += 1;
            }
            record
        })
        .collect();

    tracing::debug!(kept = records.len(), dropped, "normalized snapshot log");
    records
}

/// Parse one data line.
///
/// Fields are positional (`timestamp,filename,total_words,word_change`) and
/// extra trailing columns are ignored. When the third and fourth fields are
/// not both integers and there are more than four fields, the filename is
/// taken to contain commas instead: the last two fields are the counts and
/// everything between them and the timestamp is re-joined as the filename.
pub fn parse_line(line: &str) -> Option<SnapshotRecord> {
    let fields: Vec<&str> = line.trim_end_matches('\r').split(',').collect();
    if fields.len() < 4 {
        return None;
    }

    let timestamp = parse_timestamp(fields[0])?;
    let counts_at = if fields.len() == 4 || (is_integer(fields[2]) && is_integer(fields[3])) {
        2
    } else {
        fields.len() - 2
    };
    let filename = fields[1..counts_at].join(",").trim().to_string();
    let total_words = fields[counts_at].trim().parse::<u64>().unwrap_or(0);
    let word_change = fields[counts_at + 1].trim().parse::<i64>().unwrap_or(0);

    Some(SnapshotRecord {
        timestamp,
        filename,
        total_words,
        word_change,
    })
}

fn is_integer(field: &str) -> bool {
    field.trim().parse::<i128>().is_ok()
}

/// Parse a timestamp in any of the accepted layouts.
///
/// RFC 3339 inputs keep their wall-clock time; the offset is discarded.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    config::timestamp_formats()
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}
