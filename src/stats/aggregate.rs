//! Daily aggregation: collapses snapshots into one summary per calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DailyAggregate, SnapshotRecord};

/// Group snapshots by calendar day and summarise each day.
///
/// Days come back in ascending date order. Within a day, records are ordered
/// by full timestamp (stable, so equal timestamps keep input order) and the
/// last one supplies `total_words`.
///
/// `net_change` is measured against the previous *aggregate*, so a gap of
/// several days without records is spanned by a single difference. The first
/// aggregate's `net_change` is its `total_investment`.
///
/// Sums and differences saturate at the integer bounds rather than overflow.
pub fn aggregate(records: &[SnapshotRecord]) -> Vec<DailyAggregate> {
    let mut groups: BTreeMap<NaiveDate, Vec<&SnapshotRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.date()).or_default().push(record);
    }

    let mut daily: Vec<DailyAggregate> = groups
        .into_iter()
        .filter_map(|(date, mut day)| {
            day.sort_by_key(|r| r.timestamp);
            let last = day.last()?;
            let total_investment = day
                .iter()
                .fold(0u64, |acc, r| acc.saturating_add(r.word_change.unsigned_abs()));
            Some(DailyAggregate {
                date,
                is_active: true,
                total_words: last.total_words,
                net_change: 0,
                total_investment,
            })
        })
        .collect();

    let mut previous: Option<u64> = None;
    for day in &mut daily {
        day.net_change = match previous {
            None => i64::try_from(day.total_investment).unwrap_or(i64::MAX),
            Some(prev) => clamp_to_i64(i128::from(day.total_words) - i128::from(prev)),
        };
        previous = Some(day.total_words);
    }

    tracing::debug!(
        snapshots = records.len(),
        days = daily.len(),
        "aggregated daily summaries"
    );
    daily
}

fn clamp_to_i64(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}
