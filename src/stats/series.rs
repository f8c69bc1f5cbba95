//! Calendar-contiguous series for the trend chart and heatmap.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::models::{ChartPoint, DailyAggregate, HeatmapPoint};

/// `count` consecutive calendar days ending at `anchor` (inclusive), ascending.
pub fn calendar_days(anchor: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .filter_map(|back| anchor.checked_sub_days(Days::new(u64::from(back))))
        .collect()
}

/// Expand sparse aggregates over a dense calendar.
///
/// Days with an aggregate emit its `net_change` and `total_words`. Later days
/// without one carry the last known total forward with zero daily words. Days
/// before the first aggregate in the walk get `total_words: None`.
pub fn materialize(daily: &[DailyAggregate], calendar: &[NaiveDate]) -> Vec<ChartPoint> {
    let by_date: HashMap<NaiveDate, &DailyAggregate> =
        daily.iter().map(|d| (d.date, d)).collect();

    let mut running: Option<u64> = None;
    calendar
        .iter()
        .map(|&date| match by_date.get(&date) {
            Some(day) => {
                running = Some(day.total_words);
                ChartPoint {
                    date,
                    daily_words: day.net_change,
                    total_words: running,
                }
            }
            None => ChartPoint {
                date,
                daily_words: 0,
                total_words: running,
            },
        })
        .collect()
}

/// Keep only aggregates falling inside the span of `calendar`.
pub fn within(daily: &[DailyAggregate], calendar: &[NaiveDate]) -> Vec<DailyAggregate> {
    let (Some(first), Some(last)) = (calendar.first(), calendar.last()) else {
        return Vec::new();
    };
    daily
        .iter()
        .filter(|d| d.date >= *first && d.date <= *last)
        .cloned()
        .collect()
}

/// Heatmap cells weighted by effort (`total_investment`).
pub fn heatmap(daily: &[DailyAggregate]) -> Vec<HeatmapPoint> {
    daily
        .iter()
        .map(|d| HeatmapPoint {
            date: d.date,
            count: d.total_investment,
        })
        .collect()
}
