//! Dashboard assembly: composes aggregation, streaks and series into a
//! [`ViewModel`].

use chrono::NaiveDate;

use super::{aggregate, series, streak};
use crate::config;
use crate::models::{SnapshotRecord, TimeWindow, ViewModel};

/// Build the full view model.
///
/// Aggregation runs over the whole record set so streaks and totals reflect
/// full history; only the chart, heatmap and window summary are restricted to
/// the trailing `window` ending at `today`.
pub fn assemble(records: &[SnapshotRecord], window: TimeWindow, today: NaiveDate) -> ViewModel {
    let daily = aggregate::aggregate(records);

    let calendar = series::calendar_days(today, window.days());
    let windowed = series::within(&daily, &calendar);
    let chart = series::materialize(&windowed, &calendar);
    let heatmap = series::heatmap(&windowed);

    let recent_saves: Vec<SnapshotRecord> = records
        .iter()
        .rev()
        .take(config::RECENT_SAVES)
        .cloned()
        .collect();

    let latest_total = records.last().map(|r| r.total_words).unwrap_or(0);
    let latest_net_change = daily.last().map(|d| d.net_change).unwrap_or(0);

    tracing::debug!(
        %window,
        %today,
        days = daily.len(),
        windowed = windowed.len(),
        "assembled dashboard"
    );

    ViewModel {
        writing_streak: streak::streak(&daily),
        longest_streak: streak::longest_streak(&daily),
        active_days: windowed.len(),
        window_investment: windowed
            .iter()
            .fold(0u64, |acc, d| acc.saturating_add(d.total_investment)),
        recent_saves,
        latest_total,
        latest_net_change,
        chart,
        heatmap,
        daily,
    }
}
