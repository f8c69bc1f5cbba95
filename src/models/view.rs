use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ChartPoint, DailyAggregate, HeatmapPoint, SnapshotRecord};
use crate::config;
use crate::error::WordStatsError;

// ---------------------------------------------------------------------------
// TimeWindow — Trailing window presets for charts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Week,
    #[default]
    Month,
    Year,
}

impl TimeWindow {
    /// Number of calendar days the window covers, today inclusive.
    pub fn days(self) -> u32 {
        match self {
            TimeWindow::Week => config::WEEK_DAYS,
            TimeWindow::Month => config::MONTH_DAYS,
            TimeWindow::Year => config::YEAR_DAYS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeWindow {
    type Err = WordStatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(TimeWindow::Week),
            "month" => Ok(TimeWindow::Month),
            "year" => Ok(TimeWindow::Year),
            other => Err(WordStatsError::InvalidArgument(format!(
                "Unknown time window '{}': expected week, month or year",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewModel — Everything the presentation layer renders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// Full-history daily series, ascending by date.
    pub daily: Vec<DailyAggregate>,
    /// Most recent raw snapshots, newest first.
    pub recent_saves: Vec<SnapshotRecord>,
    pub latest_total: u64,
    pub latest_net_change: i64,
    pub writing_streak: u32,
    pub longest_streak: u32,
    /// Gap-filled trend series over the requested window.
    pub chart: Vec<ChartPoint>,
    pub heatmap: Vec<HeatmapPoint>,
    pub active_days: usize,
    pub window_investment: u64,
}
