use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ChartPoint — One calendar day on the trend chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub daily_words: i64,
    /// `None` until the first day with data; serialized as `null` so line
    /// charts leave leading gaps blank.
    pub total_words: Option<u64>,
}

// ---------------------------------------------------------------------------
// HeatmapPoint — One calendar cell on the activity heatmap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapPoint {
    pub date: NaiveDate,
    pub count: u64,
}
