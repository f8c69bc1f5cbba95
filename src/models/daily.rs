use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DailyAggregate — Summary of all snapshots within one calendar day
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub is_active: bool,
    /// `total_words` of the chronologically last snapshot of the day.
    pub total_words: u64,
    /// Difference against the previous aggregate, which may be several
    /// calendar days earlier. Equals `total_investment` on the first day.
    pub net_change: i64,
    /// Sum of `|word_change|` over the day's snapshots.
    pub total_investment: u64,
}
