use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SnapshotRecord — One logged observation of a document's word count
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub timestamp: NaiveDateTime,
    pub filename: String,
    /// Cumulative words in the document at save time. Can shrink.
    pub total_words: u64,
    pub word_change: i64,
}

impl SnapshotRecord {
    pub fn new(
        timestamp: NaiveDateTime,
        filename: impl Into<String>,
        total_words: u64,
        word_change: i64,
    ) -> Self {
        Self {
            timestamp,
            filename: filename.into(),
            total_words,
            word_change,
        }
    }

    /// Calendar-day key of this snapshot.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
