use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged word-count record for a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: u64,
    pub word_count: u64,
    pub date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntryStore {
    pub entries: Vec<WordEntry>,
}

impl EntryStore {
    pub fn next_id(&self) -> u64 {
        self.entries.iter().map(|entry| entry.id).max().unwrap_or(0) + 1
    }
}

/// Body of `POST /api/word-entries`. The date arrives either as an RFC 3339
/// date-time (the form posts local midnight) or a bare `YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub word_count: u64,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One day of the trailing heatmap window.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct StreaksResponse {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_words: u64,
    pub writing_days: u32,
    pub heatmap: Vec<HeatmapCell>,
}
