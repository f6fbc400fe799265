use crate::models::TokenCounts;

/// Shown in the date column when a session has no timestamps.
pub const UNKNOWN_DATE: &str = "?";

/// Per-session usage, built once per transcript file.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// First 8 characters of the file name without `.jsonl`
    pub id: String,
    /// `YYYY-MM-DD` of the first timestamped record, or [`UNKNOWN_DATE`]
    pub date: String,
    pub duration_minutes: f64,
    /// User records
    pub turns: u64,
    /// Assistant records carrying usage
    pub api_calls: u64,
    pub tokens: TokenCounts,
    /// USD, derived from `tokens` when the summary is built
    pub estimated_cost: f64,
}

impl SessionSummary {
    pub fn total_tokens(&self) -> u64 {
        self.tokens.total()
    }
}
