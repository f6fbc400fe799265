//! # Session Module
//!
//! Turns one transcript file into a [`SessionSummary`].
//!
//! Records are consumed in file order. Timestamps from any record bound the
//! session duration, `user` records count as turns, and `assistant` records with
//! a usage block count as API calls and contribute tokens.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::discovery::SESSION_FILE_EXT;
use crate::error::{Result, UsageError};
use crate::models::{Record, SessionSummary, TokenCounts, UNKNOWN_DATE};
use crate::pricing::Pricing;

const SESSION_ID_LEN: usize = 8;
const DATE_LEN: usize = 10;

#[derive(Default, Debug)]
struct SessionAccumulator {
    first_ts: Option<String>,
    last_ts: Option<String>,
    turns: u64,
    api_calls: u64,
    tokens: TokenCounts,
}

impl SessionAccumulator {
    fn push(&mut self, record: Record) {
        if let Some(ts) = record.timestamp() {
            if self.first_ts.is_none() {
                self.first_ts = Some(ts.to_string());
            }
            self.last_ts = Some(ts.to_string());
        }
        match record {
            Record::User { .. } => self.turns += 1,
            Record::Assistant {
                usage: Some(usage), ..
            } => {
                self.api_calls += 1;
                self.tokens += usage.tokens();
            }
            Record::Assistant { usage: None, .. } | Record::Other { .. } => {}
        }
    }

    fn finish(self, id: String, pricing: &Pricing) -> SessionSummary {
        let duration_minutes = match (self.first_ts.as_deref(), self.last_ts.as_deref()) {
            (Some(first), Some(last)) => duration_minutes(first, last).unwrap_or_else(|| {
                warn!(session = %id, first, last, "unparseable timestamps, duration set to 0");
                0.0
            }),
            _ => 0.0,
        };
        let date = self
            .first_ts
            .as_deref()
            .map(|ts| ts.chars().take(DATE_LEN).collect())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string());

        SessionSummary {
            id,
            date,
            duration_minutes,
            turns: self.turns,
            api_calls: self.api_calls,
            estimated_cost: pricing.cost(&self.tokens),
            tokens: self.tokens,
        }
    }
}

enum Timestamp {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

fn parse_timestamp(ts: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(Timestamp::Aware(dt));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(ts, fmt).ok())
        .map(Timestamp::Naive)
}

/// Minutes from `first` to `last`. `None` when either fails to parse or one
/// carries an offset and the other does not.
pub fn duration_minutes(first: &str, last: &str) -> Option<f64> {
    let delta = match (parse_timestamp(first)?, parse_timestamp(last)?) {
        (Timestamp::Aware(a), Timestamp::Aware(b)) => b.signed_duration_since(a),
        (Timestamp::Naive(a), Timestamp::Naive(b)) => b.signed_duration_since(a),
        _ => return None,
    };
    Some(delta.num_milliseconds() as f64 / 60_000.0)
}

/// File name minus `.jsonl`, first 8 characters.
pub fn session_id_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.replace(&format!(".{SESSION_FILE_EXT}"), "")
        .chars()
        .take(SESSION_ID_LEN)
        .collect()
}

/// Summarize an already-open transcript. `path` is used for the session id
/// and error messages.
pub fn summarize_reader<R: BufRead>(
    reader: R,
    path: &Path,
    pricing: &Pricing,
) -> Result<SessionSummary> {
    let mut acc = SessionAccumulator::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| UsageError::io(path, e))?;
        let t = line.trim();
        if t.is_empty() {
            continue;
        }
        let record = Record::parse_line(t).map_err(|source| UsageError::MalformedRecord {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        acc.push(record);
    }
    let summary = acc.finish(session_id_from_path(path), pricing);
    debug!(
        session = %summary.id,
        turns = summary.turns,
        api_calls = summary.api_calls,
        total_tokens = summary.total_tokens(),
        "parsed session"
    );
    Ok(summary)
}

pub fn parse_session(path: &Path, pricing: &Pricing) -> Result<SessionSummary> {
    let file = File::open(path).map_err(|e| UsageError::io(path, e))?;
    summarize_reader(BufReader::new(file), path, pricing)
}
