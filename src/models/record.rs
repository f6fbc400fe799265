//! Schema for one line of a session transcript.
//!
//! Lines are JSON objects. Only three fields matter here: `type`, `timestamp`
//! and (on assistant lines) `message.usage`. Everything else is ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::models::TokenCounts;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
    pub cache_creation_input_tokens: Option<u64>,
}

impl MessageUsage {
    /// Missing sub-fields count as zero.
    pub fn tokens(&self) -> TokenCounts {
        TokenCounts {
            input: self.input_tokens.unwrap_or(0),
            output: self.output_tokens.unwrap_or(0),
            cache_read: self.cache_read_input_tokens.unwrap_or(0),
            cache_create: self.cache_creation_input_tokens.unwrap_or(0),
        }
    }
}

#[derive(Deserialize, Debug)]
struct RawRecord {
    #[serde(rename = "type")]
    kind: Option<Value>,
    timestamp: Option<String>,
    message: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    User {
        timestamp: Option<String>,
    },
    Assistant {
        timestamp: Option<String>,
        usage: Option<MessageUsage>,
    },
    /// Summaries, system lines, unknown or missing `type`
    Other {
        kind: Option<String>,
        timestamp: Option<String>,
    },
}

impl Record {
    pub fn parse_line(line: &str) -> Result<Record, serde_json::Error> {
        let value: Value = serde_json::from_str(line)?;
        if !value.is_object() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "expected a JSON object",
            ));
        }
        let raw: RawRecord = serde_json::from_value(value)?;
        let timestamp = raw.timestamp.filter(|t| !t.is_empty());

        let record = match raw.kind.as_ref().and_then(Value::as_str) {
            Some("user") => Record::User { timestamp },
            Some("assistant") => {
                let usage = match raw.message {
                    Some(Value::Object(mut msg)) => match msg.remove("usage") {
                        Some(u) => serde_json::from_value::<Option<MessageUsage>>(u)?,
                        None => None,
                    },
                    _ => None,
                };
                Record::Assistant { timestamp, usage }
            }
            _ => Record::Other {
                kind: raw.kind.map(|k| match k {
                    Value::String(s) => s,
                    other => other.to_string(),
                }),
                timestamp,
            },
        };
        Ok(record)
    }

    pub fn timestamp(&self) -> Option<&str> {
        match self {
            Record::User { timestamp }
            | Record::Assistant { timestamp, .. }
            | Record::Other { timestamp, .. } => timestamp.as_deref(),
        }
    }
}
