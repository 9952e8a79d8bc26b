use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Primary key of a log record in the posts table.
pub type LogId = i64;

/// A single metadata row attached to a log record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogMeta {
    pub key: String,
    pub value: Option<String>,
}

/// A stored log entry together with its metadata and term relationships.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogRecord {
    pub id: LogId,
    pub title: String,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub meta: Vec<LogMeta>,
    /// Term taxonomy ids this record is related to.
    pub term_taxonomy_ids: Vec<i64>,
}
