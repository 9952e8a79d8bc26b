//! Row parsing helpers.
//!
//! The host stores `post_date` as `SQLite`'s `"YYYY-MM-DD HH:MM:SS"` text in
//! UTC. Bounds are formatted the same way so string comparison in SQL orders
//! correctly.

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

const STORE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both `SQLite`'s default format (`"2026-02-09 14:30:00"`) and
/// RFC 3339 (`"2026-02-09T14:30:00+00:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, STORE_DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Format an instant the way the host writes `post_date`.
#[must_use]
pub fn format_store_datetime(dt: DateTime<Utc>) -> String {
    dt.format(STORE_DATETIME_FORMAT).to_string()
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}
